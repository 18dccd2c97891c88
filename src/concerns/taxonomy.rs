//! Static keyword taxonomy for concern detection
//!
//! Maps each supported mental-health topic to the lowercase keywords that
//! signal it in conversation text. Declaration order matters: the classifier
//! breaks count ties by taxonomy order, so reordering entries changes results.

/// Identifier for a mental-health topic category
pub type ConcernLabel = &'static str;

/// Fallback concern used when nothing specific is detected
pub const GENERAL_MENTAL_HEALTH: ConcernLabel = "general mental health";

/// Concern labels with their associated keywords, in declaration order
pub const CONCERN_KEYWORDS: &[(ConcernLabel, &[&str])] = &[
    (
        "anxiety",
        &[
            "anxious", "anxiety", "worry", "worried", "panic", "fear", "nervous", "stress",
            "tense", "uneasy",
        ],
    ),
    (
        "depression",
        &[
            "depressed", "depression", "sad", "sadness", "hopeless", "despair", "miserable",
            "unhappy", "down", "blue", "empty",
        ],
    ),
    (
        "stress",
        &[
            "stress", "stressed", "overwhelmed", "pressure", "burnout", "exhausted", "tension",
            "strain",
        ],
    ),
    (
        "sleep",
        &[
            "insomnia", "sleep", "tired", "fatigue", "exhausted", "rest", "nightmare", "dream",
            "awake", "bed",
        ],
    ),
    (
        "relationships",
        &[
            "relationship", "partner", "spouse", "marriage", "friend", "family", "social",
            "connection", "lonely", "alone",
        ],
    ),
    (
        "self-esteem",
        &[
            "confidence", "self-esteem", "worth", "value", "inadequate", "failure", "imposter",
            "doubt", "insecure",
        ],
    ),
    (
        "trauma",
        &[
            "trauma", "ptsd", "abuse", "assault", "accident", "grief", "loss", "death",
            "flashback", "nightmare",
        ],
    ),
    (
        "anger",
        &[
            "anger", "angry", "rage", "furious", "irritated", "annoyed", "temper", "mad",
            "hostile", "resentment",
        ],
    ),
    (
        "addiction",
        &[
            "addiction", "substance", "alcohol", "drug", "gambling", "compulsive", "craving",
            "withdrawal", "relapse",
        ],
    ),
    (
        "work",
        &[
            "job", "career", "work", "workplace", "boss", "colleague", "promotion", "fired",
            "unemployed", "office",
        ],
    ),
    (
        GENERAL_MENTAL_HEALTH,
        &[
            "mental health", "therapy", "counseling", "wellbeing", "wellness", "self-care",
            "mindfulness", "meditation",
        ],
    ),
];
