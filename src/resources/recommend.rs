//! Resource recommendations driven by detected concerns
//!
//! Maps classifier output to display labels and guided meditation exercises
//! for the resource panel.

use crate::concerns::classifier::classify_concerns;
use crate::concerns::taxonomy::ConcernLabel;
use crate::resources::meditations::{meditations_for_category, Meditation, MeditationCategory};
use crate::session::types::ChatMessage;
use tracing::debug;

/// How many focus areas the resource panel shows
const MAX_FOCUS_AREAS: usize = 3;

/// Human-readable name for a concern label
///
/// Unmapped labels fall back to the raw label at the call site, matching the
/// panel behavior ("work" has no display entry and shows as-is).
pub fn display_name(label: &str) -> Option<&'static str> {
    match label {
        "anxiety" => Some("Anxiety"),
        "depression" => Some("Depression"),
        "stress" => Some("Stress Management"),
        "sleep" => Some("Sleep Problems"),
        "relationships" => Some("Relationship Issues"),
        "trauma" => Some("Trauma & PTSD"),
        "self-esteem" => Some("Self-Esteem"),
        "addiction" => Some("Addiction & Recovery"),
        "anger" => Some("Anger Management"),
        "general mental health" => Some("General Mental Health"),
        _ => None,
    }
}

/// Meditation category matching a concern label, defaulting to general
pub fn meditation_category_for(label: &str) -> MeditationCategory {
    match label {
        "anxiety" => MeditationCategory::Anxiety,
        "stress" => MeditationCategory::Stress,
        "sleep" => MeditationCategory::Sleep,
        _ => MeditationCategory::General,
    }
}

/// Resources suggested for a conversation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecommendation {
    /// Ranked concern labels from the classifier
    pub concerns: Vec<ConcernLabel>,
    /// Display names for the top concerns
    pub focus_areas: Vec<&'static str>,
    /// Category of the primary concern
    pub meditation_category: MeditationCategory,
    /// Exercises in that category
    pub meditations: Vec<&'static Meditation>,
}

impl ResourceRecommendation {
    /// Build a recommendation from already-classified concerns
    pub fn for_concerns(concerns: Vec<ConcernLabel>) -> Self {
        let focus_areas = concerns
            .iter()
            .take(MAX_FOCUS_AREAS)
            .map(|&label| display_name(label).unwrap_or(label))
            .collect();

        let meditation_category = concerns
            .first()
            .map(|label| meditation_category_for(label))
            .unwrap_or(MeditationCategory::General);

        let meditations = meditations_for_category(meditation_category);

        debug!(
            "recommending {} meditations in category '{}' for concerns {:?}",
            meditations.len(),
            meditation_category.as_str(),
            concerns
        );

        Self {
            concerns,
            focus_areas,
            meditation_category,
            meditations,
        }
    }
}

/// Classify the conversation and assemble matching resources
pub fn recommend(messages: &[ChatMessage]) -> ResourceRecommendation {
    ResourceRecommendation::for_concerns(classify_concerns(messages))
}
