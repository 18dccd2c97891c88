//! Static catalog of guided meditation exercises

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeditationCategory {
    Anxiety,
    Stress,
    Sleep,
    Focus,
    General,
}

impl MeditationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeditationCategory::Anxiety => "anxiety",
            MeditationCategory::Stress => "stress",
            MeditationCategory::Sleep => "sleep",
            MeditationCategory::Focus => "focus",
            MeditationCategory::General => "general",
        }
    }
}

/// A guided meditation exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Meditation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Approximate length in minutes
    pub duration_minutes: u32,
    /// Narration script, suitable for speech synthesis
    pub script: &'static str,
    pub category: MeditationCategory,
}

pub const MEDITATIONS: &[Meditation] = &[
    Meditation {
        id: "breathing-1",
        title: "Deep Breathing Exercise",
        description: "A simple breathing technique to reduce anxiety and promote relaxation",
        duration_minutes: 5,
        script: "Find a comfortable position and close your eyes. Take a deep breath in \
                 through your nose for 4 counts. Hold for 2 counts. Exhale slowly through \
                 your mouth for 6 counts. Feel your body relaxing with each breath. Continue \
                 this pattern, focusing only on your breath.",
        category: MeditationCategory::Anxiety,
    },
    Meditation {
        id: "body-scan-1",
        title: "Progressive Body Scan",
        description: "A guided body scan to release tension and promote physical relaxation",
        duration_minutes: 10,
        script: "Lie down in a comfortable position. Starting at your toes, bring awareness \
                 to each part of your body, moving upward. Notice any tension and consciously \
                 release it as you exhale. Move from your toes to your feet, legs, hips, \
                 abdomen, chest, hands, arms, shoulders, neck, and finally your head.",
        category: MeditationCategory::Stress,
    },
    Meditation {
        id: "sleep-1",
        title: "Bedtime Relaxation",
        description: "A calming exercise to prepare your mind and body for sleep",
        duration_minutes: 15,
        script: "Lie comfortably in bed. Take three deep breaths. With each exhale, feel \
                 yourself sinking deeper into relaxation. Imagine a peaceful scene - perhaps \
                 a beach at sunset or a quiet forest. Engage all your senses in this imagery. \
                 What do you see? Hear? Feel? As you continue breathing slowly, allow your \
                 body to become heavy and your mind to quiet.",
        category: MeditationCategory::Sleep,
    },
    Meditation {
        id: "focus-1",
        title: "Mindful Awareness",
        description: "A short mindfulness exercise to improve focus and present-moment awareness",
        duration_minutes: 7,
        script: "Sit in a comfortable position with your back straight. Focus your attention \
                 on your breath, feeling the sensation of air moving in and out of your body. \
                 When your mind wanders, gently bring your attention back to your breath \
                 without judgment. Notice the thoughts that arise, acknowledge them, and let \
                 them pass like clouds in the sky.",
        category: MeditationCategory::Focus,
    },
    Meditation {
        id: "gratitude-1",
        title: "Gratitude Meditation",
        description: "A positive meditation focusing on gratitude and appreciation",
        duration_minutes: 8,
        script: "Close your eyes and take a few deep breaths. Bring to mind something or \
                 someone you're grateful for. It could be something simple - a warm cup of \
                 tea, a kind gesture, or a beautiful sunset. Feel the gratitude in your \
                 heart. Notice how this feeling affects your body and mind. Continue bringing \
                 to mind things you appreciate, savoring each one.",
        category: MeditationCategory::General,
    },
];

/// Exercises in the given category, falling back to the general ones when the
/// category has no entries
pub fn meditations_for_category(category: MeditationCategory) -> Vec<&'static Meditation> {
    let matching: Vec<&Meditation> = MEDITATIONS
        .iter()
        .filter(|m| m.category == category)
        .collect();

    if matching.is_empty() {
        MEDITATIONS
            .iter()
            .filter(|m| m.category == MeditationCategory::General)
            .collect()
    } else {
        matching
    }
}
