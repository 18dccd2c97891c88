pub mod meditations;
pub mod recommend;

pub use meditations::{meditations_for_category, Meditation, MeditationCategory, MEDITATIONS};
pub use recommend::{display_name, meditation_category_for, recommend, ResourceRecommendation};
