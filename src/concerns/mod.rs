pub mod classifier;
pub mod taxonomy;

pub use classifier::classify_concerns;
pub use taxonomy::{ConcernLabel, CONCERN_KEYWORDS, GENERAL_MENTAL_HEALTH};
