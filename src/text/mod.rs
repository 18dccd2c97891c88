pub mod normalize;

pub use normalize::{normalize, normalize_with_limit, DEFAULT_MAX_LEN};
