pub mod state;
pub mod storage;
pub mod types;

pub use state::TherapySession;
pub use storage::SessionStore;
pub use types::{ChatMessage, Role};
