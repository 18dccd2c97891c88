pub mod request;

pub use request::{CompletionRequest, WireMessage, CHAT_MODEL, CHAT_TEMPERATURE};
