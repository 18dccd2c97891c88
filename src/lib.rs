pub mod chat;
pub mod concerns;
pub mod persona;
pub mod resources;
pub mod session;
pub mod speech;
pub mod text;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolaceError {
    #[error("Unknown therapist: {0}")]
    UnknownTherapist(String),

    #[error("Conversation is empty")]
    EmptyConversation,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SolaceError {
    /// Get a user-friendly description
    pub fn user_message(&self) -> String {
        match self {
            SolaceError::UnknownTherapist(_) => {
                "That therapist isn't available. Please pick one from the list.".to_string()
            }
            SolaceError::EmptyConversation => {
                "There are no messages to send yet. Say something first.".to_string()
            }
            SolaceError::ConfigError(_) => {
                "Configuration error. Please check settings.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SolaceError>;
