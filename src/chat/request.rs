//! Completion request shaping for the hosted LLM service
//!
//! Builds the payload the chat endpoint forwards to the completion API. The
//! network call itself lives with the caller; this module only decides what
//! gets sent.

use crate::persona::prompts::system_prompt;
use crate::persona::therapists::TherapistId;
use crate::session::state::TherapySession;
use crate::session::types::{ChatMessage, Role};
use crate::{Result, SolaceError};
use serde::Serialize;
use tracing::debug;

/// Completion model the chat endpoint targets
pub const CHAT_MODEL: &str = "gpt-4o";

/// Sampling temperature, slightly above zero for natural-sounding replies
pub const CHAT_TEMPERATURE: f64 = 0.7;

/// A message as the completion API expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// Payload for one completion call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: &'static str,
    pub system: &'static str,
    pub messages: Vec<WireMessage>,
    pub temperature: f64,
}

impl CompletionRequest {
    /// Build a request from a conversation and the selected persona
    ///
    /// The persona decides the system prompt. An empty history is rejected;
    /// the route layer reports that as a request-level error.
    pub fn new(messages: &[ChatMessage], therapist: Option<TherapistId>) -> Result<Self> {
        if messages.is_empty() {
            return Err(SolaceError::EmptyConversation);
        }

        debug!(
            "building completion request: {} messages, therapist {:?}",
            messages.len(),
            therapist
        );

        Ok(Self {
            model: CHAT_MODEL,
            system: system_prompt(therapist),
            messages: messages.iter().map(WireMessage::from).collect(),
            temperature: CHAT_TEMPERATURE,
        })
    }

    /// Build a request for a session's visible history
    pub fn from_session(session: &TherapySession) -> Result<Self> {
        Self::new(session.messages(), session.therapist())
    }
}
