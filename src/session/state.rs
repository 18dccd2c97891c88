//! Per-conversation session state
//!
//! The enclosing application keeps all state in memory for the lifetime of a
//! session. Callers pass the session explicitly to handlers; nothing here is
//! global.

use crate::concerns::classifier::classify_concerns;
use crate::concerns::taxonomy::{ConcernLabel, GENERAL_MENTAL_HEALTH};
use crate::persona::therapists::TherapistId;
use crate::resources::recommend::meditation_category_for;
use crate::resources::meditations::MeditationCategory;
use crate::session::types::ChatMessage;
use tracing::{debug, info};

/// State for one therapy conversation
#[derive(Debug, Clone)]
pub struct TherapySession {
    therapist: Option<TherapistId>,
    messages: Vec<ChatMessage>,
    /// History stashed when the user switches therapists mid-conversation
    saved_messages: Vec<ChatMessage>,
    concerns: Vec<ConcernLabel>,
    meditation_category: MeditationCategory,
}

impl TherapySession {
    pub fn new() -> Self {
        Self {
            therapist: None,
            messages: Vec::new(),
            saved_messages: Vec::new(),
            concerns: vec![GENERAL_MENTAL_HEALTH],
            meditation_category: MeditationCategory::General,
        }
    }

    pub fn with_therapist(mut self, therapist: TherapistId) -> Self {
        self.therapist = Some(therapist);
        self
    }

    pub fn therapist(&self) -> Option<TherapistId> {
        self.therapist
    }

    /// Switch to a different therapist
    ///
    /// An in-progress conversation is stashed so it can be resumed later;
    /// the visible history starts fresh for the new therapist.
    pub fn select_therapist(&mut self, therapist: Option<TherapistId>) {
        if self.therapist == therapist {
            return;
        }

        if !self.messages.is_empty() {
            info!(
                "stashing {} messages while switching therapist",
                self.messages.len()
            );
            self.saved_messages.append(&mut self.messages);
        }

        self.therapist = therapist;
    }

    /// Bring stashed messages from a previous therapist back into the
    /// visible history, ahead of anything said since
    pub fn resume_saved(&mut self) {
        if self.saved_messages.is_empty() {
            return;
        }

        debug!("resuming {} stashed messages", self.saved_messages.len());
        let mut resumed = std::mem::take(&mut self.saved_messages);
        resumed.append(&mut self.messages);
        self.messages = resumed;
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(ChatMessage::assistant(content));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.saved_messages.clear();
        self.concerns = vec![GENERAL_MENTAL_HEALTH];
        self.meditation_category = MeditationCategory::General;
    }

    /// Re-run concern classification over the current history and update the
    /// derived meditation category
    pub fn refresh_concerns(&mut self) -> &[ConcernLabel] {
        self.concerns = classify_concerns(&self.messages);
        self.meditation_category = self
            .concerns
            .first()
            .map(|label| meditation_category_for(label))
            .unwrap_or(MeditationCategory::General);
        &self.concerns
    }

    /// Concerns from the most recent [`refresh_concerns`](Self::refresh_concerns)
    pub fn concerns(&self) -> &[ConcernLabel] {
        &self.concerns
    }

    pub fn meditation_category(&self) -> MeditationCategory {
        self.meditation_category
    }
}

impl Default for TherapySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = TherapySession::new();
        assert!(session.is_empty());
        assert_eq!(session.therapist(), None);
        assert_eq!(session.concerns(), [GENERAL_MENTAL_HEALTH]);
        assert_eq!(session.meditation_category(), MeditationCategory::General);
    }

    #[test]
    fn test_refresh_updates_concerns_and_category() {
        let mut session = TherapySession::new().with_therapist(TherapistId::Emma);
        session.push_user("I'm so anxious and worried lately, constant panic");
        session.push_assistant("That sounds difficult. When did it start?");

        let concerns = session.refresh_concerns().to_vec();
        assert_eq!(concerns[0], "anxiety");
        assert_eq!(session.meditation_category(), MeditationCategory::Anxiety);
    }

    #[test]
    fn test_switching_therapist_stashes_history() {
        let mut session = TherapySession::new().with_therapist(TherapistId::John);
        session.push_user("my job is exhausting");
        session.push_assistant("Tell me more about your work.");

        session.select_therapist(Some(TherapistId::Ethan));
        assert!(session.is_empty());
        assert_eq!(session.therapist(), Some(TherapistId::Ethan));

        session.push_user("anyway, where were we");
        session.resume_saved();
        assert_eq!(session.messages().len(), 3);
        assert_eq!(session.messages()[0].content, "my job is exhausting");
        assert_eq!(session.messages()[2].content, "anyway, where were we");
    }

    #[test]
    fn test_reselecting_same_therapist_keeps_history() {
        let mut session = TherapySession::new().with_therapist(TherapistId::John);
        session.push_user("hello");
        session.select_therapist(Some(TherapistId::John));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_clear_resets_derived_state() {
        let mut session = TherapySession::new();
        session.push_user("so much stress and pressure");
        session.refresh_concerns();
        assert_ne!(session.concerns(), [GENERAL_MENTAL_HEALTH]);

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.concerns(), [GENERAL_MENTAL_HEALTH]);
    }
}
