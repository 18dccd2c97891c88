//! Speech synthesis request shaping for the hosted TTS service
//!
//! Runs response text through the normalizer and pairs it with the persona's
//! voice and the fixed model parameters the speech endpoint uses.

use crate::persona::therapists::{voice_for_therapist, TherapistId};
use crate::text::normalize::normalize_with_limit;
use serde::Serialize;
use tracing::debug;

/// Synthesis model the speech endpoint targets
pub const SPEECH_MODEL: &str = "tts-1";

/// Playback speed multiplier
pub const SPEECH_SPEED: f64 = 1.0;

/// Input length the speech API accepts comfortably
pub const MAX_SPEECH_INPUT_LEN: usize = 1000;

/// Payload for one synthesis call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub model: &'static str,
    pub voice: &'static str,
    pub input: String,
    pub speed: f64,
}

impl SpeechRequest {
    /// Prepare a synthesis request for the given text and persona
    ///
    /// The text is cleaned and bounded before it goes anywhere near the API.
    /// Returns `None` when nothing speakable remains, so callers skip the
    /// call instead of synthesizing silence.
    pub fn new(text: &str, therapist: Option<TherapistId>) -> Option<Self> {
        let input = normalize_with_limit(text, MAX_SPEECH_INPUT_LEN);
        if input.is_empty() {
            debug!("nothing speakable after cleaning, skipping synthesis");
            return None;
        }

        let voice = voice_for_therapist(therapist);
        debug!(
            "prepared speech request: {} chars, voice '{}'",
            input.chars().count(),
            voice
        );

        Some(Self {
            model: SPEECH_MODEL,
            voice,
            input,
            speed: SPEECH_SPEED,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_persona_voice() {
        let request = SpeechRequest::new("Hello there", Some(TherapistId::John)).unwrap();
        assert_eq!(request.voice, "onyx");
        assert_eq!(request.model, SPEECH_MODEL);

        let request = SpeechRequest::new("Hello there", None).unwrap();
        assert_eq!(request.voice, "nova");
    }

    #[test]
    fn test_input_is_cleaned_and_bounded() {
        let request = SpeechRequest::new("Take a breath!!! \u{0007} And relax...", None).unwrap();
        assert_eq!(request.input, "Take a breath! And relax.");

        let long = "word ".repeat(400);
        let request = SpeechRequest::new(&long, None).unwrap();
        assert!(request.input.chars().count() <= MAX_SPEECH_INPUT_LEN);
    }

    #[test]
    fn test_unspeakable_text_yields_no_request() {
        assert!(SpeechRequest::new("", None).is_none());
        assert!(SpeechRequest::new("   \t  ", None).is_none());
        assert!(SpeechRequest::new("@#$%^&*", Some(TherapistId::Emma)).is_none());
    }

    #[test]
    fn test_serializes_to_wire_shape() {
        let request = SpeechRequest::new("Good evening.", Some(TherapistId::Ethan)).unwrap();
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "tts-1");
        assert_eq!(json["voice"], "alloy");
        assert_eq!(json["input"], "Good evening.");
        assert_eq!(json["speed"], 1.0);
    }
}
