//! End-to-end flow over the library surface: session state, classification,
//! request shaping, and resource recommendation working together.

use solace::chat::{CompletionRequest, CHAT_MODEL};
use solace::concerns::GENERAL_MENTAL_HEALTH;
use solace::persona::{system_prompt, TherapistId};
use solace::resources::{recommend, MeditationCategory};
use solace::session::{SessionStore, TherapySession};
use solace::speech::{SpeechRequest, MAX_SPEECH_INPUT_LEN};
use solace::SolaceError;

#[test]
fn full_conversation_flow() {
    let store = SessionStore::new();
    let session_id = store.create();

    store
        .update(session_id, |session| {
            session.select_therapist(Some(TherapistId::Emma));
            session.push_user("I've been feeling anxious and can't sleep, it's all work stress.");
        })
        .unwrap();

    // Chat request carries the persona prompt and the history
    let session = store.get(session_id).unwrap();
    let completion = CompletionRequest::from_session(&session).unwrap();
    assert_eq!(completion.model, CHAT_MODEL);
    assert_eq!(completion.system, system_prompt(Some(TherapistId::Emma)));
    assert_eq!(completion.messages.len(), 1);

    // Assistant reply arrives, concerns refresh
    let concerns = store
        .update(session_id, |session| {
            session.push_assistant(
                "That sounds heavy. Let's start with the sleep - what do your nights look like?",
            );
            session.refresh_concerns().to_vec()
        })
        .unwrap();

    assert!(["anxiety", "stress", "sleep"].contains(&concerns[0]));
    assert!(!concerns.is_empty() && concerns.len() <= 3);

    // Resources follow the primary concern
    let session = store.get(session_id).unwrap();
    let recommendation = recommend(session.messages());
    assert_eq!(recommendation.concerns, concerns);
    assert!(!recommendation.meditations.is_empty());

    // The reply can be spoken with the persona's voice
    let speech = SpeechRequest::new(
        "That sounds heavy. Let's start with the sleep - what do your nights look like?",
        session.therapist(),
    )
    .unwrap();
    assert_eq!(speech.voice, "nova");
    assert!(speech.input.chars().count() <= MAX_SPEECH_INPUT_LEN);
}

#[test]
fn switching_therapists_preserves_context() {
    let mut session = TherapySession::new().with_therapist(TherapistId::John);
    session.push_user("my marriage is falling apart and I can't stop drinking alcohol");
    session.refresh_concerns();

    session.select_therapist(Some(TherapistId::Emma));
    assert!(session.is_empty());

    // The new therapist starts fresh but the old context can come back
    session.push_user("I'd like to continue where I left off");
    session.resume_saved();
    assert_eq!(session.messages().len(), 2);

    let concerns = session.refresh_concerns().to_vec();
    assert!(concerns.contains(&"relationships"));
    assert!(concerns.contains(&"addiction"));
}

#[test]
fn empty_session_yields_default_resources() {
    let session = TherapySession::new();
    let recommendation = recommend(session.messages());

    assert_eq!(recommendation.concerns, vec![GENERAL_MENTAL_HEALTH]);
    assert_eq!(
        recommendation.meditation_category,
        MeditationCategory::General
    );

    // And an empty history cannot become a completion request
    let err = CompletionRequest::from_session(&session).unwrap_err();
    assert_eq!(err, SolaceError::EmptyConversation);
    assert!(!err.user_message().is_empty());
}

#[test]
fn model_text_is_safe_for_speech() {
    // Streaming model output with markdown leftovers, smart punctuation, and
    // stray control characters still produces a clean synthesis payload.
    let raw = "Here's a thought\u{2028}*breathe*... \u{0007}try counting backwards!!! \
               From 10\u{2029}to 1.";
    let speech = SpeechRequest::new(raw, Some(TherapistId::Ethan)).unwrap();

    assert_eq!(
        speech.input,
        "Here's a thought breathe. try counting backwards! From 10 to 1."
    );
}
