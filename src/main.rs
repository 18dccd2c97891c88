use anyhow::Result;
use solace::chat::CompletionRequest;
use solace::persona::TherapistId;
use solace::resources::recommend;
use solace::session::SessionStore;
use solace::speech::SpeechRequest;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solace=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Solace demo session");

    let store = SessionStore::new();
    let session_id = store.create();

    store
        .update(session_id, |session| {
            session.select_therapist(Some(TherapistId::Emma));
            session.push_user("I've been feeling anxious and can't sleep, it's all work stress.");
            session.push_assistant(
                "That sounds like a lot to carry. When did the sleepless nights start?",
            );
            session.refresh_concerns();
        })
        .ok_or_else(|| anyhow::anyhow!("session disappeared from the store"))?;

    let session = store
        .get(session_id)
        .ok_or_else(|| anyhow::anyhow!("session disappeared from the store"))?;

    let completion = CompletionRequest::from_session(&session)?;
    println!(
        "completion request:\n{}",
        serde_json::to_string_pretty(&completion)?
    );

    let recommendation = recommend(session.messages());
    println!("focus areas: {}", recommendation.focus_areas.join(", "));
    for meditation in &recommendation.meditations {
        println!(
            "suggested meditation: {} ({} min)",
            meditation.title, meditation.duration_minutes
        );
    }

    if let Some(speech) = SpeechRequest::new(
        "That sounds like a lot to carry. When did the sleepless nights start?",
        session.therapist(),
    ) {
        println!("speech request:\n{}", serde_json::to_string_pretty(&speech)?);
    }

    Ok(())
}
