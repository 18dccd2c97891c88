pub mod prompts;
pub mod therapists;

pub use prompts::system_prompt;
pub use therapists::{therapist_by_id, voice_for_therapist, Therapist, TherapistId, THERAPISTS};
