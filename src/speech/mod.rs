pub mod request;

pub use request::{SpeechRequest, MAX_SPEECH_INPUT_LEN, SPEECH_MODEL, SPEECH_SPEED};
