//! Speech ports
//!
//! Interfaces for the speech-to-text and text-to-speech capabilities used by
//! the voice front-end. Both are external services from the application's
//! point of view: audio in, text out, and the reverse.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from speech recognition or synthesis
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("No speech detected within the capture window")]
    NoSpeech,

    #[error("Speech was unintelligible")]
    Unintelligible,

    #[error("Speech service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Cannot synthesize empty text")]
    EmptyText,
}

/// Speech-to-text capability
///
/// One call captures a single bounded utterance from the microphone and
/// converts it to text. The implementation owns the audio device only for
/// the duration of the call.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn listen(&self) -> Result<String, SpeechError>;
}

/// Text-to-speech capability
///
/// Synthesizes and plays the text, returning once playback completes so the
/// calling loop proceeds to its next turn only after the reply was heard.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;
}
