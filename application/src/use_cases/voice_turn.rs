//! Voice Turn use case.
//!
//! One cycle of the voice front-end: capture an utterance, resolve it, speak
//! the answer. Playback is awaited so the loop only prompts again after the
//! reply was heard. The caller owns the loop; this use case owns one turn.

use crate::ports::speech::{SpeechError, SpeechRecognizer, SpeechSynthesizer};
use crate::use_cases::resolve_inquiry::{ResolveError, ResolveInquiryUseCase};
use rica_domain::Resolution;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during a voice turn
#[derive(Error, Debug)]
pub enum VoiceTurnError {
    #[error("Speech error: {0}")]
    Speech(#[from] SpeechError),

    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Result of one voice turn
#[derive(Debug)]
pub enum VoiceTurn {
    /// The inquirer said a quit phrase; nothing was resolved.
    Quit { transcript: String },
    /// A resolution was produced and spoken.
    Answered {
        transcript: String,
        resolution: Resolution,
    },
}

/// Use case for one listen/resolve/speak cycle
pub struct VoiceTurnUseCase {
    recognizer: Arc<dyn SpeechRecognizer>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    resolver: Arc<ResolveInquiryUseCase>,
}

impl VoiceTurnUseCase {
    pub fn new(
        recognizer: Arc<dyn SpeechRecognizer>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        resolver: Arc<ResolveInquiryUseCase>,
    ) -> Self {
        Self {
            recognizer,
            synthesizer,
            resolver,
        }
    }

    /// Run one turn
    pub async fn execute(&self) -> Result<VoiceTurn, VoiceTurnError> {
        let transcript = self.recognizer.listen().await?;
        info!("Heard: {}", transcript);

        if is_quit_phrase(&transcript) {
            return Ok(VoiceTurn::Quit { transcript });
        }

        let resolution = self.resolver.resolve(None, &transcript).await?;
        self.synthesizer.speak(resolution.response_text()).await?;

        Ok(VoiceTurn::Answered {
            transcript,
            resolution,
        })
    }
}

/// Whether a spoken transcript asks to end the session.
///
/// Spoken input is matched per word ("okay, goodbye then" quits), while the
/// typed REPL does exact line matching instead.
pub fn is_quit_phrase(transcript: &str) -> bool {
    transcript
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .any(|word| matches!(word.as_str(), "quit" | "exit" | "goodbye" | "bye"))
}
