//! Platform speech-command synthesizer

use async_trait::async_trait;
use rica_application::{SpeechError, SpeechSynthesizer};
use tracing::debug;

#[cfg(target_os = "macos")]
const SPEECH_COMMAND: &str = "say";
#[cfg(not(target_os = "macos"))]
const SPEECH_COMMAND: &str = "espeak";

/// Synthesizer that shells out to the OS speech command
///
/// Playback runs in a child process awaited by tokio, so the caller's loop
/// is suspended (not blocked) until the utterance finishes.
#[derive(Default)]
pub struct CommandSynthesizer;

impl CommandSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    async fn speak(&self, text: &str) -> Result<(), SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        debug!("Speaking {} bytes via {}", text.len(), SPEECH_COMMAND);

        let status = tokio::process::Command::new(SPEECH_COMMAND)
            .arg(text)
            .status()
            .await
            .map_err(|e| {
                SpeechError::ServiceUnavailable(format!("{}: {}", SPEECH_COMMAND, e))
            })?;

        if !status.success() {
            return Err(SpeechError::ServiceUnavailable(format!(
                "{} exited with {}",
                SPEECH_COMMAND, status
            )));
        }
        Ok(())
    }
}
