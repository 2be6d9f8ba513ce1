//! Groq Whisper speech-to-text adapter

use crate::audio::capture::{self, CaptureSettings};
use crate::config::{AudioSettings, ModelSettings};
use async_trait::async_trait;
use rica_application::{SpeechError, SpeechRecognizer};
use std::time::Duration;
use tracing::{debug, info};

/// Recognizer that captures from the microphone and transcribes via Groq's
/// Whisper endpoint
pub struct GroqWhisperRecognizer {
    client: reqwest::Client,
    api_key: String,
    whisper_model: String,
    transcribe_url: String,
    capture: CaptureSettings,
}

impl GroqWhisperRecognizer {
    pub fn new(
        audio: &AudioSettings,
        model: &ModelSettings,
        api_key: impl Into<String>,
    ) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(model.timeout_secs))
            .build()
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            whisper_model: audio.whisper_model.clone(),
            transcribe_url: format!(
                "{}/audio/transcriptions",
                model.base_url.trim_end_matches('/')
            ),
            capture: CaptureSettings::from(audio),
        })
    }

    async fn transcribe(&self, wav: Vec<u8>) -> Result<String, SpeechError> {
        let part = reqwest::multipart::Part::bytes(wav)
            .file_name("capture.wav")
            .mime_str("audio/wav")
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", self.whisper_model.clone())
            .text("response_format", "json");

        let response = self
            .client
            .post(&self.transcribe_url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SpeechError::ServiceUnavailable(format!(
                "transcription returned status {}",
                status
            )));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SpeechError::ServiceUnavailable(e.to_string()))?;

        parse_transcript(&json)
    }
}

#[async_trait]
impl SpeechRecognizer for GroqWhisperRecognizer {
    async fn listen(&self) -> Result<String, SpeechError> {
        debug!("Capturing up to {:?} of audio", self.capture.duration);

        // Capture blocks for the whole window; keep it off the executor.
        let settings = self.capture.clone();
        let samples = tokio::task::spawn_blocking(move || capture::record(&settings))
            .await
            .map_err(|e| SpeechError::Device(e.to_string()))??;

        if capture::is_silence(&samples) {
            return Err(SpeechError::NoSpeech);
        }

        let wav = capture::wav_bytes(&samples, &self.capture)?;
        let text = self.transcribe(wav).await?;
        info!("Transcribed {} bytes of audio", text.len());
        Ok(text)
    }
}

/// Extract the transcript from a transcription response body.
fn parse_transcript(json: &serde_json::Value) -> Result<String, SpeechError> {
    let text = json
        .get("text")
        .and_then(|t| t.as_str())
        .unwrap_or("")
        .trim();

    if text.is_empty() {
        return Err(SpeechError::Unintelligible);
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_transcript() {
        let body = json!({"text": "  turn on the lights  "});
        assert_eq!(parse_transcript(&body).unwrap(), "turn on the lights");
    }

    #[test]
    fn test_blank_transcript_is_unintelligible() {
        assert!(matches!(
            parse_transcript(&json!({"text": "   "})).unwrap_err(),
            SpeechError::Unintelligible
        ));
        assert!(matches!(
            parse_transcript(&json!({})).unwrap_err(),
            SpeechError::Unintelligible
        ));
    }
}
