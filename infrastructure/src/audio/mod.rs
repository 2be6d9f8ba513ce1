//! Audio adapters for the voice front-end
//!
//! Capture is cpal against the default input device; recognition uploads the
//! WAV-encoded capture to Groq's Whisper endpoint; synthesis shells out to
//! the platform speech command. The microphone handle only exists inside one
//! capture call, so there is nothing to release on shutdown beyond letting
//! the call finish.

pub mod capture;
mod recognizer;
mod synthesizer;

pub use capture::{CaptureSettings, input_device_names};
pub use recognizer::GroqWhisperRecognizer;
pub use synthesizer::CommandSynthesizer;
