//! Microphone capture and WAV helpers

use crate::config::AudioSettings;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, Stream, StreamConfig, StreamError};
use rica_application::SpeechError;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

/// Bits per sample for WAV encoding.
const BITS_PER_SAMPLE: u16 = 16;

/// Peak amplitude below which a capture counts as silence.
const SILENCE_THRESHOLD: i16 = 500;

/// Settings for one capture call
#[derive(Debug, Clone)]
pub struct CaptureSettings {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration: Duration,
}

impl From<&AudioSettings> for CaptureSettings {
    fn from(audio: &AudioSettings) -> Self {
        Self {
            sample_rate: audio.sample_rate,
            channels: audio.channels,
            duration: Duration::from_secs(audio.capture_secs),
        }
    }
}

/// Record from the default input device for the configured duration.
///
/// Blocking; run it on a blocking-capable thread, never on the async
/// executor. The device and stream are dropped before returning, so the
/// microphone is free again as soon as the samples are.
pub fn record(settings: &CaptureSettings) -> Result<Vec<i16>, SpeechError> {
    let device = default_input_device()?;
    let config = input_config(settings);
    let samples: Arc<Mutex<Vec<i16>>> = Arc::new(Mutex::new(Vec::new()));

    let stream = build_input_stream(&device, &config, samples.clone())?;
    stream
        .play()
        .map_err(|e| SpeechError::Device(e.to_string()))?;
    std::thread::sleep(settings.duration);
    drop(stream);

    let samples = samples.lock().unwrap().clone();
    if samples.is_empty() {
        return Err(SpeechError::NoSpeech);
    }
    Ok(samples)
}

/// Whether a capture contains nothing above the silence threshold.
pub fn is_silence(samples: &[i16]) -> bool {
    samples
        .iter()
        .all(|&sample| sample.saturating_abs() < SILENCE_THRESHOLD)
}

/// Encode samples as an in-memory WAV file.
pub fn wav_bytes(samples: &[i16], settings: &CaptureSettings) -> Result<Vec<u8>, SpeechError> {
    let spec = hound::WavSpec {
        channels: settings.channels,
        sample_rate: settings.sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = std::io::Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)
            .map_err(|e| SpeechError::Device(e.to_string()))?;
        for &sample in samples {
            writer
                .write_sample(sample)
                .map_err(|e| SpeechError::Device(e.to_string()))?;
        }
        writer
            .finalize()
            .map_err(|e| SpeechError::Device(e.to_string()))?;
    }
    Ok(cursor.into_inner())
}

/// Names of the available input devices, for status display.
pub fn input_device_names() -> Vec<String> {
    let host = cpal::default_host();
    match host.input_devices() {
        Ok(devices) => devices
            .map(|d| d.name().unwrap_or_else(|_| "<unknown>".to_string()))
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn default_input_device() -> Result<Device, SpeechError> {
    cpal::default_host()
        .default_input_device()
        .ok_or_else(|| SpeechError::Device("No input device available".to_string()))
}

fn input_config(settings: &CaptureSettings) -> StreamConfig {
    StreamConfig {
        channels: settings.channels,
        sample_rate: cpal::SampleRate(settings.sample_rate),
        buffer_size: cpal::BufferSize::Default,
    }
}

fn build_input_stream(
    device: &Device,
    config: &StreamConfig,
    samples: Arc<Mutex<Vec<i16>>>,
) -> Result<Stream, SpeechError> {
    device
        .build_input_stream(
            config,
            move |data: &[f32], _: &_| push_samples(&samples, data),
            log_stream_error,
            None,
        )
        .map_err(|e| SpeechError::Device(e.to_string()))
}

/// Convert floating-point frames into 16-bit PCM and append to the buffer.
fn push_samples(buffer: &Arc<Mutex<Vec<i16>>>, data: &[f32]) {
    let mut guard = buffer.lock().unwrap();
    for &sample in data {
        guard.push((sample * i16::MAX as f32) as i16);
    }
}

fn log_stream_error(error: StreamError) {
    warn!("Audio stream error: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> CaptureSettings {
        CaptureSettings {
            sample_rate: 16_000,
            channels: 1,
            duration: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_input_config_matches_settings() {
        let config = input_config(&settings());
        assert_eq!(config.channels, 1);
        assert_eq!(config.sample_rate.0, 16_000);
    }

    #[test]
    fn test_push_samples_converts_floats() {
        let samples = Arc::new(Mutex::new(Vec::new()));
        push_samples(&samples, &[0.0, 0.5, -1.0]);
        let guard = samples.lock().unwrap();
        assert_eq!(guard.len(), 3);
        assert_eq!(guard[0], 0);
        assert!(guard[1] > 0);
        assert!(guard[2] < 0);
    }

    #[test]
    fn test_silence_detection() {
        assert!(is_silence(&[]));
        assert!(is_silence(&[0, 12, -40, 300]));
        assert!(!is_silence(&[0, 12, 8000]));
        // i16::MIN must not overflow the abs()
        assert!(!is_silence(&[i16::MIN]));
    }

    #[test]
    fn test_wav_bytes_has_riff_header() {
        let samples = vec![0_i16, i16::MAX / 2, -i16::MAX / 2];
        let bytes = wav_bytes(&samples, &settings()).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // 16-bit mono: 2 bytes per sample after the 44-byte header
        assert_eq!(bytes.len(), 44 + samples.len() * 2);
    }
}
