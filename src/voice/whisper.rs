//! OpenAI Whisper API integration

use anyhow::Result;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

const WHISPER_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Whisper expects 16 kHz mono audio.
const TARGET_SAMPLE_RATE: u32 = 16000;

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Client for the Whisper transcriptions endpoint.
#[derive(Clone)]
pub struct SpeechClient {
    client: reqwest::Client,
    api_key: String,
    language: String,
}

impl SpeechClient {
    /// Build a client from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(language: &str) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set"))?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            language: language.to_string(),
        })
    }

    /// Transcribe a segment of mono audio samples.
    pub async fn transcribe(&self, samples: &[f32], sample_rate: u32) -> Result<String> {
        let samples = if sample_rate != TARGET_SAMPLE_RATE {
            resample(samples, sample_rate, TARGET_SAMPLE_RATE)
        } else {
            samples.to_vec()
        };

        let wav_data = encode_wav(&samples, TARGET_SAMPLE_RATE)?;

        let part = Part::bytes(wav_data)
            .file_name("segment.wav")
            .mime_str("audio/wav")?;

        let form = Form::new()
            .part("file", part)
            .text("model", "whisper-1")
            .text("language", self.language.clone());

        let response = self
            .client
            .post(WHISPER_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await?;
            return Err(anyhow::anyhow!("Whisper API error: {}", error));
        }

        let result: TranscriptionResponse = response.json().await?;
        Ok(result.text)
    }
}

/// Simple linear resampling
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let new_len = (samples.len() as f64 / ratio) as usize;
    let mut output = Vec::with_capacity(new_len);

    for i in 0..new_len {
        let src_idx = i as f64 * ratio;
        let idx = src_idx as usize;
        let frac = src_idx - idx as f64;

        let sample = if idx + 1 < samples.len() {
            samples[idx] * (1.0 - frac as f32) + samples[idx + 1] * frac as f32
        } else if idx < samples.len() {
            samples[idx]
        } else {
            0.0
        };

        output.push(sample);
    }

    output
}

/// Encode samples as 16-bit WAV
fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>> {
    use std::io::Cursor;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            let amplitude = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
            writer.write_sample(amplitude)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}
