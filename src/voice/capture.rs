//! Continuous microphone capture with silence-gated segmentation

use anyhow::Result;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use tokio::sync::mpsc;

use crate::app::AppMessage;

use super::whisper::SpeechClient;

/// A segment flushes after this much trailing silence.
const SILENCE_HOLD_MS: u32 = 700;
/// Frame RMS below this counts as silence.
const SILENCE_RMS: f32 = 0.012;
/// A segment also flushes once it reaches this length.
const MAX_SEGMENT_SECS: u32 = 15;
/// Segments shorter than this are dropped (breaths, key clicks).
const MIN_SEGMENT_MS: u32 = 400;

/// One chunk of speech ready for transcription
struct AudioSegment {
    samples: Vec<f32>,
    sample_rate: u32,
}

/// Continuous speech capture.
///
/// While listening, a dedicated thread runs the cpal input stream and cuts
/// the incoming audio into segments at pauses; a background task
/// transcribes each segment and delivers the text as a
/// [`AppMessage::TranscriptChunk`]. The capture side never touches app
/// state directly.
pub struct VoiceCapture {
    message_tx: mpsc::Sender<AppMessage>,
    listening: Arc<AtomicBool>,
}

impl VoiceCapture {
    pub fn new(message_tx: mpsc::Sender<AppMessage>) -> Self {
        Self {
            message_tx,
            listening: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether capture is currently running (for display only).
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    /// Start continuous capture.
    pub fn start(&self, client: SpeechClient) -> Result<()> {
        if self.listening.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let (segment_tx, mut segment_rx) = mpsc::channel::<AudioSegment>(8);

        // Run capture in a dedicated thread (cpal Stream isn't Send)
        let listening = self.listening.clone();
        let tx = self.message_tx.clone();
        std::thread::spawn(move || {
            if let Err(e) = run_capture(listening.clone(), segment_tx) {
                tracing::error!("Capture error: {}", e);
                listening.store(false, Ordering::SeqCst);
                let _ = tx.blocking_send(AppMessage::VoiceError(e.to_string()));
            }
        });

        // Transcribe segments in order as they arrive
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            while let Some(segment) = segment_rx.recv().await {
                match client.transcribe(&segment.samples, segment.sample_rate).await {
                    Ok(text) => {
                        let text = text.trim().to_string();
                        if !text.is_empty()
                            && tx.send(AppMessage::TranscriptChunk(text)).await.is_err()
                        {
                            return;
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(AppMessage::VoiceError(e.to_string())).await;
                    }
                }
            }
        });

        Ok(())
    }

    /// Stop continuous capture. Any tail audio is flushed and transcribed
    /// before the capture thread exits.
    pub fn stop(&self) {
        self.listening.store(false, Ordering::SeqCst);
    }
}

/// Run the capture loop in a dedicated thread
fn run_capture(listening: Arc<AtomicBool>, segment_tx: mpsc::Sender<AudioSegment>) -> Result<()> {
    use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| anyhow::anyhow!("No input device available"))?;

    let config = device.default_input_config()?;
    let sample_rate = config.sample_rate().0;
    let channels = config.channels() as usize;

    tracing::debug!("Capturing at {} Hz, {} channels", sample_rate, channels);

    let buffer: Arc<Mutex<Vec<f32>>> = Arc::new(Mutex::new(Vec::new()));

    // Build stream based on sample format
    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => {
            let buffer = buffer.clone();
            let listening = listening.clone();
            device.build_input_stream(
                &config.into(),
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    if listening.load(Ordering::SeqCst) {
                        let mut buffer = buffer.lock().unwrap();
                        // Convert to mono if stereo
                        if channels > 1 {
                            for chunk in data.chunks(channels) {
                                let mono: f32 = chunk.iter().sum::<f32>() / channels as f32;
                                buffer.push(mono);
                            }
                        } else {
                            buffer.extend_from_slice(data);
                        }
                    }
                },
                |err| {
                    tracing::error!("Audio input error: {}", err);
                },
                None,
            )?
        }
        cpal::SampleFormat::I16 => {
            let buffer = buffer.clone();
            let listening = listening.clone();
            device.build_input_stream(
                &config.into(),
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    if listening.load(Ordering::SeqCst) {
                        let mut buffer = buffer.lock().unwrap();
                        if channels > 1 {
                            for chunk in data.chunks(channels) {
                                let mono: f32 = chunk.iter().map(|&s| s as f32 / 32768.0).sum::<f32>()
                                    / channels as f32;
                                buffer.push(mono);
                            }
                        } else {
                            for &sample in data {
                                buffer.push(sample as f32 / 32768.0);
                            }
                        }
                    }
                },
                |err| {
                    tracing::error!("Audio input error: {}", err);
                },
                None,
            )?
        }
        cpal::SampleFormat::U16 => {
            let buffer = buffer.clone();
            let listening = listening.clone();
            device.build_input_stream(
                &config.into(),
                move |data: &[u16], _: &cpal::InputCallbackInfo| {
                    if listening.load(Ordering::SeqCst) {
                        let mut buffer = buffer.lock().unwrap();
                        if channels > 1 {
                            for chunk in data.chunks(channels) {
                                let mono: f32 = chunk
                                    .iter()
                                    .map(|&s| (s as f32 - 32768.0) / 32768.0)
                                    .sum::<f32>()
                                    / channels as f32;
                                buffer.push(mono);
                            }
                        } else {
                            for &sample in data {
                                buffer.push((sample as f32 - 32768.0) / 32768.0);
                            }
                        }
                    }
                },
                |err| {
                    tracing::error!("Audio input error: {}", err);
                },
                None,
            )?
        }
        _ => return Err(anyhow::anyhow!("Unsupported sample format")),
    };

    stream.play()?;

    let hold_samples = (sample_rate * SILENCE_HOLD_MS / 1000) as usize;
    let max_samples = (sample_rate * MAX_SEGMENT_SECS) as usize;
    let min_samples = (sample_rate * MIN_SEGMENT_MS / 1000) as usize;

    // Segmentation loop: flush on a pause after speech, or at max length
    while listening.load(Ordering::SeqCst) {
        std::thread::sleep(std::time::Duration::from_millis(100));

        let mut buffer = buffer.lock().unwrap();

        let tail_silent = buffer.len() >= hold_samples
            && rms(&buffer[buffer.len() - hold_samples..]) < SILENCE_RMS;
        let speech = has_speech(&buffer, sample_rate);

        if speech && (tail_silent || buffer.len() >= max_samples) {
            let samples = std::mem::take(&mut *buffer);
            drop(buffer);
            if samples.len() >= min_samples {
                if segment_tx
                    .blocking_send(AudioSegment {
                        samples,
                        sample_rate,
                    })
                    .is_err()
                {
                    break;
                }
            }
        } else if !speech && buffer.len() > hold_samples * 2 {
            // Nothing but silence; keep only the tail so the buffer
            // doesn't grow without bound
            let keep = buffer.len() - hold_samples;
            buffer.drain(..keep);
        }
    }

    // Flush whatever speech is left
    let samples = {
        let mut buffer = buffer.lock().unwrap();
        std::mem::take(&mut *buffer)
    };
    if samples.len() >= min_samples && has_speech(&samples, sample_rate) {
        let _ = segment_tx.blocking_send(AudioSegment {
            samples,
            sample_rate,
        });
    }

    // Stream is dropped here, stopping capture
    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// True if any 100ms frame rises above the silence threshold
fn has_speech(samples: &[f32], sample_rate: u32) -> bool {
    let frame = (sample_rate / 10).max(1) as usize;
    samples.chunks(frame).any(|c| rms(c) >= SILENCE_RMS)
}
