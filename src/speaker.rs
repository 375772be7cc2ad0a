/// Sound output for the terminal build.
///
/// Rendered effects go to the default output device through rodio, one
/// detached sink per effect so overlapping sounds mix.  When no device can
/// be opened (or the crate is built without the `speaker` feature) buffers
/// are reported to the log instead and the game runs the same.

use log::{debug, info};
#[cfg(feature = "speaker")]
use log::warn;
#[cfg(feature = "speaker")]
use rodio::{buffer::SamplesBuffer, OutputStream, OutputStreamBuilder, Sink};

use galactic_invaders::audio::{AudioHandle, AudioSink, DEFAULT_SAMPLE_RATE};

// ── Device output ─────────────────────────────────────────────────────────────

#[cfg(feature = "speaker")]
pub struct RodioSink {
    stream: OutputStream,
}

#[cfg(feature = "speaker")]
impl RodioSink {
    pub fn open() -> Result<Self, rodio::StreamError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // Raw-mode terminal: nothing may reach stderr on shutdown.
        stream.log_on_drop(false);
        Ok(RodioSink { stream })
    }
}

/// Wrap a mono buffer for playback.
#[cfg(feature = "speaker")]
fn mono_buffer(samples: &[f32], sample_rate: u32) -> SamplesBuffer {
    SamplesBuffer::new(1, sample_rate, samples.to_vec())
}

#[cfg(feature = "speaker")]
impl AudioSink for RodioSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32) {
        if samples.is_empty() {
            return;
        }
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(mono_buffer(samples, sample_rate));
        sink.detach();
    }
}

// ── Log output ────────────────────────────────────────────────────────────────

/// Reports rendered buffers to the log.
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32) {
        let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        debug!(
            "sfx: {} samples @ {} Hz, peak {:.3}",
            samples.len(),
            sample_rate,
            peak
        );
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

pub enum Speaker {
    #[cfg(feature = "speaker")]
    Device(RodioSink),
    Log(LogSink),
}

impl Speaker {
    pub fn describe(&self) -> &'static str {
        match self {
            #[cfg(feature = "speaker")]
            Speaker::Device(_) => "default output device",
            Speaker::Log(_) => "log only",
        }
    }
}

impl AudioSink for Speaker {
    fn play(&mut self, samples: &[f32], sample_rate: u32) {
        match self {
            #[cfg(feature = "speaker")]
            Speaker::Device(sink) => sink.play(samples, sample_rate),
            Speaker::Log(sink) => sink.play(samples, sample_rate),
        }
    }
}

#[cfg(feature = "speaker")]
fn open_speaker() -> Speaker {
    match RodioSink::open() {
        Ok(sink) => Speaker::Device(sink),
        Err(e) => {
            warn!("No audio output device ({}); effects go to the log", e);
            Speaker::Log(LogSink)
        }
    }
}

#[cfg(not(feature = "speaker"))]
fn open_speaker() -> Speaker {
    Speaker::Log(LogSink)
}

/// Bring audio up on the best available output.
pub fn start() -> AudioHandle<Speaker> {
    let handle = AudioHandle::init(open_speaker(), DEFAULT_SAMPLE_RATE);
    info!(
        "Audio initialised at {} Hz ({})",
        DEFAULT_SAMPLE_RATE,
        handle.sink().describe()
    );
    handle
}
