/// Procedural sound effects.
///
/// A `Synth` renders enveloped oscillator tones and low-passed noise bursts
/// into mono `f32` buffers.  Buffers go to an `AudioSink`; the handle that
/// owns both is created explicitly (on the first key press) and every
/// playback call takes it as a parameter.  Without a handle playback is a
/// silent no-op.

use std::f32::consts::PI;

use rand::Rng;

use crate::entities::GameEvent;

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

// ── Recipes ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// One sample at `phase` (cycles, any real number).
    pub fn sample(self, phase: f32) -> f32 {
        let p = phase.rem_euclid(1.0);
        match self {
            Waveform::Sine => (2.0 * PI * p).sin(),
            Waveform::Square => {
                if p < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * p - 1.0,
            Waveform::Triangle => 1.0 - 4.0 * (p - 0.5).abs(),
        }
    }
}

/// Exponential attack to `peak`, then exponential decay to `end` at the end
/// of the sound.  All levels must be strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub start: f32,
    pub peak: f32,
    pub end: f32,
    pub attack_ms: f32,
}

impl Envelope {
    pub const TONE: Envelope = Envelope {
        start: 0.001,
        peak: 0.2,
        end: 0.0008,
        attack_ms: 4.0,
    };

    pub const NOISE: Envelope = Envelope {
        start: 0.001,
        peak: 0.25,
        end: 0.0008,
        attack_ms: 2.0,
    };

    /// Gain at `t_ms` into a sound lasting `duration_ms`.
    pub fn gain(&self, t_ms: f32, duration_ms: f32) -> f32 {
        let attack = self.attack_ms.min(duration_ms).max(f32::EPSILON);
        if t_ms <= attack {
            let k = (t_ms / attack).clamp(0.0, 1.0);
            return self.start * (self.peak / self.start).powf(k);
        }
        let decay = (duration_ms - attack).max(f32::EPSILON);
        let k = ((t_ms - attack) / decay).clamp(0.0, 1.0);
        self.peak * (self.end / self.peak).powf(k)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub freq_hz: f32,
    pub duration_ms: f32,
    pub detune_cents: f32,
}

impl Tone {
    pub const fn new(waveform: Waveform, freq_hz: f32, duration_ms: f32) -> Self {
        Tone {
            waveform,
            freq_hz,
            duration_ms,
            detune_cents: 0.0,
        }
    }

    pub fn effective_freq(&self) -> f32 {
        self.freq_hz * 2f32.powf(self.detune_cents / 1200.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseBurst {
    pub duration_ms: f32,
    pub cutoff_hz: f32,
}

/// One layer of a sound effect; layers start together and are summed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Voice {
    Tone(Tone),
    Noise(NoiseBurst),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sfx {
    Shoot,
    AlienShoot,
    AlienHit,
    PlayerHit,
    Pickup,
    Bonus,
}

impl Sfx {
    pub fn voices(self) -> Vec<Voice> {
        match self {
            Sfx::Shoot => vec![
                Voice::Tone(Tone::new(Waveform::Square, 520.0, 90.0)),
                Voice::Tone(Tone {
                    detune_cents: 6.0,
                    ..Tone::new(Waveform::Square, 820.0, 60.0)
                }),
            ],
            Sfx::AlienShoot => vec![Voice::Tone(Tone::new(Waveform::Sawtooth, 280.0, 80.0))],
            Sfx::AlienHit => vec![Voice::Noise(NoiseBurst {
                duration_ms: 140.0,
                cutoff_hz: 900.0,
            })],
            Sfx::PlayerHit => vec![
                Voice::Tone(Tone::new(Waveform::Sawtooth, 180.0, 220.0)),
                Voice::Noise(NoiseBurst {
                    duration_ms: 220.0,
                    cutoff_hz: 500.0,
                }),
            ],
            Sfx::Pickup => vec![
                Voice::Tone(Tone::new(Waveform::Sine, 660.0, 120.0)),
                Voice::Tone(Tone::new(Waveform::Triangle, 990.0, 160.0)),
            ],
            Sfx::Bonus => vec![
                Voice::Tone(Tone::new(Waveform::Triangle, 523.0, 300.0)),
                Voice::Tone(Tone::new(Waveform::Triangle, 659.0, 300.0)),
                Voice::Tone(Tone::new(Waveform::Triangle, 784.0, 300.0)),
            ],
        }
    }

    /// The sound a simulation event should make, if any.
    pub fn for_event(event: &GameEvent) -> Option<Sfx> {
        match event {
            GameEvent::PlayerShot => Some(Sfx::Shoot),
            GameEvent::AlienShot => Some(Sfx::AlienShoot),
            GameEvent::AlienHit => Some(Sfx::AlienHit),
            GameEvent::PlayerHit => Some(Sfx::PlayerHit),
            GameEvent::SatelliteCollected { .. } => Some(Sfx::Pickup),
            GameEvent::AsteroidMilestone => Some(Sfx::Bonus),
            _ => None,
        }
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug)]
pub struct Synth {
    pub sample_rate: u32,
}

impl Synth {
    pub fn new(sample_rate: u32) -> Self {
        Synth { sample_rate }
    }

    fn sample_count(&self, duration_ms: f32) -> usize {
        (self.sample_rate as f32 * duration_ms.max(0.0) / 1000.0) as usize
    }

    pub fn render_tone(&self, tone: &Tone) -> Vec<f32> {
        let rate = self.sample_rate as f32;
        let freq = tone.effective_freq();
        (0..self.sample_count(tone.duration_ms))
            .map(|i| {
                let t = i as f32 / rate;
                tone.waveform.sample(freq * t) * Envelope::TONE.gain(t * 1000.0, tone.duration_ms)
            })
            .collect()
    }

    /// White noise through a one-pole low-pass filter.
    pub fn render_noise(&self, noise: &NoiseBurst, rng: &mut impl Rng) -> Vec<f32> {
        let rate = self.sample_rate as f32;
        let rc = 1.0 / (2.0 * PI * noise.cutoff_hz.max(1.0));
        let dt = 1.0 / rate;
        let alpha = dt / (rc + dt);
        let mut filtered = 0.0;
        (0..self.sample_count(noise.duration_ms))
            .map(|i| {
                let white = rng.gen::<f32>() * 2.0 - 1.0;
                filtered += alpha * (white - filtered);
                let t_ms = i as f32 / rate * 1000.0;
                filtered * Envelope::NOISE.gain(t_ms, noise.duration_ms)
            })
            .collect()
    }

    /// Sum every voice of `sfx` into one buffer as long as the longest voice.
    pub fn render(&self, sfx: Sfx, rng: &mut impl Rng) -> Vec<f32> {
        let mut mix: Vec<f32> = Vec::new();
        for voice in sfx.voices() {
            let layer = match voice {
                Voice::Tone(tone) => self.render_tone(&tone),
                Voice::Noise(noise) => self.render_noise(&noise, rng),
            };
            if layer.len() > mix.len() {
                mix.resize(layer.len(), 0.0);
            }
            for (acc, s) in mix.iter_mut().zip(layer) {
                *acc += s;
            }
        }
        for s in mix.iter_mut() {
            *s = s.clamp(-1.0, 1.0);
        }
        mix
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

/// Where rendered buffers end up.
pub trait AudioSink {
    fn play(&mut self, samples: &[f32], sample_rate: u32);
}

/// Initialised audio: a synth plus its output.
pub struct AudioHandle<S: AudioSink> {
    synth: Synth,
    sink: S,
}

impl<S: AudioSink> AudioHandle<S> {
    pub fn init(sink: S, sample_rate: u32) -> Self {
        AudioHandle {
            synth: Synth::new(sample_rate),
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

/// Render and play `sfx`.  A no-op until audio has been initialised.
pub fn play_sfx<S: AudioSink>(handle: Option<&mut AudioHandle<S>>, sfx: Sfx, rng: &mut impl Rng) {
    let Some(handle) = handle else {
        return;
    };
    let samples = handle.synth.render(sfx, rng);
    handle.sink.play(&samples, handle.synth.sample_rate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Records buffers instead of playing them.
    #[derive(Debug, Default)]
    struct MemorySink {
        played: Vec<Vec<f32>>,
    }

    impl AudioSink for MemorySink {
        fn play(&mut self, samples: &[f32], _sample_rate: u32) {
            self.played.push(samples.to_vec());
        }
    }

    #[test]
    fn envelope_hits_its_levels() {
        let env = Envelope::TONE;
        assert!((env.gain(0.0, 100.0) - env.start).abs() < 1e-6);
        assert!((env.gain(env.attack_ms, 100.0) - env.peak).abs() < 1e-5);
        assert!((env.gain(100.0, 100.0) - env.end).abs() < 1e-6);
    }

    #[test]
    fn envelope_decays_monotonically() {
        let env = Envelope::NOISE;
        let mut last = env.gain(env.attack_ms, 200.0);
        for t in (10..=200).step_by(10) {
            let g = env.gain(t as f32, 200.0);
            assert!(g <= last);
            last = g;
        }
    }

    #[test]
    fn tone_length_matches_duration() {
        let synth = Synth::new(1_000);
        let buf = synth.render_tone(&Tone::new(Waveform::Square, 100.0, 250.0));
        assert_eq!(buf.len(), 250);
    }

    #[test]
    fn mix_spans_longest_voice() {
        let synth = Synth::new(1_000);
        let mut rng = StdRng::seed_from_u64(1);
        let buf = synth.render(Sfx::PlayerHit, &mut rng);
        assert_eq!(buf.len(), 220);
        assert!(buf.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn detune_raises_pitch() {
        let tone = Tone {
            detune_cents: 1200.0,
            ..Tone::new(Waveform::Sine, 440.0, 10.0)
        };
        assert!((tone.effective_freq() - 880.0).abs() < 0.01);
    }

    #[test]
    fn no_handle_means_silence() {
        let mut rng = StdRng::seed_from_u64(1);
        let uninitialised: Option<&mut AudioHandle<MemorySink>> = None;
        play_sfx(uninitialised, Sfx::Shoot, &mut rng);
    }

    #[test]
    fn handle_plays_into_sink() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut handle = AudioHandle::init(MemorySink::default(), 8_000);
        play_sfx(Some(&mut handle), Sfx::Shoot, &mut rng);
        play_sfx(Some(&mut handle), Sfx::AlienHit, &mut rng);
        assert_eq!(handle.sink().played.len(), 2);
        assert_eq!(handle.sink().played[0].len(), 720); // 90 ms at 8 kHz
    }
}
