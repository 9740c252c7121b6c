//! Mono sample sources feeding the FFT thread.

use std::f32::consts::TAU;
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::math::random_range;

/// Pull-based supplier of mono samples in `[-1, 1]`
pub trait SampleSource {
    /// Fill `out` from the front and return how many samples were written.
    /// Zero means the source is exhausted.
    fn read(&mut self, out: &mut [f32]) -> usize;

    fn sample_rate(&self) -> u32;
}

/// Endless sine tone with optional seeded white noise
pub struct ToneSource {
    frequency_hz: f32,
    sample_rate: u32,
    noise_amplitude: f32,
    phase: f32,
    rng: StdRng,
}

impl ToneSource {
    pub fn new(frequency_hz: f32, sample_rate: u32, noise_amplitude: f32, seed: u64) -> Self {
        Self {
            frequency_hz,
            sample_rate,
            noise_amplitude,
            phase: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SampleSource for ToneSource {
    fn read(&mut self, out: &mut [f32]) -> usize {
        let step = TAU * self.frequency_hz / self.sample_rate as f32;
        for sample in out.iter_mut() {
            let noise = random_range(&mut self.rng, -self.noise_amplitude, self.noise_amplitude);
            *sample = self.phase.sin() * (1.0 - self.noise_amplitude) + noise;
            self.phase = (self.phase + step) % TAU;
        }
        out.len()
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// WAV file decoded up front and mixed down to mono
pub struct WavSource {
    samples: Vec<f32>,
    position: usize,
    sample_rate: u32,
}

impl WavSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, hound::Error> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => reader.samples::<f32>().collect::<Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let full_scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / full_scale))
                    .collect::<Result<_, _>>()?
            }
        };

        Ok(Self::from_interleaved(&interleaved, spec.channels, spec.sample_rate))
    }

    /// Mix interleaved frames of `channels` samples down to mono
    pub fn from_interleaved(interleaved: &[f32], channels: u16, sample_rate: u32) -> Self {
        let channels = usize::from(channels.max(1));
        let samples = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();
        Self {
            samples,
            position: 0,
            sample_rate,
        }
    }

    /// Total length in mono samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl SampleSource for WavSource {
    fn read(&mut self, out: &mut [f32]) -> usize {
        let remaining = &self.samples[self.position..];
        let n = remaining.len().min(out.len());
        out[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        n
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
