//! FFT magnitude analysis and the background analysis thread.

use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::f32::consts::PI;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use super::slot::FrameSlot;
use super::source::SampleSource;
use crate::params::FFTConfig;

/// Hann window function for FFT analysis
pub fn hann_window(index: usize, size: usize) -> f32 {
    0.5 * (1.0 - ((2.0 * PI * index as f32) / (size as f32 - 1.0)).cos())
}

/// Windowed real-input FFT producing `fft_size / 2` magnitudes
pub struct MagnitudeSpectrum {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    buffer: Vec<Complex<f32>>,
    magnitudes: Vec<f32>,
}

impl MagnitudeSpectrum {
    pub fn new(fft_size: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            window: (0..fft_size).map(|i| hann_window(i, fft_size)).collect(),
            buffer: vec![Complex::new(0.0, 0.0); fft_size],
            magnitudes: vec![0.0; fft_size / 2],
        }
    }

    /// Magnitudes of `samples`, zero-padded (or truncated) to the FFT size.
    ///
    /// Scaled so a full-scale sine centred on a bin reads about 0.5.
    pub fn compute(&mut self, samples: &[f32]) -> &[f32] {
        let n = self.buffer.len();
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let sample = samples.get(i).copied().unwrap_or(0.0);
            *slot = Complex::new(sample * self.window[i], 0.0);
        }

        self.fft.process(&mut self.buffer);

        let norm = 2.0 / n as f32;
        for (magnitude, c) in self.magnitudes.iter_mut().zip(&self.buffer) {
            *magnitude = c.norm() * norm;
        }
        &self.magnitudes
    }
}

/// Spawn FFT analysis thread
///
/// Reads `hop_size` samples at a time into a sliding `fft_size` window and
/// publishes one magnitude buffer per hop, paced at the source's real-time
/// rate. Stops when the source is exhausted or `stop` is raised.
pub fn spawn_fft_thread(
    config: FFTConfig,
    mut source: Box<dyn SampleSource + Send>,
    slot: FrameSlot,
    stop: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut spectrum = MagnitudeSpectrum::new(config.fft_size);
        let mut window = vec![0.0_f32; config.fft_size];
        let mut hop = vec![0.0_f32; config.hop_size.min(config.fft_size)];
        let pace = Duration::from_secs_f32(hop.len() as f32 / source.sample_rate().max(1) as f32);
        let mut published = 0_usize;

        while !stop.load(Ordering::Relaxed) {
            let read = source.read(&mut hop);
            if read == 0 {
                info!("Audio source exhausted after {} windows", published);
                break;
            }

            // Slide the window left and append the new samples
            window.rotate_left(read);
            let tail = window.len() - read;
            window[tail..].copy_from_slice(&hop[..read]);

            if slot.publish(spectrum.compute(&window).to_vec()) {
                debug!("Frame loop skipped a magnitude buffer");
            }
            published += 1;

            thread::sleep(pace);
        }
    })
}
