//! Audio capture side: sample sources, FFT analysis thread and the
//! single-slot handoff to the frame loop.

mod fft;
mod slot;
mod source;

pub use fft::{hann_window, spawn_fft_thread, MagnitudeSpectrum};
pub use slot::FrameSlot;
pub use source::{SampleSource, ToneSource, WavSource};
