//! Spectrum analysis: turns per-frame frequency magnitudes into stable,
//! colour-mapped bar amplitudes.

mod analyzer;
mod bins;

// Re-export public types
pub use analyzer::{Bar, BarLayout, SpectrumAnalyzer, SpectrumFrame};
pub use bins::{bin_mean, bin_ranges};
