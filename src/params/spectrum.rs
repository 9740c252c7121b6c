//! Spectrum binning and colour-ramp configuration.

use crate::error::ConfigError;
use crate::math::Vec4;
use crate::scene::colour;

/// Spectrum analyzer configuration (fixed for the life of the analyzer)
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumConfig {
    /// Magnitudes delivered per frame
    /// A 2048-point FFT yields 1024 usable magnitudes
    pub sample_count: usize,

    /// Bars drawn per frame
    pub bin_count: usize,

    /// Value of the loudest sample after peak normalization
    /// 5 × the 800 px reference width, so a full bar overshoots the screen
    pub scale_factor: f32,

    /// Amplitude at which a bar reaches `low_colour` fully (not clamped)
    pub loudness_ceiling: f32,

    /// Colour of a bar at the loudness ceiling
    pub low_colour: Vec4,

    /// Colour of a silent bar
    pub high_colour: Vec4,
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            sample_count: 1024,
            bin_count: 512,
            scale_factor: 5.0 * 800.0,
            loudness_ceiling: 400.0,
            low_colour: colour::RED,
            high_colour: colour::GREEN,
        }
    }
}

impl SpectrumConfig {
    /// Samples per bin (may be fractional)
    pub fn sample_range(&self) -> f32 {
        self.sample_count as f32 / self.bin_count as f32
    }

    /// Validate configuration (non-empty buffer and bins, positive scaling)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.bin_count == 0 {
            return Err(ConfigError::ZeroBins);
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(ConfigError::NotPositive("scale factor"));
        }
        if !(self.loudness_ceiling.is_finite() && self.loudness_ceiling > 0.0) {
            return Err(ConfigError::NotPositive("loudness ceiling"));
        }
        Ok(())
    }
}
