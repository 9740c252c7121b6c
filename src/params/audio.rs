//! Audio analysis configuration for the host's FFT thread.

use crate::error::ConfigError;

/// FFT analysis configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FFTConfig {
    /// Audio sample rate (Hz)
    pub sample_rate_hz: usize,

    /// FFT window size (must be power of 2)
    /// 2048 points give the analyzer its 1024 magnitudes
    pub fft_size: usize,

    /// Hop between successive windows (samples)
    /// 735 = one 60 fps frame @ 44.1kHz
    pub hop_size: usize,
}

impl Default for FFTConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 44100,
            fft_size: 2048,
            hop_size: 735,
        }
    }
}

impl FFTConfig {
    /// Number of non-redundant magnitudes per window
    pub fn magnitude_count(&self) -> usize {
        self.fft_size / 2
    }

    /// Convert frequency (Hz) to FFT bin index
    pub fn hz_to_bin(&self, hz: f32) -> usize {
        ((hz * self.fft_size as f32) / self.sample_rate_hz as f32) as usize
    }

    /// Validate configuration (FFT size must be power of 2, etc.)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.fft_size.is_power_of_two() {
            return Err(ConfigError::FftSizeNotPowerOfTwo(self.fft_size));
        }
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.hop_size == 0 {
            return Err(ConfigError::NotPositive("hop size"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fft_config() {
        let config = FFTConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.magnitude_count(), 1024);
        assert_eq!(config.hz_to_bin(441.0), 20);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let config = FFTConfig {
            fft_size: 1000,
            ..FFTConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FftSizeNotPowerOfTwo(1000)));
    }
}
