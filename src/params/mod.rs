//! Parameter definitions with units and documented semantics.
//!
//! Defaults reproduce the reference 800 × 600 configuration. Everything is
//! supplied at construction and never reloaded mid-run.

mod audio;
mod camera;
mod render;
mod spectrum;

// Re-export all types
pub use audio::FFTConfig;
pub use camera::CameraConfig;
pub use render::RenderConfig;
pub use spectrum::SpectrumConfig;

use crate::error::ConfigError;

/// Complete visualizer configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisualizerConfig {
    pub render: RenderConfig,
    pub spectrum: SpectrumConfig,
    pub camera: CameraConfig,
    pub fft: FFTConfig,
}

impl VisualizerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()?;
        self.spectrum.validate()?;
        self.camera.validate()?;
        self.fft.validate()?;
        Ok(())
    }
}
