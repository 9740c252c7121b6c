//! Error types for configuration validation and per-frame input checks.

use thiserror::Error;

/// Rejected configuration values, reported before any frame is processed
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sample count must be > 0")]
    ZeroSamples,

    #[error("bin count must be > 0")]
    ZeroBins,

    #[error("resolution must be positive, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("{projection} depth range is degenerate: near {near} == far {far}")]
    DegenerateDepthRange {
        projection: &'static str,
        near: f32,
        far: f32,
    },

    #[error("field of view must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),

    #[error("{0} must be finite and positive")]
    NotPositive(&'static str),

    #[error("orbit path needs at least one waypoint")]
    EmptyOrbitPath,

    #[error("FFT size must be power of 2, got {0}")]
    FftSizeNotPowerOfTwo(usize),

    #[error("sample rate must be > 0")]
    ZeroSampleRate,
}

/// Per-frame spectrum input problems
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("magnitude buffer has {actual} samples, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}
