//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use log::info;

use crate::params::{FFTConfig, VisualizerConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "orbitviz")]
#[command(about = "Headless audio-reactive spectrum and orbit camera driver", long_about = None)]
pub struct Args {
    /// Analyze a WAV file instead of the synthetic tone
    #[arg(long, value_name = "PATH")]
    pub wav: Option<PathBuf>,

    /// Number of frames to run
    #[arg(long, default_value = "600")]
    pub frames: u32,

    /// Frame rate of the driver loop
    #[arg(long, default_value = "60")]
    pub fps: f32,

    /// Frequency of the synthetic tone (Hz)
    #[arg(long, value_name = "HZ", default_value = "440")]
    pub tone_hz: f32,

    /// White-noise amplitude mixed into the synthetic tone (0..1)
    #[arg(long, default_value = "0.1")]
    pub noise: f32,

    /// Seed for the synthetic tone's noise and the tracked entity
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Start in follow mode
    #[arg(long)]
    pub follow: bool,

    /// Advance the orbit waypoint every N frames (0 = never)
    #[arg(long, value_name = "FRAMES", default_value = "30")]
    pub advance_every: u32,

    /// Toggle between orbit and follow every N frames
    #[arg(long, value_name = "FRAMES")]
    pub toggle_every: Option<u32>,

    /// Horizontal resolution (pixels)
    #[arg(long, default_value = "800")]
    pub width: u32,

    /// Vertical resolution (pixels)
    #[arg(long, default_value = "600")]
    pub height: u32,
}

impl Args {
    /// Build the visualizer configuration for a source running at `sample_rate_hz`
    ///
    /// The FFT window yields exactly one analyzer frame and hops one
    /// driver frame's worth of samples.
    pub fn build_config(&self, sample_rate_hz: u32) -> VisualizerConfig {
        let mut config = VisualizerConfig::default();
        config.render.window_width = self.width;
        config.render.window_height = self.height;

        let fft_size = config.spectrum.sample_count * 2;
        let hop_size = (sample_rate_hz as f32 / self.fps).round().max(1.0) as usize;
        config.fft = FFTConfig {
            sample_rate_hz: sample_rate_hz as usize,
            fft_size,
            hop_size: hop_size.min(fft_size),
        };

        info!(
            "Resolution {}x{}, FFT {} @ {} Hz, hop {}",
            self.width, self.height, fft_size, sample_rate_hz, config.fft.hop_size
        );
        config
    }

    /// Whether the orbit should step on `frame`
    pub fn advances_on(&self, frame: u32) -> bool {
        self.advance_every > 0 && frame > 0 && frame % self.advance_every == 0
    }

    /// Whether the camera mode should flip on `frame`
    pub fn toggles_on(&self, frame: u32) -> bool {
        matches!(self.toggle_every, Some(n) if n > 0 && frame > 0 && frame % n == 0)
    }
}
