//! Per-frame spectrum analysis: compression, peak normalization, binning,
//! temporal smoothing and colour mapping.

use std::ops::Range;

use log::trace;

use super::bins::{bin_mean, bin_ranges};
use crate::error::{ConfigError, SpectrumError};
use crate::math::{Mat4, Vec2, Vec4};
use crate::params::SpectrumConfig;
use crate::scene::model_matrix_2d;

/// One rendered bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub index: usize,
    /// Smoothed amplitude, used directly as the bar width
    pub amplitude: f32,
    pub colour: Vec4,
}

/// Fixed bar placement derived from the screen resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    /// X coordinate every bar is anchored at (centre of the screen)
    pub origin_x: f32,
    /// Vertical resolution divided by the bin count
    pub bar_height: f32,
}

impl BarLayout {
    pub fn new(resolution: Vec2, bin_count: usize) -> Self {
        Self {
            origin_x: resolution.x * 0.5,
            bar_height: resolution.y / bin_count as f32,
        }
    }

    /// Vertical centre of bar `index`, stacking upwards from y = 0
    pub fn centre_y(&self, index: usize) -> f32 {
        self.bar_height * 0.5 + index as f32 * self.bar_height
    }
}

impl Bar {
    /// Model matrix for the unit quad representing this bar
    pub fn model_matrix(&self, layout: &BarLayout) -> Mat4 {
        model_matrix_2d(
            Vec2::new(self.amplitude, layout.bar_height),
            Vec2::new(layout.origin_x, layout.centre_y(self.index)),
        )
    }
}

/// Current bin values and the previous frame's copy used for smoothing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpectrumFrame {
    pub current: Vec<f32>,
    pub previous: Vec<f32>,
}

impl SpectrumFrame {
    fn new(bin_count: usize) -> Self {
        Self {
            current: vec![0.0; bin_count],
            previous: vec![0.0; bin_count],
        }
    }
}

/// Turns one magnitude buffer per frame into smoothed, colour-mapped bars
pub struct SpectrumAnalyzer {
    config: SpectrumConfig,
    ranges: Vec<Range<usize>>,
    compressed: Vec<f32>,
    frame: SpectrumFrame,
    bars: Vec<Bar>,
}

impl SpectrumAnalyzer {
    /// Create analyzer with validated configuration
    pub fn new(config: SpectrumConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ranges = bin_ranges(config.sample_count, config.bin_count).collect();
        let frame = SpectrumFrame::new(config.bin_count);
        let bars = (0..config.bin_count)
            .map(|index| Bar {
                index,
                amplitude: 0.0,
                colour: config.high_colour,
            })
            .collect();

        Ok(Self {
            compressed: vec![0.0; config.sample_count],
            config,
            ranges,
            frame,
            bars,
        })
    }

    pub fn config(&self) -> &SpectrumConfig {
        &self.config
    }

    pub fn frame(&self) -> &SpectrumFrame {
        &self.frame
    }

    /// Smoothed amplitudes of the latest frame
    pub fn amplitudes(&self) -> &[f32] {
        &self.frame.current
    }

    /// Bars of the latest frame
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn layout(&self, resolution: Vec2) -> BarLayout {
        BarLayout::new(resolution, self.config.bin_count)
    }

    /// Forget smoothing history (e.g. when the track changes)
    pub fn reset(&mut self) {
        self.frame = SpectrumFrame::new(self.config.bin_count);
        for bar in &mut self.bars {
            bar.amplitude = 0.0;
            bar.colour = self.config.high_colour;
        }
    }

    /// Process one frame of non-negative magnitudes
    ///
    /// # Arguments
    /// * `raw` - Exactly `sample_count` magnitudes
    ///
    /// # Returns
    /// The `bin_count` bars for this frame
    pub fn process(&mut self, raw: &[f32]) -> Result<&[Bar], SpectrumError> {
        if raw.len() != self.config.sample_count {
            return Err(SpectrumError::BufferLength {
                expected: self.config.sample_count,
                actual: raw.len(),
            });
        }

        // Compress dynamic range
        for (dst, &src) in self.compressed.iter_mut().zip(raw) {
            *dst = src.sqrt();
        }

        // Peak-normalize; silence stays at zero
        let peak = self.compressed.iter().copied().fold(0.0_f32, f32::max);
        if peak > 0.0 {
            for value in &mut self.compressed {
                *value = *value / peak * self.config.scale_factor;
            }
        }
        trace!("spectrum frame: compressed peak {:.4}", peak);

        self.frame.previous.copy_from_slice(&self.frame.current);

        let SpectrumConfig {
            loudness_ceiling,
            low_colour,
            high_colour,
            ..
        } = self.config;

        for (i, range) in self.ranges.iter().enumerate() {
            let fresh = bin_mean(&self.compressed, range.clone());
            let smoothed = (fresh + self.frame.previous[i]) * 0.5;
            self.frame.current[i] = smoothed;

            let relative_loudness = smoothed / loudness_ceiling;
            self.bars[i] = Bar {
                index: i,
                amplitude: smoothed,
                colour: low_colour.lerp(high_colour, relative_loudness),
            };
        }

        Ok(self.bars.as_slice())
    }
}
