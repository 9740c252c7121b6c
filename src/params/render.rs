//! Rendering and projection configuration.

use crate::error::ConfigError;
use crate::math::Vec2;

/// Rendering configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view for the perspective projection (degrees)
    pub fov_degrees: f32,

    /// Orthographic depth range (near, far)
    pub ortho_depth: (f32, f32),

    /// Perspective near clipping plane (world units)
    pub near_plane: f32,

    /// Perspective far clipping plane (world units)
    /// Covers the whole orbit square seen from any waypoint
    pub far_plane: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fov_degrees: 90.0,
            ortho_depth: (-1.0, 1.0),
            near_plane: 0.1,
            far_plane: 2500.0,
        }
    }
}

impl RenderConfig {
    pub fn resolution(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }

    /// Validate configuration (non-zero resolution, distinct clip planes, etc.)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::InvalidResolution {
                width: self.window_width,
                height: self.window_height,
            });
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(self.fov_degrees));
        }
        let (near, far) = self.ortho_depth;
        if near == far {
            return Err(ConfigError::DegenerateDepthRange {
                projection: "orthographic",
                near,
                far,
            });
        }
        if self.near_plane == self.far_plane {
            return Err(ConfigError::DegenerateDepthRange {
                projection: "perspective",
                near: self.near_plane,
                far: self.far_plane,
            });
        }
        Ok(())
    }
}
