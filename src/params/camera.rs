//! Camera orbit path and follow configuration.

use crate::error::ConfigError;
use crate::math::Vec3;

/// Orbit waypoints: the perimeter of a 704 × 704 square around the origin,
/// clockwise seen from above, one waypoint every 88 units.
const REFERENCE_WAYPOINTS: [[f32; 3]; 32] = [
    [0.0, 256.0, 352.0],
    [88.0, 256.0, 352.0],
    [176.0, 256.0, 352.0],
    [264.0, 256.0, 352.0],
    [352.0, 256.0, 352.0],
    [352.0, 256.0, 264.0],
    [352.0, 256.0, 176.0],
    [352.0, 256.0, 88.0],
    [352.0, 256.0, 0.0],
    [352.0, 256.0, -88.0],
    [352.0, 256.0, -176.0],
    [352.0, 256.0, -264.0],
    [352.0, 256.0, -352.0],
    [264.0, 256.0, -352.0],
    [176.0, 256.0, -352.0],
    [88.0, 256.0, -352.0],
    [0.0, 256.0, -352.0],
    [-88.0, 256.0, -352.0],
    [-176.0, 256.0, -352.0],
    [-264.0, 256.0, -352.0],
    [-352.0, 256.0, -352.0],
    [-352.0, 256.0, -264.0],
    [-352.0, 256.0, -176.0],
    [-352.0, 256.0, -88.0],
    [-352.0, 256.0, 0.0],
    [-352.0, 256.0, 88.0],
    [-352.0, 256.0, 176.0],
    [-352.0, 256.0, 264.0],
    [-352.0, 256.0, 352.0],
    [-264.0, 256.0, 352.0],
    [-176.0, 256.0, 352.0],
    [-88.0, 256.0, 352.0],
];

/// Camera configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Cyclic orbit waypoints (world units); their y is ignored
    pub waypoints: Vec<Vec3>,

    /// Height every orbit waypoint is flown at (world units)
    pub orbit_height: f32,

    /// Follow mode offset: height above and distance behind the target
    pub follow_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            waypoints: REFERENCE_WAYPOINTS.iter().map(|&p| Vec3::from(p)).collect(),
            orbit_height: 256.0,
            follow_distance: 50.0,
        }
    }
}

impl CameraConfig {
    /// Validate configuration (non-empty path, finite offsets)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waypoints.is_empty() {
            return Err(ConfigError::EmptyOrbitPath);
        }
        if !self.orbit_height.is_finite() {
            return Err(ConfigError::NotPositive("orbit height"));
        }
        if !(self.follow_distance.is_finite() && self.follow_distance > 0.0) {
            return Err(ConfigError::NotPositive("follow distance"));
        }
        Ok(())
    }
}
