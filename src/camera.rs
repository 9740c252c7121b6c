//! Orbit/follow camera state machine producing view and projection matrices.

use log::{debug, info, warn};

use crate::error::ConfigError;
use crate::math::{
    orthographic_matrix, perspective_matrix, polar_to_cartesian, to_radians, view_matrix, Mat4,
    Vec3,
};
use crate::params::{CameraConfig, RenderConfig};
use crate::scene::TrackedTransforms;

/// Active camera behaviour
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMode {
    /// Fly the waypoint path, always looking at the origin
    Orbit,
    /// Sit above and behind the first tracked entity
    Follow { distance: f32 },
}

/// Closed loop of waypoints flown at a fixed height
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    waypoints: Vec<Vec3>,
    index: usize,
    height: f32,
}

impl OrbitPath {
    pub fn new(waypoints: Vec<Vec3>, height: f32) -> Result<Self, ConfigError> {
        if waypoints.is_empty() {
            return Err(ConfigError::EmptyOrbitPath);
        }
        Ok(Self {
            waypoints,
            index: 0,
            height,
        })
    }

    /// Current waypoint with its y replaced by the orbit height
    pub fn current(&self) -> Vec3 {
        let p = self.waypoints[self.index];
        Vec3::new(p.x, self.height, p.z)
    }

    /// Step to the next waypoint, wrapping after the last
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.waypoints.len();
    }

    /// Jump to `index` (taken modulo the path length)
    pub fn set_index(&mut self, index: usize) {
        self.index = index % self.waypoints.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Everything the rig reads from the scene each frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub tracked: &'a TrackedTransforms,
}

/// Matrices handed to the renderer, valid until the next update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    pub view: Mat4,
    pub ortho: Mat4,
    pub perspective: Mat4,
    pub eye: Vec3,
}

/// Camera system with an orbit path and a follow mode
pub struct CameraRig {
    mode: CameraMode,
    orbit: OrbitPath,
    follow_distance: f32,

    eye: Vec3,
    target: Vec3,
    up: Vec3,
    view: Mat4,

    render: RenderConfig,
    ortho: Mat4,
    perspective: Mat4,
}

impl CameraRig {
    /// Create rig in orbit mode at waypoint 0 with both projections precomputed
    pub fn new(camera: &CameraConfig, render: &RenderConfig) -> Result<Self, ConfigError> {
        camera.validate()?;
        render.validate()?;

        let orbit = OrbitPath::new(camera.waypoints.clone(), camera.orbit_height)?;
        let eye = orbit.current();
        let target = Vec3::ZERO;
        let up = Vec3::Y;
        let (ortho, perspective) = Self::projections(render);

        Ok(Self {
            mode: CameraMode::Orbit,
            orbit,
            follow_distance: camera.follow_distance,
            eye,
            target,
            up,
            view: view_matrix(eye, target, up),
            render: render.clone(),
            ortho,
            perspective,
        })
    }

    fn projections(render: &RenderConfig) -> (Mat4, Mat4) {
        let (ortho_near, ortho_far) = render.ortho_depth;
        let ortho = orthographic_matrix(render.resolution(), ortho_near, ortho_far);
        let perspective = perspective_matrix(
            render.fov_degrees,
            render.aspect_ratio(),
            render.near_plane,
            render.far_plane,
        );
        (ortho, perspective)
    }

    /// Recompute eye, target and up for the active mode and rebuild the view
    pub fn update(&mut self, inputs: &FrameInputs) {
        match self.mode {
            CameraMode::Orbit => {
                self.eye = self.orbit.current();
                self.target = Vec3::ZERO;
                self.up = Vec3::Y;
            }
            CameraMode::Follow { distance } => match inputs.tracked.values().next() {
                Some(tracked) => {
                    let heading = polar_to_cartesian(to_radians(tracked.rotation.y)) * distance;
                    self.eye = tracked.position + Vec3::new(0.0, distance, 0.0)
                        - Vec3::new(heading.x, 0.0, heading.y);
                    self.target = self.eye + Vec3::new(heading.x, -distance, heading.y);
                    self.up = Vec3::Y;
                }
                None => warn!("Follow camera has no tracked entity, holding previous view"),
            },
        }

        self.view = view_matrix(self.eye, self.target, self.up);
    }

    /// Switch between orbit and follow
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            CameraMode::Orbit => CameraMode::Follow {
                distance: self.follow_distance,
            },
            CameraMode::Follow { .. } => CameraMode::Orbit,
        };
        info!("Camera mode: {:?}", self.mode);
    }

    /// Move to the next orbit waypoint (takes effect on the next update)
    pub fn advance_orbit(&mut self) {
        self.orbit.advance();
        debug!("Orbit waypoint {}", self.orbit.index());
    }

    pub fn set_orbit_index(&mut self, index: usize) {
        self.orbit.set_index(index);
    }

    pub fn orbit_index(&self) -> usize {
        self.orbit.index()
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    pub fn ortho(&self) -> &Mat4 {
        &self.ortho
    }

    pub fn perspective(&self) -> &Mat4 {
        &self.perspective
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    pub fn matrices(&self) -> CameraMatrices {
        CameraMatrices {
            view: self.view,
            ortho: self.ortho,
            perspective: self.perspective,
            eye: self.eye,
        }
    }

    /// Replace the projection configuration
    ///
    /// # Returns
    /// Whether the projections were recomputed (false if nothing changed)
    pub fn set_projection(&mut self, render: &RenderConfig) -> Result<bool, ConfigError> {
        if *render == self.render {
            return Ok(false);
        }
        render.validate()?;

        let (ortho, perspective) = Self::projections(render);
        self.ortho = ortho;
        self.perspective = perspective;
        self.render = render.clone();
        debug!(
            "Projections rebuilt for {}x{}",
            render.window_width, render.window_height
        );
        Ok(true)
    }

    /// Change the resolution, keeping FOV and clip planes
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool, ConfigError> {
        let render = RenderConfig {
            window_width: width,
            window_height: height,
            ..self.render.clone()
        };
        self.set_projection(&render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SpatialTransform;

    const EPS: f32 = 1e-4;

    fn rig() -> CameraRig {
        CameraRig::new(&CameraConfig::default(), &RenderConfig::default()).unwrap()
    }

    fn tracked(position: Vec3, yaw_degrees: f32) -> TrackedTransforms {
        let mut map = TrackedTransforms::new();
        map.insert(
            7,
            SpatialTransform {
                position,
                size: Vec3::splat(1.0),
                rotation: Vec3::new(0.0, yaw_degrees, 0.0),
            },
        );
        map
    }

    #[test]
    fn test_initial_state_is_orbit_at_first_waypoint() {
        let rig = rig();
        assert_eq!(rig.mode(), CameraMode::Orbit);
        assert_eq!(rig.orbit_index(), 0);
        assert_eq!(rig.eye(), Vec3::new(0.0, 256.0, 352.0));
        assert_eq!(rig.target(), Vec3::ZERO);
        assert_eq!(*rig.view(), view_matrix(rig.eye(), Vec3::ZERO, Vec3::Y));
    }

    #[test]
    fn test_orbit_forces_height_and_targets_origin() {
        let camera = CameraConfig {
            waypoints: vec![Vec3::new(10.0, -3.0, 20.0), Vec3::new(-5.0, 99.0, 1.0)],
            orbit_height: 40.0,
            ..CameraConfig::default()
        };
        let mut rig = CameraRig::new(&camera, &RenderConfig::default()).unwrap();
        let empty = TrackedTransforms::new();

        rig.advance_orbit();
        rig.update(&FrameInputs { tracked: &empty });
        assert_eq!(rig.eye(), Vec3::new(-5.0, 40.0, 1.0));
        assert_eq!(rig.target(), Vec3::ZERO);
        assert_eq!(rig.up(), Vec3::Y);
    }

    #[test]
    fn test_orbit_index_wraps_after_last_waypoint() {
        let mut rig = rig();
        rig.set_orbit_index(31);
        rig.advance_orbit();
        assert_eq!(rig.orbit_index(), 0);

        rig.set_orbit_index(33);
        assert_eq!(rig.orbit_index(), 1);
    }

    #[test]
    fn test_orbit_index_only_moves_on_advance() {
        let mut rig = rig();
        let empty = TrackedTransforms::new();
        for _ in 0..5 {
            rig.update(&FrameInputs { tracked: &empty });
        }
        assert_eq!(rig.orbit_index(), 0);
    }

    #[test]
    fn test_follow_sits_above_and_behind_entity() {
        let mut rig = rig();
        rig.toggle_mode();
        assert_eq!(rig.mode(), CameraMode::Follow { distance: 50.0 });

        let map = tracked(Vec3::new(10.0, 0.0, 20.0), 0.0);
        rig.update(&FrameInputs { tracked: &map });

        // Heading along +X at yaw 0
        assert!(rig.eye().almost_equal(Vec3::new(-40.0, 50.0, 20.0), EPS), "eye = {}", rig.eye());
        assert!(rig.target().almost_equal(Vec3::new(10.0, 0.0, 20.0), EPS), "target = {}", rig.target());
        assert_eq!(rig.up(), Vec3::Y);
    }

    #[test]
    fn test_follow_heading_rotates_with_yaw() {
        let mut rig = rig();
        rig.toggle_mode();

        let map = tracked(Vec3::ZERO, 90.0);
        rig.update(&FrameInputs { tracked: &map });

        // Yaw 90 puts the heading along +Z (the y of the 2D heading)
        assert!(rig.eye().almost_equal(Vec3::new(0.0, 50.0, -50.0), EPS), "eye = {}", rig.eye());
        assert!(rig.target().almost_equal(Vec3::ZERO, EPS), "target = {}", rig.target());
    }

    #[test]
    fn test_follow_uses_smallest_entity_id() {
        let mut rig = rig();
        rig.toggle_mode();

        let mut map = tracked(Vec3::new(100.0, 0.0, 0.0), 0.0);
        map.insert(
            2,
            SpatialTransform {
                position: Vec3::new(-100.0, 0.0, 0.0),
                ..SpatialTransform::default()
            },
        );
        rig.update(&FrameInputs { tracked: &map });
        assert!(rig.target().almost_equal(Vec3::new(-100.0, 0.0, 0.0), EPS));
    }

    #[test]
    fn test_follow_with_no_entities_holds_previous_pose() {
        let mut rig = rig();
        let before = rig.matrices();

        rig.toggle_mode();
        rig.update(&FrameInputs {
            tracked: &TrackedTransforms::new(),
        });

        assert_eq!(rig.eye(), before.eye);
        assert_eq!(rig.target(), Vec3::ZERO);
        assert_eq!(*rig.view(), before.view);
        assert!(rig.view().is_finite());
    }

    #[test]
    fn test_toggle_round_trip_returns_to_orbit() {
        let mut rig = rig();
        let map = tracked(Vec3::new(5.0, 0.0, 5.0), 45.0);

        rig.toggle_mode();
        rig.update(&FrameInputs { tracked: &map });
        rig.toggle_mode();
        rig.update(&FrameInputs { tracked: &map });

        assert_eq!(rig.mode(), CameraMode::Orbit);
        assert_eq!(rig.eye(), Vec3::new(0.0, 256.0, 352.0));
    }

    #[test]
    fn test_projection_cached_until_config_changes() {
        let mut rig = rig();
        let perspective = *rig.perspective();

        assert_eq!(rig.set_projection(&RenderConfig::default()), Ok(false));
        assert_eq!(*rig.perspective(), perspective);

        assert_eq!(rig.resize(1024, 512), Ok(true));
        assert_ne!(*rig.perspective(), perspective);
        assert_eq!(rig.render_config().window_width, 1024);
        assert_eq!(rig.ortho().x.x, 2.0 / 1024.0);
    }

    #[test]
    fn test_invalid_projection_is_rejected_and_previous_kept() {
        let mut rig = rig();
        let ortho = *rig.ortho();

        assert_eq!(
            rig.resize(0, 600),
            Err(ConfigError::InvalidResolution {
                width: 0,
                height: 600
            })
        );
        assert_eq!(*rig.ortho(), ortho);
        assert_eq!(rig.render_config().window_width, 800);
    }

    #[test]
    fn test_empty_waypoints_rejected() {
        let camera = CameraConfig {
            waypoints: Vec::new(),
            ..CameraConfig::default()
        };
        assert_eq!(
            CameraRig::new(&camera, &RenderConfig::default()).err(),
            Some(ConfigError::EmptyOrbitPath)
        );
    }
}
