//! View and projection matrix construction.
//!
//! All three builders produce matrices whose rows are read as columns by the
//! shader, so they line up with OpenGL-style right-handed clip space.

use super::geometry::to_radians;
use super::matrix::Mat4;
use super::vector::{Vec2, Vec3, Vec4};

/// Orthographic projection mapping `[0, resolution]` to `[-1, 1]` on X/Y and
/// the depth range to `[-1, 1]`.
///
/// `near` and `far` must differ.
pub fn orthographic_matrix(resolution: Vec2, near: f32, far: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.x.x = 2.0 / resolution.x;
    m.y.y = 2.0 / resolution.y;
    m.z.z = -2.0 / (far - near);

    m.w.x = -resolution.x / resolution.x;
    m.w.y = -resolution.y / resolution.y;
    m.w.z = -(far + near) / (far - near);
    m
}

/// Symmetric-frustum perspective projection
///
/// # Arguments
/// * `fov_degrees` - Vertical field of view
/// * `aspect` - Width over height
/// * `near`, `far` - Clip distances, mapped to -1 and 1 after the divide
pub fn perspective_matrix(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let b = 1.0 / (to_radians(fov_degrees) / 2.0).tan();
    let a = b / aspect;

    Mat4::from_rows(
        Vec4::new(a, 0.0, 0.0, 0.0),
        Vec4::new(0.0, b, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
        Vec4::new(0.0, 0.0, (2.0 * far * near) / (near - far), 0.0),
    )
}

/// Orthonormal camera basis derived from an eye, a target and an up hint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub right: Vec3,
    pub up: Vec3,
    /// Points from the target back towards the eye
    pub forward: Vec3,
}

impl ViewBasis {
    /// When `eye == target` the forward axis is zero and the whole basis
    /// collapses to zero vectors; every component stays finite.
    pub fn new(eye: Vec3, target: Vec3, up_hint: Vec3) -> Self {
        let forward = (eye - target).normalise();
        let right = up_hint.cross(forward).normalise();
        let up = forward.cross(right);
        Self { right, up, forward }
    }
}

/// World-to-camera transform for an eye looking at `target`
pub fn view_matrix(eye: Vec3, target: Vec3, up_hint: Vec3) -> Mat4 {
    let ViewBasis { right, up, forward } = ViewBasis::new(eye, target, up_hint);

    Mat4::from_rows(
        Vec4::new(right.x, up.x, forward.x, 0.0),
        Vec4::new(right.y, up.y, forward.y, 0.0),
        Vec4::new(right.z, up.z, forward.z, 0.0),
        Vec4::new(-right.dot(eye), -up.dot(eye), -forward.dot(eye), 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::almost_equal;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_view_basis_looking_down_negative_z() {
        let basis = ViewBasis::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);

        assert!(basis.right.almost_equal(Vec3::X, EPS), "right = {}", basis.right);
        assert!(basis.up.almost_equal(Vec3::Y, EPS), "up = {}", basis.up);
        assert!(basis.forward.almost_equal(Vec3::Z, EPS), "forward = {}", basis.forward);

        for axis in [basis.right, basis.up, basis.forward] {
            assert!(almost_equal(axis.magnitude(), 1.0, EPS));
        }
        assert!(almost_equal(basis.right.dot(basis.up), 0.0, EPS));
        assert!(almost_equal(basis.right.dot(basis.forward), 0.0, EPS));
        assert!(almost_equal(basis.up.dot(basis.forward), 0.0, EPS));
    }

    #[test]
    fn test_view_basis_orthonormal_for_oblique_eye() {
        let basis = ViewBasis::new(Vec3::new(352.0, 256.0, -88.0), Vec3::ZERO, Vec3::Y);
        assert!(almost_equal(basis.right.magnitude(), 1.0, EPS));
        assert!(almost_equal(basis.up.magnitude(), 1.0, EPS));
        assert!(almost_equal(basis.right.dot(basis.up), 0.0, EPS));
        assert!(almost_equal(basis.up.dot(basis.forward), 0.0, EPS));
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = view_matrix(eye, Vec3::ZERO, Vec3::Y);
        assert_eq!(view.w, Vec4::new(0.0, 0.0, -5.0, 1.0));
    }

    #[test]
    fn test_view_matrix_matches_glam_look_at() {
        let cases = [
            (Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO),
            (Vec3::new(352.0, 256.0, 264.0), Vec3::ZERO),
            (Vec3::new(-10.0, 60.0, 3.0), Vec3::new(15.0, 10.0, 40.0)),
        ];
        for (eye, target) in cases {
            let ours: glam::Mat4 = view_matrix(eye, target, Vec3::Y).into();
            let reference = glam::Mat4::look_at_rh(eye.into(), target.into(), glam::Vec3::Y);
            assert!(
                ours.abs_diff_eq(reference, 1e-3),
                "view mismatch for eye {} target {}",
                eye,
                target
            );
        }
    }

    #[test]
    fn test_view_matrix_degenerate_eye_equals_target_is_finite() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let view = view_matrix(p, p, Vec3::Y);
        assert!(view.is_finite());
        assert_eq!(view.x.xyz(), Vec3::ZERO);
        assert_eq!(view.w, Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_perspective_matches_glam() {
        let ours: glam::Mat4 = perspective_matrix(90.0, 800.0 / 600.0, 0.1, 2500.0).into();
        let reference =
            glam::Mat4::perspective_rh_gl(90f32.to_radians(), 800.0 / 600.0, 0.1, 2500.0);
        assert!(ours.abs_diff_eq(reference, 1e-4));
    }

    #[test]
    fn test_perspective_maps_depth_range_to_clip_bounds() {
        let (near, far) = (0.1, 2500.0);
        let proj: glam::Mat4 = perspective_matrix(90.0, 1.0, near, far).into();

        let at_near = proj * glam::Vec4::new(0.0, 0.0, -near, 1.0);
        let at_far = proj * glam::Vec4::new(0.0, 0.0, -far, 1.0);
        assert!(almost_equal(at_near.z / at_near.w, -1.0, 1e-3));
        assert!(almost_equal(at_far.z / at_far.w, 1.0, 1e-3));
    }

    #[test]
    fn test_orthographic_matches_glam() {
        let res = Vec2::new(800.0, 600.0);
        let ours: glam::Mat4 = orthographic_matrix(res, -1.0, 1.0).into();
        let reference = glam::Mat4::orthographic_rh_gl(0.0, 800.0, 0.0, 600.0, -1.0, 1.0);
        assert!(ours.abs_diff_eq(reference, EPS));
    }

    #[test]
    fn test_orthographic_translation_is_always_minus_one() {
        for res in [Vec2::new(800.0, 600.0), Vec2::new(3.0, 7.0)] {
            let m = orthographic_matrix(res, 0.5, 10.0);
            assert_eq!(m.w.x, -1.0);
            assert_eq!(m.w.y, -1.0);
            assert!(almost_equal(m.w.z, -10.5 / 9.5, EPS));
            assert!(almost_equal(m.z.z, -2.0 / 9.5, EPS));
        }
    }
}
