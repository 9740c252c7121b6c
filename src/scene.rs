//! Scene-side types shared with the renderer: tracked transforms, model
//! matrices and the colour palette.

use std::collections::BTreeMap;

use crate::math::{rotate, rotate_y, scale, translate, Mat4, Vec2, Vec3, Vec4};

/// Position, size and Euler rotation (degrees, applied z, y, x) of a scene entity
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpatialTransform {
    pub position: Vec3,
    pub size: Vec3,
    pub rotation: Vec3,
}

/// Per-frame entity transforms keyed by entity id.
///
/// Ordered by id, so the "first" entry is always the smallest id.
pub type TrackedTransforms = BTreeMap<i32, SpatialTransform>;

/// Model matrix for a flat quad of `size` centred at `position`.
///
/// The translation is transposed into the last row before combining, to
/// match the row-times-column multiply used everywhere else.
pub fn model_matrix_2d(size: Vec2, position: Vec2) -> Mat4 {
    let s = scale(size.extend(0.0));
    let t = translate(position.extend(0.0)).transpose();
    s.mult(&t)
}

/// Model matrix with a yaw rotation about +Y in degrees
pub fn model_matrix_yaw(size: Vec3, position: Vec3, yaw_degrees: f32) -> Mat4 {
    let s = scale(size);
    let t = translate(position).transpose();
    let r = rotate_y(yaw_degrees);
    s.mult(&r).mult(&t)
}

/// Model matrix with a full Euler rotation in degrees
pub fn model_matrix(size: Vec3, position: Vec3, rotation: Vec3) -> Mat4 {
    let s = scale(size);
    let t = translate(position).transpose();
    let r = rotate(rotation);
    s.mult(&r).mult(&t)
}

impl SpatialTransform {
    pub fn model_matrix(&self) -> Mat4 {
        model_matrix(self.size, self.position, self.rotation)
    }
}

/// Named RGBA colours
pub mod colour {
    use crate::math::Vec4;

    pub const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Vec4 = Vec4::new(1.0, 1.0, 0.0, 1.0);
    pub const GREY: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);
    pub const DARK_GREY: Vec4 = Vec4::new(0.25, 0.25, 0.25, 1.0);
}

/// Unit quad corners, counter-clockwise from bottom-left, with UVs in `zw`
pub const QUAD_POINTS_AND_UVS: [Vec4; 4] = [
    Vec4::new(-0.5, -0.5, 0.0, 0.0),
    Vec4::new(0.5, -0.5, 1.0, 0.0),
    Vec4::new(0.5, 0.5, 1.0, 1.0),
    Vec4::new(-0.5, 0.5, 0.0, 1.0),
];
