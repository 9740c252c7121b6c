//! Vector and matrix algebra for all spatial computation.
//!
//! Pure functions only: no shared state, no side effects.

mod geometry;
mod matrix;
mod projection;
mod random;
mod vector;

// Re-export all types
pub use geometry::{
    cartesian_to_polar, physics_to_view_angle, point_in_axis_aligned_box,
    point_in_circular_sector, point_in_triangle, polar_to_cartesian, segment_intersects_triangle,
    to_degrees, to_radians,
};
pub use matrix::{
    mult, mult_vec4, rotate, rotate_x, rotate_y, rotate_z, scale, translate, transpose, Mat4,
};
pub use projection::{orthographic_matrix, perspective_matrix, view_matrix, ViewBasis};
pub use random::{random_range, random_vec2};
pub use vector::{almost_equal, Vec2, Vec3, Vec4};
