//! 4×4 matrices stored as row vectors, plus the transform builders.
//!
//! Multiplication convention: `mult(a, b)` takes the dot product of a row of
//! `a` with a column of `b`. Applying a matrix to a vector adds the last
//! column as a translation after the 3×3 product, which is why composites
//! that include a translation transpose it first (see [`crate::scene`]).

use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};

use super::geometry::to_radians;
use super::vector::{Vec3, Vec4};

/// Row-major 4×4 matrix. `Default` is the identity.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub x: Vec4,
    pub y: Vec4,
    pub z: Vec4,
    pub w: Vec4,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self::from_rows(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    );

    pub const ZERO: Self = Self::from_rows(Vec4::ZERO, Vec4::ZERO, Vec4::ZERO, Vec4::ZERO);

    pub const fn from_rows(x: Vec4, y: Vec4, z: Vec4, w: Vec4) -> Self {
        Self { x, y, z, w }
    }

    pub fn from_rows_array(rows: [[f32; 4]; 4]) -> Self {
        Self::from_rows(
            Vec4::from(rows[0]),
            Vec4::from(rows[1]),
            Vec4::from(rows[2]),
            Vec4::from(rows[3]),
        )
    }

    pub fn to_rows_array(&self) -> [[f32; 4]; 4] {
        [
            self.x.to_array(),
            self.y.to_array(),
            self.z.to_array(),
            self.w.to_array(),
        ]
    }

    pub fn row(&self, index: usize) -> Option<Vec4> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            2 => Some(self.z),
            3 => Some(self.w),
            _ => None,
        }
    }

    /// Column `index` (panics past the last column, like indexing)
    pub fn column(&self, index: usize) -> Vec4 {
        Vec4::new(self.x[index], self.y[index], self.z[index], self.w[index])
    }

    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2), self.column(3))
    }

    /// Row-by-column product `self · other`
    pub fn mult(&self, other: &Self) -> Self {
        let mut out = Self::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                out[r][c] = (0..4).map(|k| self[r][k] * other[k][c]).sum();
            }
        }
        out
    }

    /// Applies the matrix as `row.xyz · v.xyz + row.w` for each output component.
    ///
    /// `v.w` is ignored: the last column always acts as a translation term.
    pub fn transform(&self, v: Vec4) -> Vec4 {
        let apply = |row: Vec4| row.x * v.x + row.y * v.y + row.z * v.z + row.w;
        Vec4::new(apply(self.x), apply(self.y), apply(self.z), apply(self.w))
    }

    pub fn almost_equal(&self, other: &Self, tolerance: f32) -> bool {
        (0..4).all(|r| self[r].almost_equal(other[r], tolerance))
    }

    pub fn is_finite(&self) -> bool {
        (0..4).all(|r| self[r].is_finite())
    }

    /// Raw bytes for uploading as a shader uniform.
    ///
    /// The rows land in memory first-to-last, so a column-major consumer
    /// sees each row as a column.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    fn index(&self, index: usize) -> &Vec4 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds: Mat4 has 4 rows but the index is {}", index),
        }
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, index: usize) -> &mut Vec4 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds: Mat4 has 4 rows but the index is {}", index),
        }
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.mult(&rhs)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

/// Reads the rows as columns, matching how the matrix is uploaded to a shader
impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array_2d(&m.to_rows_array())
    }
}

pub fn mult(a: &Mat4, b: &Mat4) -> Mat4 {
    a.mult(b)
}

pub fn mult_vec4(m: &Mat4, v: Vec4) -> Vec4 {
    m.transform(v)
}

pub fn transpose(m: &Mat4) -> Mat4 {
    m.transpose()
}

/// Rotation about the X axis by `degrees`
pub fn rotate_x(degrees: f32) -> Mat4 {
    let (s, c) = to_radians(degrees).sin_cos();
    Mat4::from_rows(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(0.0, c, -s, 0.0),
        Vec4::new(0.0, s, c, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Rotation about the Y axis by `degrees`
pub fn rotate_y(degrees: f32) -> Mat4 {
    let (s, c) = to_radians(degrees).sin_cos();
    Mat4::from_rows(
        Vec4::new(c, 0.0, s, 0.0),
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(-s, 0.0, c, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Rotation about the Z axis by `degrees`
pub fn rotate_z(degrees: f32) -> Mat4 {
    let (s, c) = to_radians(degrees).sin_cos();
    Mat4::from_rows(
        Vec4::new(c, -s, 0.0, 0.0),
        Vec4::new(s, c, 0.0, 0.0),
        Vec4::new(0.0, 0.0, 1.0, 0.0),
        Vec4::new(0.0, 0.0, 0.0, 1.0),
    )
}

/// Euler rotation in degrees, composed as `rotate_z · rotate_y · rotate_x`
pub fn rotate(euler_degrees: Vec3) -> Mat4 {
    let x = rotate_x(euler_degrees.x);
    let y = rotate_y(euler_degrees.y);
    let z = rotate_z(euler_degrees.z);
    z.mult(&y).mult(&x)
}

pub fn scale(size: Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.x.x = size.x;
    m.y.y = size.y;
    m.z.z = size.z;
    m
}

/// Translation in the last column
pub fn translate(position: Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.x.w = position.x;
    m.y.w = position.y;
    m.z.w = position.z;
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        let m = rotate(Vec3::new(10.0, 20.0, 30.0));
        assert_eq!(m.mult(&Mat4::IDENTITY), m);
        assert_eq!(Mat4::IDENTITY.mult(&m), m);
    }

    #[test]
    fn test_transpose_round_trip() {
        let m = Mat4::from_rows_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let t = transpose(&m);
        assert_eq!(t.x, Vec4::new(1.0, 5.0, 9.0, 13.0));
        assert_eq!(t.w, Vec4::new(4.0, 8.0, 12.0, 16.0));
        assert_eq!(transpose(&t), m);
    }

    #[test]
    fn test_mult_row_by_column() {
        let a = Mat4::from_rows_array([
            [1.0, 2.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let b = Mat4::from_rows_array([
            [1.0, 0.0, 0.0, 0.0],
            [3.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let ab = mult(&a, &b);
        assert_eq!(ab.x, Vec4::new(7.0, 2.0, 0.0, 0.0));
        assert_eq!(ab.y, Vec4::new(3.0, 1.0, 0.0, 0.0));
        assert_eq!(a * b, ab);
    }

    #[test]
    fn test_translate_applies_as_post_multiply_term() {
        let t = translate(Vec3::new(1.0, 2.0, 3.0));
        let p = mult_vec4(&t, Vec4::new(10.0, 20.0, 30.0, 1.0));
        assert_eq!(p.xyz(), Vec3::new(11.0, 22.0, 33.0));

        // w of the input is ignored
        let q = t * Vec4::new(10.0, 20.0, 30.0, 0.0);
        assert_eq!(q.xyz(), p.xyz());
    }

    #[test]
    fn test_scale_is_diagonal() {
        let s = scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s.x, Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(s.w, Vec4::new(0.0, 0.0, 0.0, 1.0));
        let v = s * Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.xyz(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_axis_rotations_quarter_turn() {
        let v = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let r = rotate_z(90.0) * v;
        assert!(r.xyz().almost_equal(Vec3::Y, EPS), "got {}", r);

        let r = rotate_y(90.0) * Vec4::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.xyz().almost_equal(Vec3::X, EPS), "got {}", r);

        let r = rotate_x(90.0) * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(r.xyz().almost_equal(Vec3::Z, EPS), "got {}", r);
    }

    #[test]
    fn test_axis_rotations_match_glam_when_transposed() {
        // Rows hold the mathematical matrix, so glam sees the transpose
        for degrees in [-135.0_f32, -30.0, 0.0, 45.0, 200.0] {
            let radians = degrees.to_radians();
            let cases = [
                (rotate_x(degrees), glam::Mat4::from_rotation_x(radians)),
                (rotate_y(degrees), glam::Mat4::from_rotation_y(radians)),
                (rotate_z(degrees), glam::Mat4::from_rotation_z(radians)),
            ];
            for (ours, reference) in cases {
                let ours: glam::Mat4 = ours.into();
                assert!(
                    ours.abs_diff_eq(reference.transpose(), EPS),
                    "rotation mismatch at {} degrees",
                    degrees
                );
            }
        }
    }

    #[test]
    fn test_rotate_composes_z_y_x() {
        let euler = Vec3::new(30.0, 45.0, 60.0);
        let expected = rotate_z(60.0).mult(&rotate_y(45.0)).mult(&rotate_x(30.0));
        assert!(rotate(euler).almost_equal(&expected, EPS));

        // X is applied to the vector first
        let v = Vec4::new(0.0, 1.0, 0.0, 1.0);
        let step = rotate_x(30.0) * v;
        let step = rotate_y(45.0) * step;
        let step = rotate_z(60.0) * step;
        assert!((rotate(euler) * v).almost_equal(step, EPS));
    }

    #[test]
    fn test_bytes_follow_row_order() {
        let m = translate(Vec3::new(7.0, 8.0, 9.0));
        let floats: &[f32] = bytemuck::cast_slice(m.as_bytes());
        assert_eq!(floats.len(), 16);
        assert_eq!(&floats[0..4], &[1.0, 0.0, 0.0, 7.0]);
        assert_eq!(&floats[12..16], &[0.0, 0.0, 0.0, 1.0]);
    }
}
