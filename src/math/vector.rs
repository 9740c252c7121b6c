//! Fixed-size `f32` vectors with named and indexed component access.
//!
//! Components are plain named fields. Integer indexing is a bounds-checked
//! accessor that delegates to those fields, so both views always observe the
//! same values.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use bytemuck::{Pod, Zeroable};

/// Two-component vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// Three-component vector
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Four-component vector (also used for RGBA colours and matrix rows)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Shared element-wise behaviour for every vector width.
macro_rules! impl_vector {
    ($ty:ident, $dim:literal, [$($idx:literal => $field:ident),+]) => {
        impl $ty {
            /// All components zero
            pub const ZERO: Self = Self { $($field: 0.0),+ };

            /// Vector with every component set to `v`
            pub const fn splat(v: f32) -> Self {
                Self { $($field: v),+ }
            }

            /// Component at `index`, or `None` past the last component
            pub fn get(&self, index: usize) -> Option<f32> {
                match index {
                    $($idx => Some(self.$field),)+
                    _ => None,
                }
            }

            pub fn to_array(self) -> [f32; $dim] {
                [$(self.$field),+]
            }

            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Euclidean norm
            pub fn magnitude(self) -> f32 {
                self.dot(self).sqrt()
            }

            /// Unit vector in the same direction.
            ///
            /// The exact zero vector is returned unchanged, so this never
            /// produces NaN.
            pub fn normalise(self) -> Self {
                if self == Self::ZERO {
                    self
                } else {
                    self / self.magnitude()
                }
            }

            pub fn distance(self, other: Self) -> f32 {
                (self - other).magnitude()
            }

            /// Interpolates as `(1 - t) * other + t * self`.
            ///
            /// The operand order is reversed from the usual convention:
            /// `t = 0` yields `other` and `t = 1` yields `self`. The colour
            /// ramp of the spectrum bars depends on this order.
            pub fn lerp(self, other: Self, t: f32) -> Self {
                other * (1.0 - t) + self * t
            }

            /// Component-wise `|a - b| < tolerance` (strict)
            pub fn almost_equal(self, other: Self, tolerance: f32) -> bool {
                true $(&& almost_equal(self.$field, other.$field, tolerance))+
            }

            pub fn is_finite(self) -> bool {
                true $(&& self.$field.is_finite())+
            }
        }

        impl Index<usize> for $ty {
            type Output = f32;

            fn index(&self, index: usize) -> &f32 {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but the index is {}",
                        stringify!($ty),
                        $dim,
                        index
                    ),
                }
            }
        }

        impl IndexMut<usize> for $ty {
            fn index_mut(&mut self, index: usize) -> &mut f32 {
                match index {
                    $($idx => &mut self.$field,)+
                    _ => panic!(
                        "index out of bounds: {} has {} components but the index is {}",
                        stringify!($ty),
                        $dim,
                        index
                    ),
                }
            }
        }

        impl Add for $ty {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Mul<f32> for $ty {
            type Output = Self;
            fn mul(self, rhs: f32) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl Mul<$ty> for f32 {
            type Output = $ty;
            fn mul(self, rhs: $ty) -> $ty {
                rhs * self
            }
        }

        impl Div<f32> for $ty {
            type Output = Self;
            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl Neg for $ty {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl AddAssign for $ty {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }

        impl SubAssign for $ty {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }

        impl MulAssign<f32> for $ty {
            fn mul_assign(&mut self, rhs: f32) {
                $(self.$field *= rhs;)+
            }
        }

        impl DivAssign<f32> for $ty {
            fn div_assign(&mut self, rhs: f32) {
                $(self.$field /= rhs;)+
            }
        }

        impl From<[f32; $dim]> for $ty {
            fn from(values: [f32; $dim]) -> Self {
                Self { $($field: values[$idx]),+ }
            }
        }

        impl From<$ty> for [f32; $dim] {
            fn from(v: $ty) -> Self {
                v.to_array()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "(")?;
                for (i, value) in self.to_array().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                write!(f, ")")
            }
        }
    };
}

impl_vector!(Vec2, 2, [0 => x, 1 => y]);
impl_vector!(Vec3, 3, [0 => x, 1 => y, 2 => z]);
impl_vector!(Vec4, 4, [0 => x, 1 => y, 2 => z, 3 => w]);

/// Scalar `|x - y| < tolerance` (strict, so equality at the tolerance fails)
pub fn almost_equal(x: f32, y: f32, tolerance: f32) -> bool {
    (x - y).abs() < tolerance
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Always the zero vector.
    ///
    /// A 2D cross product has no vector result; use [`Vec2::determinant`] for
    /// the signed area instead.
    pub fn cross(self, _other: Self) -> Self {
        Self::ZERO
    }

    /// Signed area of the parallelogram spanned by `self` and `other`
    pub fn determinant(self, other: Self) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Div for Vec2 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Vec3 {
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Ground-plane projection
    pub fn xz(self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec2> for glam::Vec2 {
    fn from(v: Vec2) -> Self {
        glam::Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec4> for glam::Vec4 {
    fn from(v: Vec4) -> Self {
        glam::Vec4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<glam::Vec4> for Vec4 {
    fn from(v: glam::Vec4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}
