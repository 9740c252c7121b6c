//! Angle conversions and 2D point-containment tests.

use std::f32::consts::PI;

use super::vector::Vec2;

pub fn to_radians(degrees: f32) -> f32 {
    degrees / 180.0 * PI
}

pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Unit vector `(cos θ, sin θ)`
pub fn polar_to_cartesian(theta: f32) -> Vec2 {
    let (s, c) = theta.sin_cos();
    Vec2::new(c, s)
}

/// Angle of `v` from the +X axis, in `(-π, π]`
pub fn cartesian_to_polar(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Converts a physics-engine body angle (radians, 0 = +X) to the scene's
/// heading in degrees, where 0 points along +Y.
pub fn physics_to_view_angle(radians: f32) -> f32 {
    to_degrees(radians) + 90.0
}

/// Barycentric containment test. Points on an edge or vertex count as inside.
///
/// A degenerate (zero-area) triangle contains nothing.
pub fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let div = (b.y - c.y) * (a.x - c.x) + (c.x - b.x) * (a.y - c.y);

    let x = ((b.y - c.y) * (p.x - c.x) + (c.x - b.x) * (p.y - c.y)) / div;
    let y = ((c.y - a.y) * (p.x - c.x) + (a.x - c.x) * (p.y - c.y)) / div;
    let z = 1.0 - x - y;

    let unit = 0.0..=1.0;
    unit.contains(&x) && unit.contains(&y) && unit.contains(&z)
}

/// True when `v2` lies clockwise of (or on) the ray `v1`
fn is_clockwise(v1: Vec2, v2: Vec2) -> bool {
    -v1.x * v2.y + v1.y * v2.x >= 0.0
}

/// Containment in the circular sector centred on `origin`, swept
/// counter-clockwise from the `start` ray to the `end` ray.
///
/// The distance bound is inclusive. A point on the `end` ray is inside, a
/// point on the `start` ray is not.
pub fn point_in_circular_sector(p: Vec2, start: Vec2, origin: Vec2, end: Vec2, radius: f32) -> bool {
    let offset = p - origin;
    origin.distance(p) <= radius && !is_clockwise(start, offset) && is_clockwise(end, offset)
}

/// Inclusive bounds test; `top` is the larger y value.
pub fn point_in_axis_aligned_box(p: Vec2, left: f32, right: f32, top: f32, bottom: f32) -> bool {
    p.x >= left && p.x <= right && p.y >= bottom && p.y <= top
}

/// Product of the signed sides of `p` and `q` relative to line `ab`:
/// positive when they share a side, zero when either is on the line.
fn side(p: Vec2, q: Vec2, a: Vec2, b: Vec2) -> f32 {
    let z1 = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
    let z2 = (b.x - a.x) * (q.y - a.y) - (q.x - a.x) * (b.y - a.y);
    z1 * z2
}

/// Whether segment `p0 p1` crosses or touches the boundary of triangle
/// `t0 t1 t2`.
///
/// A segment lying strictly inside the triangle does not intersect it.
pub fn segment_intersects_triangle(p0: Vec2, p1: Vec2, t0: Vec2, t1: Vec2, t2: Vec2) -> bool {
    let f1 = side(p0, t2, t0, t1);
    let f2 = side(p1, t2, t0, t1);
    let f3 = side(p0, t0, t1, t2);
    let f4 = side(p1, t0, t1, t2);
    let f5 = side(p0, t1, t2, t0);
    let f6 = side(p1, t1, t2, t0);
    let f7 = side(t0, t1, p0, p1);
    let f8 = side(t1, t2, p0, p1);

    // Strictly outside a half-plane, or the triangle strictly on one side of the line
    if (f1 < 0.0 && f2 < 0.0)
        || (f3 < 0.0 && f4 < 0.0)
        || (f5 < 0.0 && f6 < 0.0)
        || (f7 > 0.0 && f8 > 0.0)
    {
        return false;
    }

    // Collinear with an edge
    if (f1 == 0.0 && f2 == 0.0) || (f3 == 0.0 && f4 == 0.0) || (f5 == 0.0 && f6 == 0.0) {
        return true;
    }

    // Touching
    if (f1 <= 0.0 && f2 <= 0.0)
        || (f3 <= 0.0 && f4 <= 0.0)
        || (f5 <= 0.0 && f6 <= 0.0)
        || (f7 >= 0.0 && f8 >= 0.0)
    {
        return true;
    }

    // Both endpoints strictly inside
    if f1 > 0.0 && f2 > 0.0 && f3 > 0.0 && f4 > 0.0 && f5 > 0.0 && f6 > 0.0 {
        return false;
    }

    true
}
