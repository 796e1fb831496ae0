//! Small 2D vector helpers used by the classifier and visibility tests.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// A 2D direction/displacement, distinct from [`Point`] positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Displacement vector from `a` to `b`.
#[inline]
pub fn relative(a: Point, b: Point) -> Vec2 {
    Vec2::new(b.x - a.x, b.y - a.y)
}

/// The two edge vectors meeting at corner `b`: incoming `a→b` and
/// outgoing `b→c`.
#[inline]
pub fn corner_vectors(a: Point, b: Point, c: Point) -> (Vec2, Vec2) {
    (relative(a, b), relative(b, c))
}

/// Signed magnitude of the 2D cross product `u × v`.
///
/// Positive when `v` points to the left of `u` (counter-clockwise
/// turn), negative to the right, zero when collinear.
#[inline]
pub fn signed_turn(u: Vec2, v: Vec2) -> f64 {
    u.x * v.y - u.y * v.x
}

/// Unsigned angle between two vectors in radians, in `[0, π]`.
///
/// Fails on a zero-length operand, which has no direction.
pub fn angle_between(u: Vec2, v: Vec2) -> Result<f64> {
    let denom = u.magnitude() * v.magnitude();
    if denom == 0.0 {
        return Err(Error::DegenerateGeometry(
            "angle of a zero-length vector is undefined",
        ));
    }
    // Float noise can push the ratio a hair past ±1 for (anti)parallel
    // vectors, which would make acos return NaN.
    let cos = (u.dot(v) / denom).clamp(-1.0, 1.0);
    Ok(cos.acos())
}
