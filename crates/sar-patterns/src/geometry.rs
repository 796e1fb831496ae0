//! Core geometry value types: points, linear rings, paths.
//!
//! A [`Point`] carries no unit of its own. In geographic mode `x` is
//! longitude and `y` is latitude, both in degrees; in metric mode both
//! axes are meters from an arbitrary local origin. The projector in
//! [`crate::project`] moves rings between the two modes.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Tolerance below which two coordinates count as the same point.
pub(crate) const POINT_EPS: f64 = 1e-9;

#[inline]
pub(crate) fn points_coincide(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < POINT_EPS && (a.y - b.y).abs() < POINT_EPS
}

/// A polyline, the output form of every generated search path.
///
/// Transient by design: the caller wraps it into whatever persistence
/// or response format (e.g. GeoJSON LineString) it needs.
pub type Path = Vec<Point>;

/// Closed boundary of a simple polygon.
///
/// Stores the closing duplicate: `points[0] == points[last]`. Winding
/// direction is not canonical; [`crate::classify`] detects it per ring
/// by majority vote over the vertex turn signs.
///
/// Simplicity (no self-intersections) is the caller's contract and is
/// not validated here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRing {
    points: Vec<Point>,
}

impl LinearRing {
    /// Validate and build a ring from an already-closed point list.
    ///
    /// Requires at least 4 points (3 distinct plus the closing
    /// duplicate), first and last coinciding, and no repeated interior
    /// points.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 4 {
            return Err(Error::TooFewPoints(points.len()));
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if !points_coincide(first, last) {
            return Err(Error::UnclosedRing);
        }
        // Interior duplicates collapse an edge to zero length and break
        // the per-vertex turn computation downstream.
        let distinct = &points[..points.len() - 1];
        for i in 0..distinct.len() {
            for j in (i + 1)..distinct.len() {
                if points_coincide(distinct[i], distinct[j]) {
                    return Err(Error::RepeatedPoint(j));
                }
            }
        }
        Ok(Self { points })
    }

    /// Build a ring from distinct vertices, appending the closing duplicate.
    pub fn from_vertices(mut vertices: Vec<Point>) -> Result<Self> {
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
        Self::new(vertices)
    }

    /// Build a ring from distinct vertices that are known to be valid
    /// (e.g. a subset of an already-validated ring).
    pub(crate) fn from_vertices_unchecked(mut vertices: Vec<Point>) -> Self {
        let first = vertices[0];
        vertices.push(first);
        Self { points: vertices }
    }

    /// Distinct vertices, closing duplicate stripped.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.points[..self.points.len() - 1]
    }

    /// All points including the closing duplicate.
    #[inline]
    pub fn closed_points(&self) -> &[Point] {
        &self.points
    }

    /// Number of distinct vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Axis-aligned bounding box as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> (f64, f64, f64, f64) {
        let vs = self.vertices();
        let min_x = vs.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = vs.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = vs.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = vs.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        (min_x, min_y, max_x, max_y)
    }

    /// Signed area via the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise;
    /// the absolute value is the enclosed area.
    pub fn signed_area(&self) -> f64 {
        let vs = self.vertices();
        let n = vs.len();
        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += vs[i].x * vs[j].y;
            area -= vs[j].x * vs[i].y;
        }
        area / 2.0
    }

    /// Enclosed area regardless of winding.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Apply a coordinate transform to every point, preserving the
    /// closing duplicate.
    pub(crate) fn map(&self, f: impl Fn(Point) -> Point) -> LinearRing {
        LinearRing {
            points: self.points.iter().copied().map(&f).collect(),
        }
    }
}
