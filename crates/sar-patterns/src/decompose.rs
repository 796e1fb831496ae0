//! Convex decomposition of a simple ring.
//!
//! Strategy: find a reflex vertex, draw a diagonal from some convex
//! vertex that can see it, split the ring in two along that diagonal,
//! and recurse into both halves. Every candidate diagonal is tried and
//! the split yielding the fewest total rings wins, so the result is
//! minimal for this family of vertex-to-vertex splits.
//!
//! A ring with no reflex vertices is already convex and comes back as
//! itself, unsplit.

use crate::classify::classify;
use crate::error::{Error, Result};
use crate::geometry::LinearRing;
use crate::visibility::can_see;

/// Tuning knobs for [`decompose_with`].
#[derive(Debug, Clone)]
pub struct DecomposeConfig {
    /// Recursion ceiling. Each split consumes one level; well-formed
    /// rings of practical size never approach the default.
    pub max_depth: usize,
}

impl Default for DecomposeConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

/// Split `ring` into convex parts using the default configuration.
pub fn decompose(ring: &LinearRing) -> Result<Vec<LinearRing>> {
    decompose_with(ring, &DecomposeConfig::default())
}

/// Split `ring` into convex parts.
///
/// Parts are returned in discovery order and jointly cover the input:
/// the sum of their areas equals the ring's area.
pub fn decompose_with(ring: &LinearRing, config: &DecomposeConfig) -> Result<Vec<LinearRing>> {
    decompose_inner(ring, config, config.max_depth)
}

fn decompose_inner(
    ring: &LinearRing,
    config: &DecomposeConfig,
    depth: usize,
) -> Result<Vec<LinearRing>> {
    let classification = classify(ring)?;
    let reflex = classification.reflex_indices();
    if reflex.is_empty() {
        return Ok(vec![ring.clone()]);
    }
    if depth == 0 {
        return Err(Error::DecompositionDepth(config.max_depth));
    }

    let convex = classification.convex_indices();
    let mut best: Option<Vec<LinearRing>> = None;
    let mut deferred: Option<Error> = None;

    for &r in &reflex {
        for &c in &convex {
            if !can_see(ring, c, r) {
                continue;
            }
            let (left, right) = split_at_diagonal(ring, c, r);
            // A diagonal whose halves fail downstream is simply not a
            // candidate; remember the error in case nothing works.
            let combined = decompose_inner(&left, config, depth - 1).and_then(|mut parts| {
                parts.extend(decompose_inner(&right, config, depth - 1)?);
                Ok(parts)
            });
            match combined {
                Ok(parts) => {
                    if best.as_ref().is_none_or(|b| parts.len() < b.len()) {
                        best = Some(parts);
                    }
                }
                Err(e) => {
                    if deferred.is_none() {
                        deferred = Some(e);
                    }
                }
            }
        }
    }

    best.ok_or(deferred.unwrap_or(Error::NoVisibleDiagonal))
}

/// Cut the ring along the diagonal `i→j`, producing the two sub-rings
/// on either side. Both keep the original vertex order and both
/// contain the diagonal's endpoints.
fn split_at_diagonal(ring: &LinearRing, i: usize, j: usize) -> (LinearRing, LinearRing) {
    (subring(ring, i, j), subring(ring, j, i))
}

fn subring(ring: &LinearRing, from: usize, to: usize) -> LinearRing {
    let vs = ring.vertices();
    let n = vs.len();
    let mut points = Vec::new();
    let mut k = from;
    loop {
        points.push(vs[k]);
        if k == to {
            break;
        }
        k = (k + 1) % n;
    }
    LinearRing::from_vertices_unchecked(points)
}
