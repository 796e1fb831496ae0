//! Vertex classification: which corners of a ring are convex and which
//! are reflex.
//!
//! Winding direction is not assumed. Each vertex gets a signed turn
//! value (2D cross product of its incident edge vectors), and the
//! majority sign is taken as the ring's winding; vertices turning the
//! minority way are the reflex ones. This works identically for
//! clockwise and counter-clockwise input.

use crate::error::{Error, Result};
use crate::geometry::LinearRing;
use crate::vector::{corner_vectors, signed_turn};

/// Convexity label for a single ring vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexKind {
    Convex,
    Reflex,
}

/// Per-vertex turn values and labels for one ring.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Signed turn at each vertex, aligned with `ring.vertices()`.
    pub turns: Vec<f64>,
    /// Label for each vertex, same alignment.
    pub kinds: Vec<VertexKind>,
}

impl Classification {
    /// Indices of reflex vertices, in ring order.
    pub fn reflex_indices(&self) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == VertexKind::Reflex)
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of convex vertices, in ring order.
    pub fn convex_indices(&self) -> Vec<usize> {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == VertexKind::Convex)
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no vertex is reflex.
    pub fn is_convex(&self) -> bool {
        self.kinds.iter().all(|k| *k == VertexKind::Convex)
    }
}

/// Classify every vertex of `ring` as convex or reflex.
///
/// The turn at vertex `i` is the cross product of the edge arriving at
/// `i` with the edge leaving it, so `turns[i]` describes the corner at
/// `vertices()[i]` itself.
///
/// Vertices with a zero turn (collinear corners) are convex and do not
/// vote for the winding direction. An exact tie between nonzero
/// positive and negative turns means the winding is ambiguous and the
/// ring is rejected.
pub fn classify(ring: &LinearRing) -> Result<Classification> {
    let vs = ring.vertices();
    let n = vs.len();

    let mut turns = Vec::with_capacity(n);
    for i in 0..n {
        let prev = vs[(i + n - 1) % n];
        let next = vs[(i + 1) % n];
        let (inbound, outbound) = corner_vectors(prev, vs[i], next);
        turns.push(signed_turn(inbound, outbound));
    }

    let positive = turns.iter().filter(|t| **t > 0.0).count();
    let negative = turns.iter().filter(|t| **t < 0.0).count();

    if positive == 0 && negative == 0 {
        return Err(Error::DegenerateGeometry("all ring vertices are collinear"));
    }
    if positive == negative {
        return Err(Error::OrientationTie);
    }

    // Minority sign marks the reflex corners.
    let reflex_positive = positive < negative;
    let kinds = turns
        .iter()
        .map(|t| {
            let reflex = if reflex_positive { *t > 0.0 } else { *t < 0.0 };
            if reflex { VertexKind::Reflex } else { VertexKind::Convex }
        })
        .collect();

    Ok(Classification { turns, kinds })
}
