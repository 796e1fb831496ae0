//! Visibility between ring vertices.
//!
//! A diagonal between two vertices is usable as a split line only when
//! it stays strictly inside the polygon. That is checked the blunt
//! way: intersect the candidate segment against every ring edge,
//! ignore hits at the diagonal's own endpoints, and finally require
//! the diagonal's midpoint to be inside the ring (which rules out
//! chords that leave through a reflex pocket without crossing any
//! edge).

use crate::geometry::{LinearRing, Point, points_coincide};

const DENOM_EPS: f64 = 1e-12;

/// Intersection of segments `a1→a2` and `b1→b2`, if any.
///
/// Returns the hit point and the parameter `ua` along the first
/// segment. Endpoint touches count as hits; parallel and collinear
/// pairs do not.
pub(crate) fn segment_intersection(
    a1: Point,
    a2: Point,
    b1: Point,
    b2: Point,
) -> Option<(Point, f64)> {
    let denom = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if denom.abs() < DENOM_EPS {
        return None;
    }

    let ua = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / denom;
    let ub = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / denom;

    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    let hit = Point::new(a1.x + ua * (a2.x - a1.x), a1.y + ua * (a2.y - a1.y));
    Some((hit, ua))
}

/// Even-odd ray cast: is `p` inside the ring?
///
/// Boundary points are not guaranteed either way; callers only probe
/// points expected to be strictly interior or exterior.
pub fn point_in_ring(p: Point, ring: &LinearRing) -> bool {
    let vs = ring.vertices();
    let n = vs.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (vs[i], vs[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Can vertex `i` see vertex `j` along an interior diagonal?
///
/// False for the same vertex and for ring-adjacent vertices (their
/// connecting segment is an edge, not a diagonal).
pub fn can_see(ring: &LinearRing, i: usize, j: usize) -> bool {
    let vs = ring.vertices();
    let n = vs.len();
    if i == j {
        return false;
    }
    if (i + 1) % n == j || (j + 1) % n == i {
        return false;
    }

    let p = vs[i];
    let q = vs[j];

    for k in 0..n {
        let e1 = vs[k];
        let e2 = vs[(k + 1) % n];
        if let Some((hit, _)) = segment_intersection(p, q, e1, e2) {
            // Edges incident to either endpoint legitimately touch the
            // diagonal there; any other contact blocks the view.
            if points_coincide(hit, p) || points_coincide(hit, q) {
                continue;
            }
            return false;
        }
    }

    // No edge crossing, but the chord may still run outside the
    // polygon past a reflex corner.
    let mid = Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0);
    point_in_ring(mid, ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn notched() -> LinearRing {
        LinearRing::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(4.0, 2.0),
            Point::new(4.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn crossing_segments_intersect_at_midpoint() {
        let (hit, ua) = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 1.0);
        assert_relative_eq!(ua, 0.5);
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn disjoint_segments_on_crossing_lines_do_not_intersect() {
        // The infinite lines cross, but only beyond the segment ends.
        assert!(
            segment_intersection(
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(3.0, -1.0),
                Point::new(3.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn endpoint_touch_counts_as_intersection() {
        let (hit, ua) = segment_intersection(
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(hit.x, 1.0);
        assert_relative_eq!(hit.y, 1.0);
        assert_relative_eq!(ua, 1.0);
    }

    #[test]
    fn point_in_ring_even_odd() {
        let ring = notched();
        assert!(point_in_ring(Point::new(0.5, 1.0), &ring));
        assert!(point_in_ring(Point::new(2.0, 1.5), &ring));
        // Inside the notch cut, outside the polygon.
        assert!(!point_in_ring(Point::new(2.0, 0.25), &ring));
        assert!(!point_in_ring(Point::new(5.0, 1.0), &ring));
    }

    #[test]
    fn adjacent_vertices_are_not_visible() {
        let ring = notched();
        assert!(!can_see(&ring, 0, 1), "ring edge is not a diagonal");
        assert!(!can_see(&ring, 6, 0), "wrap-around edge is not a diagonal");
        assert!(!can_see(&ring, 3, 3));
    }

    #[test]
    fn notch_apex_sees_across_the_interior() {
        let ring = notched();
        // Apex (2,1) looks straight up at the top edge corners.
        assert!(can_see(&ring, 5, 1), "apex to (0,2) crosses open interior");
        assert!(can_see(&ring, 5, 2), "apex to (4,2) crosses open interior");
        assert!(can_see(&ring, 5, 0), "apex to (0,0) crosses open interior");
    }

    #[test]
    fn chord_through_the_notch_is_blocked() {
        let ring = notched();
        // (1,0) to (3,0) runs along the outside of the notch; its
        // midpoint (2,0) is below the apex and outside the ring.
        assert!(!can_see(&ring, 6, 4), "chord across the notch mouth leaves the polygon");
    }
}
