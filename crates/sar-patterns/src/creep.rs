//! Creeping line generation: boustrophedon stripes over one convex
//! ring in metric coordinates.
//!
//! Horizontal stripes are laid from the bottom of the bounding box
//! upward at the sweep-width spacing, each one clipped to the ring by
//! intersecting a probe segment with the ring's edges. Consecutive
//! stripes run in opposite directions so the path snakes across the
//! area without dead transits.

use crate::error::{Error, Result};
use crate::geometry::{LinearRing, Path, Point, points_coincide};
use crate::visibility::segment_intersection;

/// Stripe altitudes covering `[min_y, max_y]`: every multiple of
/// `width` above `min_y`, plus `max_y` itself so the far boundary is
/// always swept.
fn stripe_ys(min_y: f64, max_y: f64, width: f64) -> Vec<f64> {
    let mut ys = Vec::new();
    let mut y = min_y;
    while y < max_y {
        ys.push(y);
        y += width;
    }
    ys.push(max_y);
    ys
}

/// Points where the horizontal line at `y` meets the ring boundary,
/// deduplicated (a stripe through a vertex touches both incident
/// edges) and sorted west to east.
fn stripe_hits(ring: &LinearRing, y: f64, min_x: f64, max_x: f64) -> Vec<Point> {
    // Probe extends past the bbox so edge endpoints on the boundary
    // are hit at a strictly interior parameter.
    let probe_a = Point::new(min_x - 1.0, y);
    let probe_b = Point::new(max_x + 1.0, y);

    let mut hits: Vec<Point> = Vec::new();
    for edge in ring.closed_points().windows(2) {
        if let Some((hit, _)) = segment_intersection(probe_a, probe_b, edge[0], edge[1]) {
            if !hits.iter().any(|h| points_coincide(*h, hit)) {
                hits.push(hit);
            }
        }
    }
    hits.sort_by(|a, b| a.x.total_cmp(&b.x));
    hits
}

/// Generate the creeping line path for one convex ring.
///
/// `width` is the sweep width in meters. The path starts at the
/// south-west end of the bottom stripe and alternates direction on
/// each subsequent stripe; the top of the bounding box always gets a
/// final stripe regardless of spacing remainder.
pub fn creep_line(ring: &LinearRing, width: f64) -> Result<Path> {
    if !width.is_finite() || width <= 0.0 {
        return Err(Error::InvalidWidth(width));
    }

    let (min_x, min_y, max_x, max_y) = ring.bounding_box();
    let mut path = Path::new();

    for (stripe, y) in stripe_ys(min_y, max_y, width).into_iter().enumerate() {
        let mut hits = stripe_hits(ring, y, min_x, max_x);
        if hits.is_empty() {
            continue;
        }
        // Odd stripes run east to west.
        if stripe % 2 == 1 {
            hits.reverse();
        }
        path.extend(hits);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> LinearRing {
        LinearRing::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn rejects_nonpositive_width() {
        assert_eq!(creep_line(&unit_square(), 0.0).unwrap_err(), Error::InvalidWidth(0.0));
        assert_eq!(creep_line(&unit_square(), -5.0).unwrap_err(), Error::InvalidWidth(-5.0));
        assert!(matches!(
            creep_line(&unit_square(), f64::NAN).unwrap_err(),
            Error::InvalidWidth(_)
        ));
    }

    #[test]
    fn stripe_ys_always_include_the_top() {
        assert_eq!(stripe_ys(0.0, 1.0, 0.4), vec![0.0, 0.4, 0.8, 1.0]);
        // Exact division still appends the boundary.
        assert_eq!(stripe_ys(0.0, 1.0, 0.5), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn square_with_width_equal_to_height_gives_two_stripes() {
        let path = creep_line(&unit_square(), 1.0).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            "bottom stripe runs east, top stripe returns west"
        );
    }

    #[test]
    fn stripes_alternate_direction() {
        let path = creep_line(&unit_square(), 0.5).unwrap();
        assert_eq!(path.len(), 6);
        assert_relative_eq!(path[0].x, 0.0);
        assert_relative_eq!(path[1].x, 1.0);
        assert_relative_eq!(path[2].x, 1.0);
        assert_relative_eq!(path[3].x, 0.0);
        assert_relative_eq!(path[4].x, 0.0);
        assert_relative_eq!(path[5].x, 1.0);
        let ys: Vec<f64> = path.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![0.0, 0.0, 0.5, 0.5, 1.0, 1.0]);
    }

    #[test]
    fn triangle_stripes_narrow_toward_the_apex() {
        let triangle = LinearRing::from_vertices(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(2.0, 2.0),
        ])
        .unwrap();
        let path = creep_line(&triangle, 1.0).unwrap();
        // Stripe at y=1 spans [1, 3]; apex stripe collapses to a point.
        assert_relative_eq!(path[0].x, 0.0);
        assert_relative_eq!(path[1].x, 4.0);
        assert_relative_eq!(path[2].x, 3.0);
        assert_relative_eq!(path[3].x, 1.0);
        assert_eq!(path.len(), 5);
        assert_relative_eq!(path[4].x, 2.0);
        assert_relative_eq!(path[4].y, 2.0);
    }
}
