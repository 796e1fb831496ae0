//! Degree/meter projection for small search areas.
//!
//! Search areas are a few kilometers across at most, so a flat local
//! approximation is enough: measure how many meters one degree of
//! longitude and one degree of latitude span at the ring's first
//! vertex, then scale every coordinate by that fixed pair. Using the
//! same pair for the forward and inverse transform makes the round
//! trip exact up to float noise.

use crate::error::{Error, Result};
use crate::geometry::{LinearRing, Path, Point};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters spanned by one degree of longitude/latitude at a reference
/// point. Both factors stay fixed for one projection round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalScale {
    pub meters_per_deg_lon: f64,
    pub meters_per_deg_lat: f64,
}

/// Great-circle distance in meters between two (lon, lat) points.
pub fn haversine_m(a: Point, b: Point) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let dlat = (b.y - a.y).to_radians();
    let dlon = (b.x - a.x).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Measure the local degree-to-meter scale at `origin`.
///
/// Fails when the longitude scale collapses, which only happens within
/// a fraction of a degree of the poles where the flat approximation is
/// meaningless anyway.
pub fn local_scale(origin: Point) -> Result<LocalScale> {
    let east = haversine_m(origin, Point::new(origin.x + 1.0, origin.y));
    let north = haversine_m(origin, Point::new(origin.x, origin.y + 1.0));
    if east < 1.0 || north < 1.0 {
        return Err(Error::DegenerateGeometry(
            "meters-per-degree scale collapsed near the pole",
        ));
    }
    Ok(LocalScale {
        meters_per_deg_lon: east,
        meters_per_deg_lat: north,
    })
}

/// Project a geographic ring into local meters.
///
/// The scale is anchored at the ring's first vertex and returned so
/// the caller can run [`to_degrees`] with the identical factors.
pub fn to_meters(ring: &LinearRing) -> Result<(LinearRing, LocalScale)> {
    let scale = local_scale(ring.vertices()[0])?;
    let projected = ring.map(|p| {
        Point::new(p.x * scale.meters_per_deg_lon, p.y * scale.meters_per_deg_lat)
    });
    Ok((projected, scale))
}

/// Convert a metric path back to degrees with the scale produced by
/// [`to_meters`].
pub fn to_degrees(path: &[Point], scale: &LocalScale) -> Path {
    path.iter()
        .map(|p| Point::new(p.x / scale.meters_per_deg_lon, p.y / scale.meters_per_deg_lat))
        .collect()
}
