//! Top-level pattern generation: geographic ring in, geographic
//! creeping line path out.

use crate::creep::creep_line;
use crate::decompose::{DecomposeConfig, decompose_with};
use crate::error::{Error, Result};
use crate::geometry::{LinearRing, Path};
use crate::project::{to_degrees, to_meters};

/// Generate a creeping line search path over a geographic ring.
///
/// `ring` holds (longitude, latitude) degree pairs; `width` is the
/// sweep width in meters. See [`creeping_line_path_with`] for the
/// pipeline details.
pub fn creeping_line_path(ring: &LinearRing, width: f64) -> Result<Path> {
    creeping_line_path_with(ring, width, &DecomposeConfig::default())
}

/// Generate a creeping line search path with explicit decomposition
/// settings.
///
/// Pipeline: project the ring into local meters, split it into convex
/// parts, lay a creeping line over each part, concatenate the parts'
/// paths in decomposition order, and convert the result back to
/// degrees with the same projection scale.
pub fn creeping_line_path_with(
    ring: &LinearRing,
    width: f64,
    config: &DecomposeConfig,
) -> Result<Path> {
    // Reject the width before any projection work so the caller gets
    // the parameter error rather than a geometry one.
    if !width.is_finite() || width <= 0.0 {
        return Err(Error::InvalidWidth(width));
    }

    let (metric_ring, scale) = to_meters(ring)?;
    let parts = decompose_with(&metric_ring, config)?;

    let mut metric_path = Path::new();
    for part in &parts {
        metric_path.extend(creep_line(part, width)?);
    }

    Ok(to_degrees(&metric_path, &scale))
}
