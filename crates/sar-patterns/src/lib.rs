//! Search pattern geometry for search-and-rescue missions.
//!
//! Takes a geographic search area (a closed ring of longitude/latitude
//! pairs) and a sweep width in meters, and produces a creeping line
//! path that covers the whole area. The pipeline:
//!
//! 1. project the ring into local meters ([`project`]),
//! 2. split concave areas into convex parts ([`decompose`]),
//! 3. lay a boustrophedon stripe path over each part ([`creep`]),
//! 4. concatenate and convert back to degrees ([`search`]).
//!
//! The one-call entry point is [`creeping_line_path`]:
//!
//! ```
//! use sar_patterns::{LinearRing, Point, creeping_line_path};
//!
//! let area = LinearRing::from_vertices(vec![
//!     Point::new(172.80, -43.44),
//!     Point::new(172.82, -43.44),
//!     Point::new(172.82, -43.42),
//!     Point::new(172.80, -43.42),
//! ])?;
//! let path = creeping_line_path(&area, 500.0)?;
//! assert!(!path.is_empty());
//! # Ok::<(), sar_patterns::Error>(())
//! ```

pub mod classify;
pub mod creep;
pub mod decompose;
mod error;
pub mod geometry;
pub mod project;
pub mod search;
pub mod vector;
pub mod visibility;

pub use error::{Error, Result};
pub use geometry::{LinearRing, Path, Point};

pub use decompose::{DecomposeConfig, decompose, decompose_with};
pub use search::{creeping_line_path, creeping_line_path_with};
