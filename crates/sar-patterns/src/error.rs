/// Errors raised while generating a search pattern.
///
/// The computation is deterministic, so none of these are retryable:
/// every error rejects the single pattern-generation request that
/// produced it and leaves no partial state behind.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("ring needs at least 4 points (3 distinct plus closing duplicate), got {0}")]
    TooFewPoints(usize),

    #[error("ring is not closed: first and last points differ")]
    UnclosedRing,

    #[error("ring repeats an interior point at index {0}")]
    RepeatedPoint(usize),

    #[error("sweep width must be a positive number of meters, got {0}")]
    InvalidWidth(f64),

    #[error("cannot determine ring orientation: clockwise and counter-clockwise turns tie")]
    OrientationTie,

    #[error("no visible diagonal from any reflex vertex; ring is not a simple polygon")]
    NoVisibleDiagonal,

    #[error("decomposition exceeded the recursion depth limit of {0}")]
    DecompositionDepth(usize),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
