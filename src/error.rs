use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level error type for the harness routing core.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Usage(#[from] UsageError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("value {0} cannot be represented as a decimal")]
    NotRepresentable(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors related to the wire/section topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    /// A move would leave a section at a non-cardinal bearing.
    #[error("invalid topology: section angle {angle} is not a multiple of 90 degrees")]
    InvalidTopology { angle: Decimal },

    #[error("disconnected wire: {0}")]
    Disconnected(String),
}

/// Errors raised by part catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The gauge has no stroke width; the catalog entry is corrupt or unsupported.
    #[error("AWG {0} is outside the supported range 0..=30")]
    AwgOutOfRange(i32),

    #[error("invalid part: {0}")]
    InvalidPart(String),

    #[error("unknown part series {0}")]
    UnknownSeries(u32),
}

/// Programmer-misuse conditions surfaced immediately to the caller.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("another wire is already being extended")]
    RouteInProgress,

    #[error("wire has no sections")]
    EmptyWire,
}

/// Convenience type alias for results using [`HarnessError`].
pub type Result<T> = std::result::Result<T, HarnessError>;
