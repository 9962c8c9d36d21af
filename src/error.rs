//! Error types for network construction and optimizer configuration.

use thiserror::Error;

/// Rejected input data when building a [`Network`](crate::network::Network)
/// or a [`TravelMatrix`](crate::network::TravelMatrix).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("travel matrix must be square: {rows} rows, row {row} has {len} columns")]
    MatrixNotSquare { rows: usize, row: usize, len: usize },
    #[error("travel matrix data has {len} entries, expected {size}x{size}")]
    MatrixDataLength { size: usize, len: usize },
    #[error("travel time from {from} to {to} must be finite and non-negative, got {seconds}")]
    InvalidTravelTime { from: usize, to: usize, seconds: f64 },
    #[error("location {id} is outside the travel matrix of size {size}")]
    LocationOutOfRange { id: usize, size: usize },
    #[error("location {0} appears more than once")]
    DuplicateLocation(usize),
    #[error("depot {0} must not be listed among the locations")]
    DepotListed(usize),
    #[error("network has no locations to visit")]
    EmptyLocationSet,
}

/// Why a brigade timeline could not be simulated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("location {0} has no open hour")]
    NeverOpen(usize),
    #[error("route references unknown location {0}")]
    UnknownLocation(usize),
}

/// Invalid optimizer setup, reported when the pipeline is assembled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("carrier count {carriers} must be in 1..={locations}")]
    InvalidCarrierCount { carriers: usize, locations: usize },
    #[error("initial generator `{generator}` picked location {id}, which is not available")]
    UnavailableLocation { generator: String, id: usize },
    #[error("initial generator `{generator}` stopped with {remaining} locations left")]
    GeneratorStalled { generator: String, remaining: usize },
    #[error("generator list must not be empty")]
    EmptyGeneratorList,
    #[error("initial temperature must be positive and finite, got {0}")]
    InvalidInitialTemperature(f64),
    #[error("limit temperature must be positive and below the initial temperature, got {0}")]
    InvalidLimitTemperature(f64),
    #[error("cooling factor must be in (0, 1), got {0}")]
    InvalidCoolingFactor(f64),
    #[error("stagnation window of 1 would stop after the first delta")]
    InvalidStagnationWindow,
    #[error("sample count must be at least 1")]
    InvalidSampleCount,
    #[error(transparent)]
    Network(#[from] NetworkError),
}
