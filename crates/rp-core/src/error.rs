//! Error types shared across crates.
//!
//! Sub-crates define their own error enums and wrap these via `#[from]`.
//! `ValidationError` lives here because both the map loader (structural
//! checks) and the planner (endpoint checks) raise it.

use thiserror::Error;

use crate::GridPoint;

/// A structurally invalid network or request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate station name: {0}")]
    DuplicateStation(String),

    #[error("two stations exist at the same coordinates {pos}: {first} and {second}")]
    DuplicateCoordinates {
        pos:    GridPoint,
        first:  String,
        second: String,
    },

    #[error("duplicate connection between {0} and {1}")]
    DuplicateConnection(String, String),

    #[error("station {0} is connected to itself")]
    SelfConnection(String),

    #[error("connection references unknown station: {0}")]
    UnknownStation(String),

    #[error("start and end station are the same: {0}")]
    SameEndpoints(String),

    #[error("{role} station does not exist: {name}")]
    MissingEndpoint {
        role: &'static str,
        name: String,
    },
}

/// Invalid command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("invalid number of trains: {0}")]
    InvalidTrainCount(String),

    #[error("wrong number of arguments: {0}")]
    WrongCount(String),

    #[error("invalid extra argument: {0}")]
    Unrecognized(String),
}

/// Invalid planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("configuration error: {0} must be greater than zero")]
    Zero(&'static str),
}
