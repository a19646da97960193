//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `rp-network`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("no path found from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("station {0} not found in network")]
    StationNotFound(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
