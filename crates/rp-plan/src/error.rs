use rp_core::{ConfigError, ValidationError};
use rp_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no path found from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("number of trains must be positive")]
    NoTrains,

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Network(NetworkError),
}

impl From<NetworkError> for PlanError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::NoPath { from, to } => PlanError::NoPath { from, to },
            other => PlanError::Network(other),
        }
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
