use rp_core::{TrainId, Turn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no routes to dispatch trains on")]
    EmptyRoutes,

    #[error("number of trains must be positive")]
    NoTrains,

    #[error("route {route} is inconsistent with the network: {reason}")]
    InconsistentRoute { route: usize, reason: String },

    #[error("{train} ran past the end of route {route}")]
    RouteOverrun { train: TrainId, route: usize },

    #[error("dispatch stalled on {turn} with {unfinished} trains still running")]
    Stalled { turn: Turn, unfinished: usize },

    #[error("dispatch did not finish within max_turns = {limit}")]
    TurnLimit { limit: u32 },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
