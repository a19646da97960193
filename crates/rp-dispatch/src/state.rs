//! Per-train dispatch state.

use rp_core::{StationId, TrainId, Turn};
use rp_network::Route;

/// Where a train is in its journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainStatus {
    /// Still at the origin.
    Waiting,
    /// On the network at `route.stations[hop]`.
    Moving { hop: usize },
    /// Arrived at the destination on turn `at`.
    Finished { at: Turn },
}

/// One train and the route it was allocated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainState {
    pub id: TrainId,
    /// Index into the dispatcher's route list.
    pub route: usize,
    pub status: TrainStatus,
}

impl TrainState {
    pub fn new(id: TrainId, route: usize) -> Self {
        Self { id, route, status: TrainStatus::Waiting }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, TrainStatus::Finished { .. })
    }

    /// Station currently held by the train, `None` at the origin.
    pub fn station(&self, route: &Route) -> Option<StationId> {
        match self.status {
            TrainStatus::Waiting => None,
            TrainStatus::Moving { hop } => route.get(hop),
            TrainStatus::Finished { .. } => route.destination(),
        }
    }
}
