//! Dispatch observer trait for progress reporting.

use log::{debug, trace};

use rp_core::{TrainId, Turn};
use rp_network::RailNetwork;

use crate::TurnRecord;

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run].
///
/// All methods have default no-op implementations.
pub trait DispatchObserver {
    /// Called at the start of each turn, before any train moves.
    fn on_turn_start(&mut self, _turn: Turn) {}

    /// Called at the end of each turn, including turns that record no
    /// movement.
    fn on_turn_end(&mut self, _record: &TurnRecord) {}

    /// Called when `train` reaches the destination.
    fn on_train_finished(&mut self, _train: TrainId, _turn: Turn) {}

    /// Called once after the last train has arrived.
    fn on_dispatch_end(&mut self, _final_turn: Turn) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Writes every turn to the `log` facade: turn lines at `trace`, arrivals
/// and the summary at `debug`.
pub struct TurnLogger<'a> {
    network:  &'a RailNetwork,
    finished: usize,
}

impl<'a> TurnLogger<'a> {
    pub fn new(network: &'a RailNetwork) -> Self {
        Self { network, finished: 0 }
    }

    /// Trains seen arriving so far.
    pub fn finished(&self) -> usize {
        self.finished
    }
}

impl DispatchObserver for TurnLogger<'_> {
    fn on_turn_end(&mut self, record: &TurnRecord) {
        trace!("{}: {}", record.turn, record.render(self.network));
    }

    fn on_train_finished(&mut self, train: TrainId, turn: Turn) {
        self.finished += 1;
        debug!("{train} arrived on {turn}");
    }

    fn on_dispatch_end(&mut self, final_turn: Turn) {
        debug!("dispatch finished on {final_turn}: {} trains delivered", self.finished);
    }
}
