//! The `Dispatcher` and its turn loop.

use log::debug;

use rp_core::{StationId, TrainId, Turn};
use rp_network::{RailNetwork, Route};

use crate::{
    DispatchError, DispatchObserver, DispatchResult, Movement, Schedule, TrainState, TrainStatus,
    TurnRecord, allocate,
};

/// What happened to one train during a turn.
enum Step {
    Stayed,
    Advanced,
    Arrived,
}

/// Scratch state for one turn.
struct TurnState {
    /// Length-1 routes that already took a departure this turn.
    direct_used: Vec<bool>,
    progressed:  bool,
}

/// Moves trains from `origin` to `destination` along validated routes.
///
/// Create via [`DispatchBuilder`][crate::DispatchBuilder].  The origin and
/// destination must be stations of `network`.
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    pub network:     &'a RailNetwork,
    pub origin:      StationId,
    pub destination: StationId,
    /// Routes in allocation priority order.
    pub routes:      Vec<Route>,
    pub max_turns:   Option<u32>,
}

impl Dispatcher<'_> {
    /// Dispatch `trains` trains and return the recorded schedule.
    ///
    /// Calls observer hooks at every turn boundary and on each arrival.
    pub fn run<O: DispatchObserver>(&self, trains: u32, observer: &mut O) -> DispatchResult<Schedule> {
        if trains == 0 {
            return Err(DispatchError::NoTrains);
        }

        let lengths: Vec<usize> = self.routes.iter().map(Route::len).collect();
        let allocation = allocate(&lengths, trains);
        debug!(
            "allocated {trains} trains over routes of lengths {lengths:?}: {:?}",
            allocation.per_route
        );

        let mut states: Vec<TrainState> = allocation
            .route_of
            .iter()
            .enumerate()
            .map(|(i, &route)| TrainState::new(TrainId(i as u32), route))
            .collect();
        let mut occupancy: Vec<Option<TrainId>> = vec![None; self.network.station_count()];
        let mut unfinished = states.len();
        let mut records: Vec<TurnRecord> = Vec::new();
        let mut turn = Turn::ZERO;

        while unfinished > 0 {
            turn = turn.next();
            if let Some(limit) = self.max_turns.filter(|&limit| turn.0 > limit) {
                return Err(DispatchError::TurnLimit { limit });
            }
            observer.on_turn_start(turn);

            let mut scratch = TurnState {
                direct_used: vec![false; self.routes.len()],
                progressed:  false,
            };
            let mut record = TurnRecord { turn, moves: Vec::new() };

            // Ascending id: a train ahead frees its station before the
            // follower tries to enter it.
            for state in states.iter_mut().filter(|s| !s.is_finished()) {
                let step = self.step(state, turn, &mut occupancy, &mut scratch)?;
                if let Some(station) = state.station(&self.routes[state.route]) {
                    record.moves.push(Movement { train: state.id, station });
                }
                if let Step::Arrived = step {
                    unfinished -= 1;
                    observer.on_train_finished(state.id, turn);
                }
            }

            if !scratch.progressed {
                return Err(DispatchError::Stalled { turn, unfinished });
            }
            observer.on_turn_end(&record);
            if !record.is_empty() {
                records.push(record);
            }
        }

        observer.on_dispatch_end(turn);
        Ok(Schedule { turns: records, final_turn: turn })
    }

    /// Move one unfinished train at most one station.
    fn step(
        &self,
        state:     &mut TrainState,
        turn:      Turn,
        occupancy: &mut [Option<TrainId>],
        scratch:   &mut TurnState,
    ) -> DispatchResult<Step> {
        let route = &self.routes[state.route];
        let overrun = || DispatchError::RouteOverrun { train: state.id, route: state.route };

        let (from, to) = match state.status {
            TrainStatus::Waiting => (None, route.first().ok_or_else(overrun)?),
            TrainStatus::Moving { hop } => {
                let here = route.get(hop).ok_or_else(overrun)?;
                (Some((hop, here)), route.get(hop + 1).ok_or_else(overrun)?)
            }
            TrainStatus::Finished { .. } => return Ok(Step::Stayed),
        };

        let arriving = to == self.destination;
        let free = match (arriving, from) {
            // A direct route sends at most one train per turn.
            (true, None) => !scratch.direct_used[state.route],
            (true, Some(_)) => true,
            (false, _) => occupancy[to.index()].is_none(),
        };
        if !free {
            return Ok(Step::Stayed);
        }

        if let Some((_, here)) = from {
            occupancy[here.index()] = None;
        }
        scratch.progressed = true;

        if arriving {
            if from.is_none() {
                scratch.direct_used[state.route] = true;
            }
            state.status = TrainStatus::Finished { at: turn };
            return Ok(Step::Arrived);
        }

        occupancy[to.index()] = Some(state.id);
        state.status = TrainStatus::Moving {
            hop: from.map_or(0, |(hop, _)| hop + 1),
        };
        Ok(Step::Advanced)
    }
}
