//! The planning pipeline: reachability, enumeration, combination, selection.

use log::debug;

use rp_core::{PlannerConfig, StationId, ValidationError};
use rp_network::{AStarRouter, RailNetwork, Route, Router};

use crate::{
    PlanError, PlanResult, build_combinations, enumerate_routes, select_optimal,
};

/// Look up the start and end stations by name.
///
/// Identical names are rejected before existence is checked, so
/// `start == end` is reported even for a station that does not exist.
pub fn resolve_endpoints(
    network: &RailNetwork,
    start:   &str,
    end:     &str,
) -> Result<(StationId, StationId), ValidationError> {
    if start == end {
        return Err(ValidationError::SameEndpoints(start.to_owned()));
    }
    let find = |role: &'static str, name: &str| {
        network.lookup(name).ok_or_else(|| ValidationError::MissingEndpoint {
            role,
            name: name.to_owned(),
        })
    };
    Ok((find("start", start)?, find("end", end)?))
}

/// Outcome of [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Every enumerated route, shortest first.
    pub routes: Vec<Route>,
    /// Number of distinct combinations evaluated.
    pub combinations: usize,
    /// Routes of the winning combination, shortest first.
    pub selected: Vec<Route>,
    /// Hop counts of `selected`.
    pub lengths: Vec<usize>,
    /// Estimated turns to move every train.
    pub turns: u64,
    /// `true` if any exploration ceiling cut a search short.
    pub truncated: bool,
}

/// Chooses the routes a batch of trains will run on.
///
/// `R` only answers the reachability question; the exhaustive stages do
/// not depend on it.
#[derive(Debug, Clone, Default)]
pub struct Planner<R: Router = AStarRouter> {
    pub router: R,
    pub config: PlannerConfig,
}

impl<R: Router> Planner<R> {
    pub fn new(router: R, config: PlannerConfig) -> Self {
        Self { router, config }
    }

    pub fn plan(
        &self,
        network: &RailNetwork,
        start:   StationId,
        end:     StationId,
        trains:  u32,
    ) -> PlanResult<Plan> {
        self.config.validate()?;
        if trains == 0 {
            return Err(PlanError::NoTrains);
        }
        if start == end {
            return Err(ValidationError::SameEndpoints(network.name(start).to_owned()).into());
        }

        let probe = self.router.shortest_route(network, start, end)?;
        debug!(
            "{} reachable from {} in {} hops via {}",
            network.name(end),
            network.name(start),
            probe.len(),
            probe.describe(network)
        );

        let enumerated = enumerate_routes(network, start, end, &self.config)?;
        let set = build_combinations(&enumerated.routes, end, &self.config);

        let selection = select_optimal(&set.combinations, trains).ok_or_else(|| {
            PlanError::NoPath {
                from: network.name(start).to_owned(),
                to:   network.name(end).to_owned(),
            }
        })?;
        let winner = &set.combinations[selection.index];
        let mut selected: Vec<Route> = winner
            .resolve(&enumerated.routes)
            .into_iter()
            .cloned()
            .collect();
        selected.sort_by_key(Route::len);

        debug!(
            "selected combination {} of {} with lengths {:?}: {} turns for {trains} trains",
            selection.index,
            set.combinations.len(),
            selection.lengths,
            selection.turns
        );

        Ok(Plan {
            combinations: set.combinations.len(),
            selected,
            lengths:      selection.lengths,
            turns:        selection.turns,
            truncated:    enumerated.truncated || set.truncated,
            routes:       enumerated.routes,
        })
    }
}
