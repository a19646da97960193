//! Fluent builder for constructing a [`Dispatcher`].

use rp_core::StationId;
use rp_network::{RailNetwork, Route};

use crate::{DispatchError, DispatchResult, Dispatcher};

/// Fluent builder for [`Dispatcher`].
///
/// `build` checks every route against the network before any train moves:
///
/// - the route is not empty and ends at `destination`,
/// - it never passes through `origin` or through `destination` early,
/// - its first station is adjacent to `origin` and every later hop is a
///   connection.
///
/// # Example
///
/// ```rust,ignore
/// let dispatcher = DispatchBuilder::new(&network, start, end, plan.selected)
///     .max_turns(config.max_turns)
///     .build()?;
/// let schedule = dispatcher.run(trains, &mut TurnLogger::new(&network))?;
/// ```
pub struct DispatchBuilder<'a> {
    network:     &'a RailNetwork,
    origin:      StationId,
    destination: StationId,
    routes:      Vec<Route>,
    max_turns:   Option<u32>,
}

impl<'a> DispatchBuilder<'a> {
    pub fn new(
        network:     &'a RailNetwork,
        origin:      StationId,
        destination: StationId,
        routes:      Vec<Route>,
    ) -> Self {
        Self {
            network,
            origin,
            destination,
            routes,
            max_turns: None,
        }
    }

    /// Abort with [`DispatchError::TurnLimit`] after this many turns.
    pub fn max_turns(mut self, limit: Option<u32>) -> Self {
        self.max_turns = limit;
        self
    }

    pub fn build(self) -> DispatchResult<Dispatcher<'a>> {
        if self.routes.is_empty() {
            return Err(DispatchError::EmptyRoutes);
        }
        for (i, route) in self.routes.iter().enumerate() {
            self.check_route(i, route)?;
        }

        Ok(Dispatcher {
            network:     self.network,
            origin:      self.origin,
            destination: self.destination,
            routes:      self.routes,
            max_turns:   self.max_turns,
        })
    }

    fn check_route(&self, index: usize, route: &Route) -> DispatchResult<()> {
        let net = self.network;
        let inconsistent = |reason: String| DispatchError::InconsistentRoute { route: index, reason };

        if route.destination() != Some(self.destination) {
            return Err(inconsistent(format!(
                "does not end at {}",
                net.name(self.destination)
            )));
        }
        if route.stations.contains(&self.origin) {
            return Err(inconsistent(format!("passes through {}", net.name(self.origin))));
        }
        if route.interior().contains(&self.destination) {
            return Err(inconsistent(format!(
                "reaches {} before its last hop",
                net.name(self.destination)
            )));
        }

        let mut prev = self.origin;
        for &station in &route.stations {
            if station.index() >= net.station_count() {
                return Err(inconsistent(format!("unknown station {station}")));
            }
            if !net.is_adjacent(prev, station) {
                return Err(inconsistent(format!(
                    "{} is not connected to {}",
                    net.name(prev),
                    net.name(station)
                )));
            }
            prev = station;
        }
        Ok(())
    }
}
