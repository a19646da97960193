//! Routes, the routing trait, and the two single-path routers.
//!
//! # Pluggability
//!
//! `rp-plan` uses a [`Router`] for its fast reachability check before the
//! exhaustive route enumeration, so applications can swap the search
//! without touching the planner.
//!
//! | Router         | Frontier            | Result                              |
//! |----------------|---------------------|-------------------------------------|
//! | `AStarRouter`  | [`MinHeap`] on g+h  | short route, guided by coordinates  |
//! | `BfsRouter`    | FIFO queue          | exact minimum hop count             |
//!
//! All connections cost one hop.  The A* heuristic is the Manhattan distance
//! between station coordinates, which is only admissible when neighbouring
//! stations sit at most one grid unit apart; on sparser maps A* still finds
//! a route but not necessarily a shortest one.  Use `BfsRouter` when the hop
//! count must be exact.

use std::collections::VecDeque;

use rp_core::StationId;

use crate::{MinHeap, NetworkError, NetworkResult, RailNetwork};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A simple path from an (implicit) origin to a destination.
///
/// `stations` starts at the first hop after the origin and ends with the
/// destination, so `len()` is the hop count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub stations: Vec<StationId>,
}

impl Route {
    pub fn new(stations: Vec<StationId>) -> Self {
        Self { stations }
    }

    /// Hop count.
    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// `true` for the degenerate origin == destination route.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// First station after the origin.
    pub fn first(&self) -> Option<StationId> {
        self.stations.first().copied()
    }

    /// Last station (the destination).
    pub fn destination(&self) -> Option<StationId> {
        self.stations.last().copied()
    }

    /// Station at hop `i` (0-based).
    pub fn get(&self, i: usize) -> Option<StationId> {
        self.stations.get(i).copied()
    }

    /// Every station except the last one: the stations a train actually
    /// occupies on its way.
    pub fn interior(&self) -> &[StationId] {
        match self.stations.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Human-readable `a -> b -> c` form.
    pub fn describe(&self, network: &RailNetwork) -> String {
        self.stations
            .iter()
            .map(|&s| network.name(s))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable single-path search.
pub trait Router {
    /// Compute one route from `from` to `to`.
    ///
    /// `from == to` yields an empty route.  Returns
    /// [`NetworkError::NoPath`] if `to` is unreachable.
    fn shortest_route(
        &self,
        network: &RailNetwork,
        from: StationId,
        to: StationId,
    ) -> NetworkResult<Route>;
}

fn no_path(network: &RailNetwork, from: StationId, to: StationId) -> NetworkError {
    NetworkError::NoPath {
        from: network.name(from).to_owned(),
        to:   network.name(to).to_owned(),
    }
}

/// Walk `came_from` back from `to` and return the route without `from`.
fn reconstruct(came_from: &[StationId], from: StationId, to: StationId) -> Route {
    let mut stations = Vec::new();
    let mut cur = to;
    while cur != from {
        stations.push(cur);
        cur = came_from[cur.index()];
    }
    stations.reverse();
    Route { stations }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* over unit-cost connections with a Manhattan-distance heuristic.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn shortest_route(
        &self,
        network: &RailNetwork,
        from: StationId,
        to: StationId,
    ) -> NetworkResult<Route> {
        if from == to {
            return Ok(Route::default());
        }

        let n = network.station_count();
        let goal = network.pos(to);
        // cost[v] = best known hop count to reach v.
        let mut cost      = vec![u32::MAX; n];
        let mut came_from = vec![StationId::INVALID; n];
        cost[from.index()] = 0;

        // (priority, seq, cost_so_far, station).  `seq` makes equal
        // priorities pop in insertion order.
        let mut open: MinHeap<(u32, u64, u32, StationId)> = MinHeap::with_capacity(n);
        let mut seq = 0u64;
        open.push((network.pos(from).manhattan(goal), seq, 0, from));

        while let Some((_, _, g, station)) = open.pop() {
            if station == to {
                return Ok(reconstruct(&came_from, from, to));
            }
            // Skip stale entries.
            if g > cost[station.index()] {
                continue;
            }
            for &next in network.neighbors(station) {
                let new_cost = g + 1;
                if new_cost < cost[next.index()] {
                    cost[next.index()] = new_cost;
                    came_from[next.index()] = station;
                    seq += 1;
                    let priority = new_cost + network.pos(next).manhattan(goal);
                    open.push((priority, seq, new_cost, next));
                }
            }
        }

        Err(no_path(network, from, to))
    }
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search: exact minimum hop count.
#[derive(Debug, Default, Clone, Copy)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn shortest_route(
        &self,
        network: &RailNetwork,
        from: StationId,
        to: StationId,
    ) -> NetworkResult<Route> {
        if from == to {
            return Ok(Route::default());
        }

        let n = network.station_count();
        let mut visited   = vec![false; n];
        let mut came_from = vec![StationId::INVALID; n];
        let mut queue = VecDeque::new();
        visited[from.index()] = true;
        queue.push_back(from);

        while let Some(station) = queue.pop_front() {
            if station == to {
                return Ok(reconstruct(&came_from, from, to));
            }
            for &next in network.neighbors(station) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    came_from[next.index()] = station;
                    queue.push_back(next);
                }
            }
        }

        Err(no_path(network, from, to))
    }
}
