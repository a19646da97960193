//! Exhaustive simple-path enumeration.
//!
//! Depth-first search on an explicit frame stack.  Each frame holds a
//! station on the current path and the slot of the next neighbour to try,
//! so the visiting order is exactly that of the recursive formulation:
//! neighbours in adjacency (declaration) order, deepest first.
//!
//! The search never extends a path through `end` and never revisits a
//! station already on the path, so every recorded route is simple.
//!
//! When `max_routes` or `max_enumeration_steps` stops the search early, the
//! depth-first order may not have reached the shortest route yet.  A
//! breadth-first route is merged in afterwards, so the first route of a
//! truncated set is still a shortest one (unless `max_route_len` excludes it).

use log::{debug, warn};

use rp_core::{PlannerConfig, StationId};
use rp_network::{BfsRouter, RailNetwork, Route, Router};

use crate::{PlanError, PlanResult};

/// Enumerated routes, shortest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSet {
    pub routes: Vec<Route>,
    /// `true` if a ceiling cut the search short: `max_routes` or
    /// `max_enumeration_steps` was reached, or `max_route_len` pruned at
    /// least one path.
    pub truncated: bool,
}

/// Every simple path from `start` to `end`, stable-sorted by hop count.
///
/// Fails with [`PlanError::NoPath`] if none was found (including the case
/// where `max_route_len` pruned them all).
pub fn enumerate_routes(
    network: &RailNetwork,
    start:   StationId,
    end:     StationId,
    config:  &PlannerConfig,
) -> PlanResult<RouteSet> {
    let mut routes: Vec<Route> = Vec::new();
    let mut hit_route_cap = false;
    let mut hit_step_cap = false;
    let mut steps = 0usize;
    let mut pruned = 0usize;

    let mut on_path = vec![false; network.station_count()];
    // Stations after `start` on the current path; always `stack.len() - 1` long.
    let mut path: Vec<StationId> = Vec::new();
    // (station, next neighbour slot)
    let mut stack: Vec<(StationId, usize)> = vec![(start, 0)];
    on_path[start.index()] = true;

    let fits = |hops: usize| config.max_route_len.is_none_or(|max| hops <= max);

    while let Some(top) = stack.last_mut() {
        steps += 1;
        if steps > config.max_enumeration_steps {
            hit_step_cap = true;
            break;
        }

        let (station, slot) = *top;
        let neighbors = network.neighbors(station);

        if slot == neighbors.len() {
            stack.pop();
            on_path[station.index()] = false;
            // No-op for the `start` frame, which has no path entry.
            path.pop();
            continue;
        }
        top.1 += 1;

        let next = neighbors[slot];
        if on_path[next.index()] {
            continue;
        }

        if next == end {
            if !fits(path.len() + 1) {
                pruned += 1;
                continue;
            }
            let mut stations = Vec::with_capacity(path.len() + 1);
            stations.extend_from_slice(&path);
            stations.push(end);
            routes.push(Route::new(stations));
            if routes.len() >= config.max_routes {
                hit_route_cap = true;
                break;
            }
            continue;
        }

        // Going through `next` needs at least one more hop to reach `end`.
        if !fits(path.len() + 2) {
            pruned += 1;
            continue;
        }
        on_path[next.index()] = true;
        path.push(next);
        stack.push((next, 0));
    }

    if hit_route_cap {
        warn!(
            "route enumeration stopped at max_routes = {}; remaining paths were not explored",
            config.max_routes
        );
    }
    if hit_step_cap {
        warn!(
            "route enumeration stopped at max_enumeration_steps = {} with {} routes",
            config.max_enumeration_steps,
            routes.len()
        );
    }
    if pruned > 0 {
        warn!(
            "route enumeration pruned {pruned} partial paths longer than max_route_len = {:?}",
            config.max_route_len
        );
    }

    if hit_route_cap || hit_step_cap {
        if let Ok(shortest) = BfsRouter.shortest_route(network, start, end) {
            if fits(shortest.len()) && !routes.contains(&shortest) {
                debug!("merged breadth-first route of {} hops", shortest.len());
                routes.push(shortest);
            }
        }
    }

    if routes.is_empty() {
        return Err(PlanError::NoPath {
            from: network.name(start).to_owned(),
            to:   network.name(end).to_owned(),
        });
    }

    // Stable: equal lengths keep discovery order.
    routes.sort_by_key(Route::len);
    debug!(
        "enumerated {} routes from {} to {} (lengths {}..={})",
        routes.len(),
        network.name(start),
        network.name(end),
        routes[0].len(),
        routes[routes.len() - 1].len()
    );

    Ok(RouteSet {
        routes,
        truncated: hit_route_cap || hit_step_cap || pruned > 0,
    })
}
