//! Sets of routes that can run side by side.
//!
//! Two routes are compatible when they share no station other than the
//! destination (the origin is never part of a `Route`).  For every route
//! `i`, the search grows a combination by appending compatible routes with a
//! larger index than the last one chosen, depth first.  A combination that
//! admits no later route is a leaf.  A leaf becomes a candidate only if it is
//! maximal: no route outside it, earlier indices included, is compatible
//! with all of its members.  Every maximal set is reached as a leaf from its
//! lowest index, so the candidates are exactly the maximal combinations.
//!
//! # Deduplication
//!
//! Leaves are deduplicated by their **sorted multiset of route lengths**,
//! not by the routes themselves: once `[2, 3]` has been recorded, any later
//! leaf made of a 2-hop and a 3-hop route is dropped, whatever its stations.
//! The cost model only looks at lengths, so the first such leaf stands for
//! all of them.
//!
//! # Work stack
//!
//! The search keeps one frame per chosen route on an explicit stack and
//! counts every frame visit as a step.  `max_combination_steps` bounds the
//! total; graphs with many simple paths stop with a warning instead of
//! running for hours.

use log::{debug, warn};
use rustc_hash::FxHashSet;

use rp_core::{PlannerConfig, StationId};
use rp_network::Route;

/// Indices into the enumerated route list plus their lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    /// Ascending indices into the route slice passed to
    /// [`build_combinations`].
    pub routes: Vec<usize>,
    /// Hop counts of `routes`, sorted ascending.
    pub lengths: Vec<usize>,
}

impl Combination {
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve the indices against `routes`.
    pub fn resolve<'a>(&self, routes: &'a [Route]) -> Vec<&'a Route> {
        self.routes.iter().map(|&i| &routes[i]).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationSet {
    pub combinations: Vec<Combination>,
    /// Work-stack steps taken.
    pub steps: usize,
    /// `true` if `max_combination_steps` stopped the search.
    pub truncated: bool,
}

struct Frame {
    /// Next candidate route index.
    next: usize,
    /// Whether any route was appended at this depth.
    extended: bool,
}

/// Marks the non-terminal stations of a route as used or free.
fn mark(used: &mut [bool], route: &Route, destination: StationId, value: bool) {
    for &s in route.stations.iter().filter(|&&s| s != destination) {
        used[s.index()] = value;
    }
}

fn compatible(used: &[bool], route: &Route, destination: StationId) -> bool {
    route
        .stations
        .iter()
        .all(|&s| s == destination || !used[s.index()])
}

/// No route outside `chosen` fits alongside it.
fn is_maximal(used: &[bool], routes: &[Route], chosen: &[usize], destination: StationId) -> bool {
    (0..routes.len())
        .filter(|i| !chosen.contains(i))
        .all(|i| !compatible(used, &routes[i], destination))
}

/// Build deduplicated maximal combinations of mutually compatible routes.
///
/// `destination` is the only station routes may share.  The result is never
/// empty when `routes` is non-empty: if the step ceiling is hit before the
/// first leaf, the single shortest route is returned.
pub fn build_combinations(
    routes:      &[Route],
    destination: StationId,
    config:      &PlannerConfig,
) -> CombinationSet {
    let width = routes
        .iter()
        .flat_map(|r| r.stations.iter())
        .map(|s| s.index() + 1)
        .max()
        .unwrap_or(0);
    let mut used = vec![false; width];

    let mut seen: FxHashSet<Vec<usize>> = FxHashSet::default();
    let mut combinations: Vec<Combination> = Vec::new();
    let mut steps = 0usize;
    let mut truncated = false;

    'outer: for first in 0..routes.len() {
        let mut chosen = vec![first];
        mark(&mut used, &routes[first], destination, true);
        let mut stack = vec![Frame { next: first + 1, extended: false }];

        while let Some(frame) = stack.last_mut() {
            steps += 1;
            if steps > config.max_combination_steps {
                truncated = true;
                break 'outer;
            }

            let candidate = (frame.next..routes.len())
                .find(|&j| compatible(&used, &routes[j], destination));

            match candidate {
                Some(j) => {
                    frame.next = j + 1;
                    frame.extended = true;
                    chosen.push(j);
                    mark(&mut used, &routes[j], destination, true);
                    stack.push(Frame { next: j + 1, extended: false });
                }
                None => {
                    if !frame.extended && is_maximal(&used, routes, &chosen, destination) {
                        let mut key: Vec<usize> = chosen.iter().map(|&i| routes[i].len()).collect();
                        key.sort_unstable();
                        if seen.insert(key.clone()) {
                            combinations.push(Combination { routes: chosen.clone(), lengths: key });
                        }
                    }
                    stack.pop();
                    if let Some(i) = chosen.pop() {
                        mark(&mut used, &routes[i], destination, false);
                    }
                }
            }
        }
    }

    if truncated {
        warn!(
            "combination search stopped at max_combination_steps = {} with {} candidates",
            config.max_combination_steps,
            combinations.len()
        );
    }
    if combinations.is_empty() && !routes.is_empty() {
        combinations.push(Combination { routes: vec![0], lengths: vec![routes[0].len()] });
    }
    debug!("{} distinct combinations after {steps} steps", combinations.len());

    CombinationSet { combinations, steps, truncated }
}
