//! Assigning trains to routes.
//!
//! The `m`-th train put on a route of `L` hops (counting from zero) arrives
//! on turn `L + m`.  Giving each train, in id order, the route where it
//! would arrive earliest hands out the `N` smallest arrival turns across
//! all routes, which is exactly the pipeline cost the planner estimated.

use rp_core::TrainId;

/// Which route each train runs on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    /// Route index per train, indexed by `TrainId`.
    pub route_of: Vec<usize>,
    /// Number of trains per route.
    pub per_route: Vec<u32>,
}

impl Allocation {
    pub fn train_count(&self) -> usize {
        self.route_of.len()
    }

    pub fn route(&self, train: TrainId) -> usize {
        self.route_of[train.index()]
    }

    /// Trains on `route` in departure order.
    pub fn trains_on(&self, route: usize) -> impl Iterator<Item = TrainId> + '_ {
        self.route_of
            .iter()
            .enumerate()
            .filter(move |&(_, &r)| r == route)
            .map(|(i, _)| TrainId(i as u32))
    }

    /// Turn on which the last train arrives if no route ever blocks.
    pub fn makespan(&self, lengths: &[usize]) -> u64 {
        self.per_route
            .iter()
            .zip(lengths)
            .filter(|&(&count, _)| count > 0)
            .map(|(&count, &len)| len as u64 + u64::from(count) - 1)
            .max()
            .unwrap_or(0)
    }
}

/// Assign `trains` trains to routes of the given lengths.
///
/// Train `k` goes to the route minimizing `length + trains already on it`;
/// the lowest route index wins ties.  With no routes nobody is assigned.
pub fn allocate(lengths: &[usize], trains: u32) -> Allocation {
    let mut per_route = vec![0u32; lengths.len()];
    let mut route_of = Vec::with_capacity(trains as usize);

    for _ in 0..trains {
        let Some(best) = (0..lengths.len())
            .min_by_key(|&r| lengths[r] as u64 + u64::from(per_route[r]))
        else {
            break;
        };
        per_route[best] += 1;
        route_of.push(best);
    }

    Allocation { route_of, per_route }
}
