//! Tests for rp-dispatch.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rp_core::{GridPoint, PlannerConfig, StationId, TrainId, Turn};
use rp_network::{AStarRouter, RailNetwork, RailNetworkBuilder, Route};

use crate::{
    DispatchBuilder, DispatchError, DispatchObserver, NoopObserver, Schedule, TurnRecord,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// A(0,0) ── B(1,0) ── C(2,0)
fn line_network() -> (RailNetwork, [StationId; 3]) {
    let mut b = RailNetworkBuilder::new();
    let a = b.add_station("A", GridPoint::new(0, 0));
    let bb = b.add_station("B", GridPoint::new(1, 0));
    let c = b.add_station("C", GridPoint::new(2, 0));
    b.add_connection(a, bb);
    b.add_connection(bb, c);
    (b.build(), [a, bb, c])
}

/// ```text
///   a(0,0) ── b(1,0) ── c(2,0)
///     │                   │
///   d(0,1) ──────────── e(2,1)
/// ```
fn loop_network() -> (RailNetwork, [StationId; 5]) {
    let mut b = RailNetworkBuilder::new();
    let a = b.add_station("a", GridPoint::new(0, 0));
    let bb = b.add_station("b", GridPoint::new(1, 0));
    let c = b.add_station("c", GridPoint::new(2, 0));
    let d = b.add_station("d", GridPoint::new(0, 1));
    let e = b.add_station("e", GridPoint::new(2, 1));
    b.add_connection(a, bb);
    b.add_connection(bb, c);
    b.add_connection(a, d);
    b.add_connection(c, e);
    b.add_connection(d, e);
    (b.build(), [a, bb, c, d, e])
}

fn dispatch_lines(
    net:    &RailNetwork,
    from:   StationId,
    to:     StationId,
    routes: Vec<Route>,
    trains: u32,
) -> Vec<String> {
    DispatchBuilder::new(net, from, to, routes)
        .build()
        .unwrap()
        .run(trains, &mut NoopObserver)
        .unwrap()
        .lines(net)
}

fn random_network(rng: &mut SmallRng, n: u32, p: f64) -> RailNetwork {
    let mut b = RailNetworkBuilder::new();
    let ids: Vec<StationId> = (0..n)
        .map(|i| b.add_station(format!("s{i}"), GridPoint::new(i % 3, i / 3)))
        .collect();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if rng.gen_bool(p) {
                b.add_connection(ids[i], ids[j]);
            }
        }
    }
    b.build()
}

/// No two trains share a non-destination station within one turn.
fn assert_exclusive(schedule: &Schedule, destination: StationId) {
    for record in &schedule.turns {
        let mut held: Vec<StationId> = record
            .moves
            .iter()
            .map(|m| m.station)
            .filter(|&s| s != destination)
            .collect();
        let before = held.len();
        held.sort();
        held.dedup();
        assert_eq!(held.len(), before, "double occupancy on {}", record.turn);
    }
}

// ── Allocation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod allocation_tests {
    use super::*;
    use crate::allocate;

    #[test]
    fn shorter_route_takes_more_trains() {
        let alloc = allocate(&[2, 3], 3);
        assert_eq!(alloc.route_of, vec![0, 0, 1]);
        assert_eq!(alloc.per_route, vec![2, 1]);
        assert_eq!(alloc.makespan(&[2, 3]), 3);
        assert_eq!(alloc.trains_on(0).collect::<Vec<_>>(), vec![TrainId(0), TrainId(1)]);
        assert_eq!(alloc.route(TrainId(2)), 1);
    }

    #[test]
    fn ties_go_to_lowest_route() {
        assert_eq!(allocate(&[2, 2], 3).route_of, vec![0, 1, 0]);
    }

    #[test]
    fn unused_route_gets_nothing() {
        let alloc = allocate(&[1, 9], 4);
        assert_eq!(alloc.per_route, vec![4, 0]);
        assert_eq!(alloc.makespan(&[1, 9]), 4);
    }

    #[test]
    fn nothing_to_allocate() {
        assert_eq!(allocate(&[], 3).train_count(), 0);
        assert_eq!(allocate(&[4], 0).makespan(&[4]), 0);
    }

    #[test]
    fn makespan_matches_cost_model() {
        let lengths = [3, 4, 6];
        for trains in 1..40 {
            let alloc = allocate(&lengths, trains);
            assert_eq!(
                Some(alloc.makespan(&lengths)),
                rp_plan::turns_required(&lengths, trains),
                "{trains} trains"
            );
        }
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn empty_route_list() {
        let (net, [a, _, c]) = line_network();
        let err = DispatchBuilder::new(&net, a, c, vec![]).build().unwrap_err();
        assert_eq!(err, DispatchError::EmptyRoutes);
    }

    #[test]
    fn empty_route() {
        let (net, [a, _, c]) = line_network();
        let err = DispatchBuilder::new(&net, a, c, vec![Route::default()]).build().unwrap_err();
        assert!(matches!(err, DispatchError::InconsistentRoute { route: 0, .. }));
    }

    #[test]
    fn wrong_destination() {
        let (net, [a, b, c]) = line_network();
        let err = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b])])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::InconsistentRoute { route: 0, reason: "does not end at C".into() }
        );
    }

    #[test]
    fn missing_connection() {
        let (net, [a, _, c]) = line_network();
        let err = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![c])])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DispatchError::InconsistentRoute { route: 0, reason: "A is not connected to C".into() }
        );
    }

    #[test]
    fn second_route_is_checked() {
        let (net, [a, b, _, d, e]) = loop_network();
        let routes = vec![Route::new(vec![d, e]), Route::new(vec![b, e])];
        let err = DispatchBuilder::new(&net, a, e, routes).build().unwrap_err();
        assert!(matches!(err, DispatchError::InconsistentRoute { route: 1, .. }));
    }

    #[test]
    fn route_through_origin() {
        let (net, [a, b, c]) = line_network();
        let err = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, a, b, c])])
            .build()
            .unwrap_err();
        assert!(matches!(err, DispatchError::InconsistentRoute { .. }));
    }

    #[test]
    fn max_turns_is_carried() {
        let (net, [a, b, c]) = line_network();
        let d = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])])
            .max_turns(Some(7))
            .build()
            .unwrap();
        assert_eq!(d.max_turns, Some(7));
        assert_eq!(d.routes.len(), 1);
    }
}

// ── Turn loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn single_train_on_a_line() {
        let (net, [a, b, c]) = line_network();
        let lines = dispatch_lines(&net, a, c, vec![Route::new(vec![b, c])], 1);
        assert_eq!(lines, vec!["T1-B", "T1-C"]);
    }

    #[test]
    fn two_trains_follow_each_other() {
        let (net, [a, b, c]) = line_network();
        let lines = dispatch_lines(&net, a, c, vec![Route::new(vec![b, c])], 2);
        assert_eq!(lines, vec!["T1-B", "T1-C T2-B", "T2-C"]);
    }

    #[test]
    fn direct_route_one_departure_per_turn() {
        let (net, [a, b, _]) = line_network();
        let lines = dispatch_lines(&net, a, b, vec![Route::new(vec![b])], 3);
        assert_eq!(lines, vec!["T1-B", "T2-B", "T3-B"]);
    }

    #[test]
    fn two_routes_in_parallel() {
        let (net, [a, b, c, d, e]) = loop_network();
        let routes = vec![Route::new(vec![d, e]), Route::new(vec![b, c, e])];
        let lines = dispatch_lines(&net, a, e, routes, 3);
        assert_eq!(lines, vec!["T1-d T3-b", "T1-e T2-d T3-c", "T2-e T3-e"]);
    }

    #[test]
    fn final_turn_and_arrivals() {
        let (net, [a, b, c]) = line_network();
        let schedule = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])])
            .build()
            .unwrap()
            .run(4, &mut NoopObserver)
            .unwrap();
        assert_eq!(schedule.final_turn, Turn(5));
        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.turns[0].turn, Turn(1));
    }

    #[test]
    fn zero_trains() {
        let (net, [a, b, c]) = line_network();
        let d = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])]).build().unwrap();
        assert_eq!(d.run(0, &mut NoopObserver), Err(DispatchError::NoTrains));
    }

    #[test]
    fn turn_limit() {
        let (net, [a, b, c]) = line_network();
        let d = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])])
            .max_turns(Some(3))
            .build()
            .unwrap();
        assert_eq!(d.run(5, &mut NoopObserver), Err(DispatchError::TurnLimit { limit: 3 }));
        // Exactly enough turns is fine.
        let d = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])])
            .max_turns(Some(6))
            .build()
            .unwrap();
        assert!(d.run(5, &mut NoopObserver).is_ok());
    }

    #[test]
    fn crossing_routes_stall() {
        // o(0,0) ── p(1,0)
        //   │    ╲    │
        // q(0,1) ── t(1,1)
        let mut b = RailNetworkBuilder::new();
        let o = b.add_station("o", GridPoint::new(0, 0));
        let p = b.add_station("p", GridPoint::new(1, 0));
        let q = b.add_station("q", GridPoint::new(0, 1));
        let t = b.add_station("t", GridPoint::new(1, 1));
        b.add_connection(o, p);
        b.add_connection(o, q);
        b.add_connection(p, q);
        b.add_connection(p, t);
        b.add_connection(q, t);
        let net = b.build();

        let routes = vec![Route::new(vec![p, q, t]), Route::new(vec![q, p, t])];
        let d = DispatchBuilder::new(&net, o, t, routes).build().unwrap();
        assert_eq!(
            d.run(2, &mut NoopObserver),
            Err(DispatchError::Stalled { turn: Turn(2), unfinished: 2 })
        );
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::TurnLogger;

    #[derive(Default)]
    struct Counter {
        starts:   usize,
        ends:     usize,
        arrivals: Vec<(TrainId, Turn)>,
        last:     Option<Turn>,
    }

    impl DispatchObserver for Counter {
        fn on_turn_start(&mut self, _t: Turn) {
            self.starts += 1;
        }

        fn on_turn_end(&mut self, _r: &TurnRecord) {
            self.ends += 1;
        }

        fn on_train_finished(&mut self, train: TrainId, turn: Turn) {
            self.arrivals.push((train, turn));
        }

        fn on_dispatch_end(&mut self, t: Turn) {
            self.last = Some(t);
        }
    }

    #[test]
    fn hooks_fire_every_turn() {
        let (net, [a, b, c]) = line_network();
        let d = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])]).build().unwrap();
        let mut obs = Counter::default();
        d.run(3, &mut obs).unwrap();
        assert_eq!(obs.starts, 4);
        assert_eq!(obs.ends, 4);
        assert_eq!(
            obs.arrivals,
            vec![(TrainId(0), Turn(2)), (TrainId(1), Turn(3)), (TrainId(2), Turn(4))]
        );
        assert_eq!(obs.last, Some(Turn(4)));
    }

    #[test]
    fn turn_logger_counts_arrivals() {
        let (net, [a, b, c]) = line_network();
        let d = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])]).build().unwrap();
        let mut logger = TurnLogger::new(&net);
        d.run(2, &mut logger).unwrap();
        assert_eq!(logger.finished(), 2);
    }
}

// ── Train state ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_tests {
    use super::*;
    use crate::{TrainState, TrainStatus};

    #[test]
    fn station_follows_status() {
        let (_, [_, b, c]) = line_network();
        let route = Route::new(vec![b, c]);
        let mut state = TrainState::new(TrainId(0), 0);
        assert_eq!(state.station(&route), None);
        state.status = TrainStatus::Moving { hop: 0 };
        assert_eq!(state.station(&route), Some(b));
        state.status = TrainStatus::Finished { at: Turn(2) };
        assert_eq!(state.station(&route), Some(c));
        assert!(state.is_finished());
    }
}

// ── Planned dispatch on random networks ───────────────────────────────────────

#[cfg(test)]
mod planned_tests {
    use super::*;
    use rp_plan::{PlanError, Planner};

    #[test]
    fn turn_count_matches_estimate() {
        let mut rng = SmallRng::seed_from_u64(7);
        let planner = Planner::new(AStarRouter, PlannerConfig::default());
        let mut planned = 0;

        for round in 0..50u32 {
            let n = 4 + round % 4;
            let net = random_network(&mut rng, n, 0.45);
            let (start, end) = (StationId(0), StationId(n - 1));
            let trains = rng.gen_range(1..12);

            let plan = match planner.plan(&net, start, end, trains) {
                Ok(plan) => plan,
                Err(PlanError::NoPath { .. }) => continue,
                Err(e) => panic!("round {round}: {e}"),
            };
            planned += 1;

            let schedule = DispatchBuilder::new(&net, start, end, plan.selected.clone())
                .build()
                .unwrap()
                .run(trains, &mut NoopObserver)
                .unwrap();
            assert_eq!(u64::from(schedule.final_turn.0), plan.turns, "round {round}");
            assert_eq!(schedule.len() as u64, plan.turns, "round {round}");
            assert_exclusive(&schedule, end);

            let arrivals = schedule
                .turns
                .iter()
                .flat_map(|r| &r.moves)
                .filter(|m| m.station == end)
                .count();
            assert_eq!(arrivals, trains as usize, "round {round}");
        }
        assert!(planned > 10, "too few reachable networks: {planned}");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn schedule_round_trip() {
        let (net, [a, b, c]) = line_network();
        let schedule = DispatchBuilder::new(&net, a, c, vec![Route::new(vec![b, c])])
            .build()
            .unwrap()
            .run(2, &mut NoopObserver)
            .unwrap();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
