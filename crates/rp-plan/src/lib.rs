//! `rp-plan`: choosing which routes the trains will run on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`enumerate`] | `enumerate_routes`: every simple path, shortest first     |
//! | [`combine`]   | `build_combinations`: sets of routes with disjoint interiors |
//! | [`cost`]      | `turns_required`, `select_optimal`: pipeline cost model   |
//! | [`planner`]   | `Planner<R>`: reachability check + the three stages above |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                               |
//!
//! # Stages
//!
//! ```text
//! Router::shortest_route   fail fast when the destination is unreachable
//!         │
//! enumerate_routes         all simple paths, stable-sorted by hop count
//!         │
//! build_combinations       leaves of the disjoint-route search, deduplicated
//!         │                by their sorted multiset of lengths
//! select_optimal           fewest turns for N trains; first wins ties
//! ```
//!
//! Both exhaustive stages run on explicit work stacks and stop at the
//! ceilings in [`PlannerConfig`](rp_core::PlannerConfig), logging a warning
//! when they do.

pub mod combine;
pub mod cost;
pub mod enumerate;
pub mod error;
pub mod planner;


pub use combine::{Combination, CombinationSet, build_combinations};
pub use cost::{Selection, delivered_by, select_optimal, turns_required};
pub use enumerate::{RouteSet, enumerate_routes};
pub use error::{PlanError, PlanResult};
pub use planner::{Plan, Planner, resolve_endpoints};
