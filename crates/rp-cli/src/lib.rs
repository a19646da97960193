//! `rp-cli`: the `railplan` command.
//!
//! [`run`] is the whole pipeline behind the binary and returns the lines
//! to print, so it can be exercised without spawning a process:
//!
//! ```text
//! load_map ─▶ resolve_endpoints ─▶ Planner::plan ─▶ Dispatcher::run ─▶ lines
//! ```
//!
//! Everything is computed before the first line is returned; a failure at
//! any stage leaves stdout empty.

pub mod args;


use std::path::PathBuf;

use log::{info, warn};
use thiserror::Error;

use rp_core::{ArgumentError, ConfigError, PlannerConfig, ValidationError};
use rp_dispatch::{DispatchBuilder, DispatchError, TurnLogger};
use rp_map::{MapError, load_map};
use rp_network::AStarRouter;
use rp_plan::{PlanError, Planner, resolve_endpoints};

pub use args::{Cli, ExtraArg, parse_extras, parse_train_count, usage_error};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{}: {source}", path.display())]
    Load {
        path:   PathBuf,
        #[source]
        source: MapError,
    },

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

pub type AppResult<T> = Result<T, AppError>;

/// A fully checked invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub map:    PathBuf,
    pub start:  String,
    pub end:    String,
    pub trains: u32,
    pub extras: Vec<ExtraArg>,
    pub config: PlannerConfig,
}

impl TryFrom<Cli> for Request {
    type Error = ArgumentError;

    /// Train count first, then the extra arguments.
    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let trains = parse_train_count(&cli.trains)?;
        let extras = parse_extras(&cli.extra)?;
        let config = cli.config();
        Ok(Request {
            map: cli.map,
            start: cli.start,
            end: cli.end,
            trains,
            extras,
            config,
        })
    }
}

/// Plan and dispatch, returning one schedule line per turn.
pub fn run(request: &Request) -> AppResult<Vec<String>> {
    request.config.validate()?;
    for extra in &request.extras {
        info!("handling extra argument: {extra}");
    }

    let load = |source| AppError::Load { path: request.map.clone(), source };
    let map = load_map(&request.map).map_err(load)?;
    let network = map.into_network().map_err(load)?;
    let (start, end) = resolve_endpoints(&network, &request.start, &request.end)?;

    let plan = Planner::new(AStarRouter, request.config.clone())
        .plan(&network, start, end, request.trains)?;
    if plan.truncated {
        warn!("an exploration ceiling was hit; the schedule may take more turns than necessary");
    }
    info!(
        "{} trains from {} to {}: {} routes of lengths {:?}, estimated {} turns",
        request.trains,
        request.start,
        request.end,
        plan.selected.len(),
        plan.lengths,
        plan.turns
    );

    let estimate = plan.turns;
    let schedule = DispatchBuilder::new(&network, start, end, plan.selected)
        .max_turns(request.config.max_turns)
        .build()?
        .run(request.trains, &mut TurnLogger::new(&network))?;
    if u64::from(schedule.final_turn.0) != estimate {
        warn!(
            "dispatch took {} turns, {estimate} were estimated",
            schedule.final_turn.0
        );
    }

    Ok(schedule.lines(&network))
}
