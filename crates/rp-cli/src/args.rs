//! Command-line arguments.
//!
//! clap handles the shape of the command line; the train count and the
//! trailing extra arguments are checked here so their errors read the same
//! whether they come from a shell or from a test.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

use rp_core::{ArgumentError, PlannerConfig};

/// `railplan <map> <start> <end> <trains> [extra|bonus ...]`
#[derive(Debug, Parser)]
#[command(
    name = "railplan",
    version,
    about = "Move N trains between two stations of a rail network in as few turns as possible"
)]
pub struct Cli {
    /// Network description file.
    pub map: PathBuf,

    /// Station every train starts from.
    pub start: String,

    /// Station every train must reach.
    pub end: String,

    /// Number of trains (positive integer).
    #[arg(allow_hyphen_values = true)]
    pub trains: String,

    /// Optional extra arguments; only `extra` and `bonus` are recognized.
    pub extra: Vec<String>,

    /// Stop route enumeration after this many routes.
    #[arg(long, default_value_t = PlannerConfig::DEFAULT_MAX_ROUTES)]
    pub max_routes: usize,

    /// Ignore routes longer than this many hops.
    #[arg(long)]
    pub max_route_len: Option<usize>,

    /// Work-stack steps allowed for route enumeration.
    #[arg(long, default_value_t = PlannerConfig::DEFAULT_MAX_ENUMERATION_STEPS)]
    pub max_enumeration_steps: usize,

    /// Work-stack steps allowed for the combination search.
    #[arg(long, default_value_t = PlannerConfig::DEFAULT_MAX_COMBINATION_STEPS)]
    pub max_combination_steps: usize,

    /// Give up if dispatch has not finished after this many turns.
    #[arg(long)]
    pub max_turns: Option<u32>,
}

impl Cli {
    pub fn config(&self) -> PlannerConfig {
        PlannerConfig {
            max_routes:            self.max_routes,
            max_route_len:         self.max_route_len,
            max_enumeration_steps: self.max_enumeration_steps,
            max_combination_steps: self.max_combination_steps,
            max_turns:             self.max_turns,
        }
    }
}

/// Recognized trailing arguments.  They are accepted and logged; they do
/// not change the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraArg {
    Extra,
    Bonus,
}

impl FromStr for ExtraArg {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "extra" => Ok(ExtraArg::Extra),
            "bonus" => Ok(ExtraArg::Bonus),
            other => Err(ArgumentError::Unrecognized(other.to_owned())),
        }
    }
}

impl fmt::Display for ExtraArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExtraArg::Extra => "extra",
            ExtraArg::Bonus => "bonus",
        })
    }
}

/// A positive integer number of trains.
pub fn parse_train_count(s: &str) -> Result<u32, ArgumentError> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ArgumentError::InvalidTrainCount(s.to_owned())),
    }
}

/// Every extra argument must be recognized; the first one that is not
/// fails the whole list.
pub fn parse_extras(args: &[String]) -> Result<Vec<ExtraArg>, ArgumentError> {
    args.iter().map(|a| a.parse()).collect()
}

/// Translate a clap failure (other than `--help`/`--version`) into the
/// argument error reported to the user.
pub fn usage_error(err: &clap::Error) -> ArgumentError {
    let detail = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(s)) => s.clone(),
        Some(ContextValue::Strings(v)) => v.join(", "),
        _ => err.kind().to_string(),
    };
    match err.kind() {
        ErrorKind::UnknownArgument => ArgumentError::Unrecognized(detail),
        _ => ArgumentError::WrongCount(detail),
    }
}
