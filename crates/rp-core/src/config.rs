//! Planner configuration: ceilings on exhaustive exploration.
//!
//! Route enumeration and combination search are exponential in the number of
//! simple paths.  Every ceiling here turns a potential hang into a logged,
//! truncated result.  The defaults leave small maps completely unaffected.

use crate::ConfigError;

/// Exploration ceilings shared by the planner and the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Stop route enumeration after this many routes have been recorded.
    pub max_routes: usize,

    /// Prune partial routes longer than this many hops.  `None` = unbounded.
    pub max_route_len: Option<usize>,

    /// Maximum number of work-stack steps in route enumeration.  Bounds the
    /// search even when dead-end branches never reach the destination.
    pub max_enumeration_steps: usize,

    /// Maximum number of work-stack steps in combination search.
    pub max_combination_steps: usize,

    /// Abort dispatch after this many turns.  `None` relies on stall
    /// detection alone.
    pub max_turns: Option<u32>,
}

impl PlannerConfig {
    pub const DEFAULT_MAX_ROUTES: usize = 10_000;
    pub const DEFAULT_MAX_ENUMERATION_STEPS: usize = 1_000_000;
    pub const DEFAULT_MAX_COMBINATION_STEPS: usize = 1_000_000;

    /// Reject ceilings that would make every search fail immediately.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_routes == 0 {
            return Err(ConfigError::Zero("max_routes"));
        }
        if self.max_route_len == Some(0) {
            return Err(ConfigError::Zero("max_route_len"));
        }
        if self.max_enumeration_steps == 0 {
            return Err(ConfigError::Zero("max_enumeration_steps"));
        }
        if self.max_combination_steps == 0 {
            return Err(ConfigError::Zero("max_combination_steps"));
        }
        if self.max_turns == Some(0) {
            return Err(ConfigError::Zero("max_turns"));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_routes:            Self::DEFAULT_MAX_ROUTES,
            max_route_len:         None,
            max_enumeration_steps: Self::DEFAULT_MAX_ENUMERATION_STEPS,
            max_combination_steps: Self::DEFAULT_MAX_COMBINATION_STEPS,
            max_turns:             None,
        }
    }
}
