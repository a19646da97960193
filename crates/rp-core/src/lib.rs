//! `rp-core`: foundational types for the `railplan` workspace.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `StationId`, `TrainId`                                |
//! | [`grid`]     | `GridPoint`, Manhattan distance                       |
//! | [`turn`]     | `Turn`                                                |
//! | [`config`]   | `PlannerConfig` exploration ceilings                  |
//! | [`error`]    | `ValidationError`, `ArgumentError`, `ConfigError`     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{ArgumentError, ConfigError, ValidationError};
pub use grid::GridPoint;
pub use ids::{StationId, TrainId};
pub use turn::Turn;
