//! `rp-map`: reading and validating the textual network description.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`parser`]   | `parse_map`, `load_map`, `NetworkMap`                    |
//! | [`validate`] | `validate_map`: structural checks on a parsed map       |
//! | [`generate`] | `write_stress_map`: synthetic chain-and-spoke map        |
//! | [`error`]    | `ParseError`, `MapError`, `MapResult<T>`                 |
//!
//! # Pipeline
//!
//! ```text
//! text ──parse──▶ NetworkMap ──validate──▶ NetworkMap (trusted) ──into_network──▶ RailNetwork
//! ```
//!
//! [`load_map`] and [`parse_map`] run both passes; a map that comes back
//! from them is safe to hand to the planner.

pub mod error;
pub mod generate;
pub mod parser;
pub mod validate;


pub use error::{MapError, MapResult, ParseError};
pub use generate::{stress_map_text, write_stress_map};
pub use parser::{ConnectionRecord, MAX_STATIONS, NetworkMap, StationRecord, load_map, parse_map};
pub use validate::validate_map;
