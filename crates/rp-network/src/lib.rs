//! `rp-network`: station graph, priority queue, and single-path routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `RailNetwork` (CSR adjacency + name index), `RailNetworkBuilder` |
//! | [`heap`]    | `MinHeap`: array-backed binary min-heap                    |
//! | [`router`]  | `Route`, `Router` trait, `AStarRouter`, `BfsRouter`         |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Route`.                |

pub mod error;
pub mod heap;
pub mod network;
pub mod router;


pub use error::{NetworkError, NetworkResult};
pub use heap::MinHeap;
pub use network::{RailNetwork, RailNetworkBuilder, Station};
pub use router::{AStarRouter, BfsRouter, Route, Router};
