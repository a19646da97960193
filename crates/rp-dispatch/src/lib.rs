//! `rp-dispatch`: moving trains along their routes, one turn at a time.
//!
//! # Turn loop
//!
//! ```text
//! allocate(lengths, N)        train k → route minimizing length + load
//!
//! for turn in 1..:
//!   for train in ascending TrainId:
//!     Waiting   → depart onto the route's first station if it is free
//!                 (a direct route takes at most one departure per turn)
//!     Moving    → advance one station if it is free; the destination
//!                 always is, and reaching it finishes the train
//!     Finished  → skipped
//!   no train moved  → DispatchError::Stalled
//!   record "T<k>-<station>" for every train out on the network
//! ```
//!
//! Processing in ascending id lets a leading train vacate its station
//! before the train behind it tries to enter.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`allocation`] | `Allocation`, `allocate`                              |
//! | [`builder`]    | `DispatchBuilder`: route consistency checks           |
//! | [`sim`]        | `Dispatcher` and the turn loop                        |
//! | [`state`]      | `TrainState`, `TrainStatus`                           |
//! | [`schedule`]   | `Movement`, `TurnRecord`, `Schedule`                  |
//! | [`observer`]   | `DispatchObserver`, `NoopObserver`, `TurnLogger`      |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on the schedule types.   |

pub mod allocation;
pub mod builder;
pub mod error;
pub mod observer;
pub mod schedule;
pub mod sim;
pub mod state;

#[cfg(test)]
mod tests;

pub use allocation::{Allocation, allocate};
pub use builder::DispatchBuilder;
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver, TurnLogger};
pub use schedule::{Movement, Schedule, TurnRecord};
pub use sim::Dispatcher;
pub use state::{TrainState, TrainStatus};
