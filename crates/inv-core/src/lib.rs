//! `inv-core` — foundational types for the alien invasion simulator.
//!
//! This crate is a dependency of every other `inv-*` crate.  It has no
//! `inv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AlienId`, `CityId`                                   |
//! | [`direction`]   | `Direction` (north / south / east / west)             |
//! | [`step`]        | `Step`, `InvasionConfig`                              |
//! | [`rng`]         | `SimRng` (the single random stream of a run)          |
//! | [`error`]       | `InvError`, `InvResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod direction;
pub mod error;
pub mod ids;
pub mod rng;
pub mod step;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{InvError, InvResult};
pub use ids::{AlienId, CityId};
pub use rng::SimRng;
pub use step::{DEFAULT_MAX_STEPS, InvasionConfig, Step};
