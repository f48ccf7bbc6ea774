//! `inv-sim` — the alien invasion step loop.
//!
//! # One step
//!
//! ```text
//! step 1 (placement):  aliens already placed by the builder;
//!                      ③ only.
//! every later step:
//!   ① Plan     — each active alien picks a uniformly random route out of
//!                its current city (stays put at a dead end).  Decisions
//!                read only the alien's own previous position.
//!   ② Apply    — move every alien and count one step for each.
//!   ③ Collide  — every city holding two or more aliens is destroyed
//!                together with those aliens.
//!   ④ Check    — stop if no aliens remain, no cities remain, or every
//!                remaining alien has exhausted its steps.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the occupancy index.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use inv_alien::AlienStoreBuilder;
//! use inv_core::InvasionConfig;
//! use inv_sim::{InvasionBuilder, NoopObserver};
//!
//! let aliens = AlienStoreBuilder::new(names).limit(5).build()?;
//! let mut invasion = InvasionBuilder::new(InvasionConfig::new(42), map, aliens).build()?;
//! let outcome = invasion.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::InvasionBuilder;
pub use error::{SimError, SimResult};
pub use observer::{InvasionObserver, NoopObserver};
pub use report::{Collision, Move, Outcome, StepReport, Termination};
pub use sim::Invasion;
