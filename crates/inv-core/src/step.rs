//! Simulation step counter and run configuration.
//!
//! # Step numbering
//!
//! Placing the aliens on the map is step 1: every alien starts with a step
//! count of 1 and the placement is followed by a collision check, exactly
//! like any later step.  Each movement step then advances both the global
//! [`Step`] and every active alien's own count by one, so after `n`
//! movement steps the clock reads `Step(n + 1)`.

use std::fmt;

/// Step count at which an alien is considered to have exhausted its moves.
pub const DEFAULT_MAX_STEPS: u32 = 10_000;

// ── Step ──────────────────────────────────────────────────────────────────────

/// The global simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    /// The step in which the initial placement happens.
    pub const PLACEMENT: Step = Step(1);

    /// Return the step `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Step {
        Step(self.0 + n)
    }

    /// Advance by one step in place.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl std::ops::Add<u64> for Step {
    type Output = Step;
    #[inline]
    fn add(self, rhs: u64) -> Step {
        Step(self.0 + rhs)
    }
}

impl std::ops::Sub for Step {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Step) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── InvasionConfig ────────────────────────────────────────────────────────────

/// Run configuration handed to the engine.
///
/// Input paths and the alien count belong to the application; the engine
/// only needs the step threshold and the seed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvasionConfig {
    /// An alien whose step count reaches this value has exhausted its moves.
    /// The run stops once every active alien has.
    pub max_steps: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl InvasionConfig {
    pub fn new(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }

    /// `true` if an alien with `steps` steps taken has exhausted its moves.
    #[inline]
    pub fn is_exhausted(&self, steps: u32) -> bool {
        steps >= self.max_steps
    }
}

impl Default for InvasionConfig {
    fn default() -> Self {
        Self { max_steps: DEFAULT_MAX_STEPS, seed: 0 }
    }
}
