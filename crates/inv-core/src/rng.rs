//! Deterministic simulation RNG.
//!
//! A run owns exactly one `SimRng`, seeded from [`InvasionConfig::seed`].
//! Every random decision (initial placement, then one direction choice per
//! movable alien per step) is drawn from it sequentially in ascending
//! `AlienId` order, so a fixed seed replays a run exactly.
//!
//! [`InvasionConfig::seed`]: crate::InvasionConfig::seed

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Single-threaded by construction: there is no parallel consumption of the
/// stream, which is what keeps collision outcomes reproducible.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a `Standard`-distributed value.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
