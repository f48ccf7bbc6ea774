//! Core roster storage: `AlienStore`.

use std::collections::HashMap;

use inv_core::{AlienId, CityId};

/// Structure-of-Arrays storage for every alien of a run.
///
/// Every `Vec` has exactly `count` elements and the `AlienId` value is the
/// index into all of them.  Destroyed aliens keep their slot (and name) but
/// drop out of [`active_ids`](Self::active_ids); their city becomes
/// `CityId::INVALID` and their step count is discarded.
#[derive(Clone, Debug)]
pub struct AlienStore {
    /// Number of aliens, active or not.  Equals the length of every `Vec`.
    pub count: usize,

    names:        Vec<String>,
    ids:          HashMap<String, AlienId>,
    city:         Vec<CityId>,
    steps:        Vec<u32>,
    active:       Vec<bool>,
    active_count: usize,
}

impl AlienStore {
    /// `true` if the roster was built with no aliens at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AlienId`s in ascending index order.
    pub fn alien_ids(&self) -> impl Iterator<Item = AlienId> + '_ {
        (0..self.count as u32).map(AlienId)
    }

    /// Iterator over the aliens still in play, ascending.
    pub fn active_ids(&self) -> impl Iterator<Item = AlienId> + '_ {
        self.alien_ids().filter(|&a| self.active[a.index()])
    }

    /// Number of aliens still in play.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    #[inline]
    pub fn is_active(&self, alien: AlienId) -> bool {
        self.active.get(alien.index()).copied().unwrap_or(false)
    }

    // ── Per-alien state ───────────────────────────────────────────────────

    pub fn name(&self, alien: AlienId) -> &str {
        &self.names[alien.index()]
    }

    pub fn id(&self, name: &str) -> Option<AlienId> {
        self.ids.get(name).copied()
    }

    /// Current city of an active alien; `None` once it has been destroyed.
    #[inline]
    pub fn city(&self, alien: AlienId) -> Option<CityId> {
        self.is_active(alien).then(|| self.city[alien.index()])
    }

    /// Steps taken so far, counting the initial placement as the first.
    /// Zero for a destroyed alien.
    #[inline]
    pub fn steps(&self, alien: AlienId) -> u32 {
        self.steps[alien.index()]
    }

    // ── Mutation (engine only) ────────────────────────────────────────────

    /// Put `alien` at its starting city.  Placement counts as step 1.
    pub fn place(&mut self, alien: AlienId, city: CityId) {
        let i = alien.index();
        self.city[i] = city;
        self.steps[i] = 1;
    }

    /// Relocate an active alien without touching its step count.
    #[inline]
    pub fn move_to(&mut self, alien: AlienId, city: CityId) {
        debug_assert!(self.is_active(alien));
        self.city[alien.index()] = city;
    }

    /// Count one more step for `alien`.
    #[inline]
    pub fn record_step(&mut self, alien: AlienId) {
        self.steps[alien.index()] += 1;
    }

    /// Take `alien` out of play.  Returns `false` if it already was.
    pub fn remove(&mut self, alien: AlienId) -> bool {
        if !self.is_active(alien) {
            return false;
        }
        let i = alien.index();
        self.active[i] = false;
        self.city[i] = CityId::INVALID;
        self.steps[i] = 0;
        self.active_count -= 1;
        true
    }

    // ── Package-private constructor used by AlienStoreBuilder ─────────────

    pub(crate) fn new(names: Vec<String>, ids: HashMap<String, AlienId>) -> Self {
        let count = names.len();
        Self {
            count,
            names,
            ids,
            city:         vec![CityId::INVALID; count],
            steps:        vec![0; count],
            active:       vec![true; count],
            active_count: count,
        }
    }
}
