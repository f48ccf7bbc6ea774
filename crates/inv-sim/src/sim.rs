//! The `Invasion` struct and its step loop.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

use inv_alien::AlienStore;
use inv_core::{AlienId, CityId, InvasionConfig, SimRng, Step};
use inv_map::CityMap;

use crate::{Collision, InvasionObserver, Move, Outcome, StepReport, Termination};

#[cfg(not(feature = "fx-hash"))]
type OccupancyIndex = HashMap<CityId, Vec<AlienId>>;
#[cfg(feature = "fx-hash")]
type OccupancyIndex = rustc_hash::FxHashMap<CityId, Vec<AlienId>>;

// ── Invasion ──────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns the whole simulation state (map, roster, RNG) for the run; nothing
/// else mutates it between steps.  Create via
/// [`InvasionBuilder`][crate::InvasionBuilder].
pub struct Invasion {
    /// Step threshold and seed.
    pub config: InvasionConfig,

    /// The step most recently executed (or about to be, before the first
    /// call to [`step`](Self::step)).
    pub step: Step,

    /// The surviving cities and routes.
    pub map: CityMap,

    /// The roster: positions, step counts, and who is still in play.
    pub aliens: AlienStore,

    rng:              SimRng,
    placed:           bool,
    cities_destroyed: usize,
}

impl Invasion {
    pub(crate) fn new(
        config: InvasionConfig,
        step:   Step,
        map:    CityMap,
        aliens: AlienStore,
        rng:    SimRng,
    ) -> Self {
        Self {
            config,
            step,
            map,
            aliens,
            rng,
            placed:           false,
            cities_destroyed: 0,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the termination predicate holds.
    ///
    /// Calls observer hooks at start, after every step, and at the end.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: InvasionObserver>(&mut self, observer: &mut O) -> Outcome {
        observer.on_start(&self.map, &self.aliens);
        let termination = loop {
            let report = self.step();
            observer.on_step_end(&report, &self.map, &self.aliens);
            if let Some(t) = self.termination() {
                break t;
            }
        };

        let outcome = Outcome {
            termination,
            final_step:       self.step,
            cities_destroyed: self.cities_destroyed,
            aliens_destroyed: self.aliens.count - self.aliens.active_count(),
        };
        observer.on_end(&outcome, &self.map, &self.aliens);
        outcome
    }

    /// Run exactly `n` steps, ignoring the termination predicate.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: InvasionObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let report = self.step();
            observer.on_step_end(&report, &self.map, &self.aliens);
        }
    }

    /// Execute one step and report what happened.
    ///
    /// The first call is the placement step: no movement, only the collision
    /// check on the starting cities.
    pub fn step(&mut self) -> StepReport {
        let moves = if self.placed {
            self.step.advance();
            let moves = plan_moves(&self.map, &self.aliens, &mut self.rng);
            apply_moves(&mut self.aliens, &moves);
            moves
        } else {
            self.placed = true;
            Vec::new()
        };

        let collisions = resolve_collisions(&mut self.map, &mut self.aliens);
        self.cities_destroyed += collisions.len();

        StepReport { step: self.step, moves, collisions }
    }

    /// Why the run should stop now, or `None` to keep going.
    ///
    /// The step threshold is a whole-roster condition: one alien below the
    /// threshold keeps every alien moving.
    pub fn termination(&self) -> Option<Termination> {
        if self.aliens.active_count() == 0 {
            Some(Termination::NoAliens)
        } else if self.map.is_empty() {
            Some(Termination::NoCities)
        } else if self
            .aliens
            .active_ids()
            .all(|a| self.config.is_exhausted(self.aliens.steps(a)))
        {
            Some(Termination::StepsExhausted)
        } else {
            None
        }
    }
}

// ── Step phases ───────────────────────────────────────────────────────────────

/// Decide every active alien's move from its current city.
///
/// RNG draws happen in ascending `AlienId` order, one per alien that has at
/// least one route; aliens at a dead end draw nothing.
pub(crate) fn plan_moves(map: &CityMap, aliens: &AlienStore, rng: &mut SimRng) -> Vec<Move> {
    let mut moves = Vec::with_capacity(aliens.active_count());
    let mut options = Vec::with_capacity(4);

    for alien in aliens.active_ids() {
        let from = aliens.city(alien).unwrap_or(CityId::INVALID);
        options.clear();
        options.extend(map.routes_from(from).iter());

        let mv = match rng.choose(&options) {
            Some(&(direction, to)) => Move { alien, from, to, direction: Some(direction) },
            None => Move { alien, from, to: from, direction: None },
        };
        moves.push(mv);
    }
    moves
}

/// Move each alien and count its step.  Each move touches only its own
/// alien, so the order of `moves` does not matter.
pub(crate) fn apply_moves(aliens: &mut AlienStore, moves: &[Move]) {
    for mv in moves {
        aliens.move_to(mv.alien, mv.to);
        aliens.record_step(mv.alien);
    }
}

/// Destroy every city holding two or more aliens, along with those aliens.
pub(crate) fn resolve_collisions(map: &mut CityMap, aliens: &mut AlienStore) -> Vec<Collision> {
    let mut collisions: Vec<Collision> = build_occupancy_index(aliens)
        .into_iter()
        .filter(|(_, occupants)| occupants.len() >= 2)
        .map(|(city, occupants)| Collision { city, aliens: occupants })
        .collect();
    collisions.sort_unstable_by_key(|c| c.city);

    for collision in &collisions {
        map.remove_city(collision.city);
        for &alien in &collision.aliens {
            aliens.remove(alien);
        }
    }
    collisions
}

/// Build a `CityId → Vec<AlienId>` index of all active aliens.
///
/// Occupant lists are ascending because `active_ids` is.
fn build_occupancy_index(aliens: &AlienStore) -> OccupancyIndex {
    let mut index = OccupancyIndex::default();
    for alien in aliens.active_ids() {
        if let Some(city) = aliens.city(alien) {
            index.entry(city).or_default().push(alien);
        }
    }
    index
}
