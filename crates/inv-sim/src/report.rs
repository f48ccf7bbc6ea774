//! Structured records produced by the step loop.
//!
//! The engine never formats or logs anything itself; observers render these
//! records.

use std::fmt;

use inv_core::{AlienId, CityId, Direction, Step};

/// One alien's movement decision for a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub alien:     AlienId,
    pub from:      CityId,
    pub to:        CityId,
    /// Route taken; `None` when the alien was at a dead end and stayed.
    pub direction: Option<Direction>,
}

impl Move {
    #[inline]
    pub fn moved(&self) -> bool {
        self.direction.is_some()
    }
}

/// A city destroyed because two or more aliens ended a step in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collision {
    pub city:   CityId,
    /// The aliens destroyed with the city, ascending.
    pub aliens: Vec<AlienId>,
}

/// Everything that happened in one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub step:       Step,
    /// Ascending `AlienId` order.  Empty for the placement step.
    pub moves:      Vec<Move>,
    /// Ascending `CityId` order.
    pub collisions: Vec<Collision>,
}

impl StepReport {
    /// Number of aliens destroyed this step.
    pub fn aliens_destroyed(&self) -> usize {
        self.collisions.iter().map(|c| c.aliens.len()).sum()
    }
}

/// Why the run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Every alien has been destroyed.
    NoAliens,
    /// Every city has been destroyed.
    NoCities,
    /// Every remaining alien has reached the step threshold.
    StepsExhausted,
}

impl Termination {
    pub fn as_str(self) -> &'static str {
        match self {
            Termination::NoAliens       => "no aliens left",
            Termination::NoCities       => "no cities left",
            Termination::StepsExhausted => "all aliens exhausted their steps",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a finished run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub termination:      Termination,
    /// The last step executed.
    pub final_step:       Step,
    pub cities_destroyed: usize,
    pub aliens_destroyed: usize,
}
