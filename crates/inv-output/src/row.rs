//! Plain data row types written by output backends.
//!
//! Rows carry names rather than ids so the files read on their own.

/// Counts after one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:             u64,
    pub active_aliens:    u64,
    pub remaining_cities: u64,
    /// Aliens that actually changed city this step.
    pub moves:            u64,
    pub collisions:       u64,
}

/// One destroyed city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionRow {
    pub step:   u64,
    pub city:   String,
    pub aliens: Vec<String>,
}

/// One alien still standing at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurvivorRow {
    pub alien: String,
    pub city:  String,
    pub steps: u32,
}
