//! The `OutputWriter` trait implemented by backend writers.

use crate::{CollisionRow, OutputResult, StepSummaryRow, SurvivorRow};

/// Trait implemented by output backends.
///
/// Observer hooks cannot fail, so [`ReportObserver`] keeps the first error
/// a backend returns until [`ReportObserver::take_error`] collects it.
///
/// [`ReportObserver`]: crate::ReportObserver
/// [`ReportObserver::take_error`]: crate::ReportObserver::take_error
pub trait OutputWriter {
    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Write the cities destroyed in one step.
    fn write_collisions(&mut self, rows: &[CollisionRow]) -> OutputResult<()>;

    /// Write the final roster of surviving aliens.
    fn write_survivors(&mut self, rows: &[SurvivorRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
