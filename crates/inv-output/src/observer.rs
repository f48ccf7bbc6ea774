//! `ReportObserver<W>` — bridges `InvasionObserver` to an `OutputWriter`.

use inv_alien::AlienStore;
use inv_map::CityMap;
use inv_sim::{InvasionObserver, Outcome, StepReport};

use crate::row::{CollisionRow, StepSummaryRow, SurvivorRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`InvasionObserver`] that writes step summaries, collisions and the
/// final survivors to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `invasion.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct ReportObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> InvasionObserver for ReportObserver<W> {
    fn on_step_end(&mut self, report: &StepReport, map: &CityMap, aliens: &AlienStore) {
        let summary = StepSummaryRow {
            step:             report.step.0,
            active_aliens:    aliens.active_count() as u64,
            remaining_cities: map.city_count() as u64,
            moves:            report.moves.iter().filter(|m| m.moved()).count() as u64,
            collisions:       report.collisions.len() as u64,
        };
        let result = self.writer.write_step_summary(&summary);
        self.store_err(result);

        if report.collisions.is_empty() {
            return;
        }
        let rows: Vec<CollisionRow> = report
            .collisions
            .iter()
            .map(|c| CollisionRow {
                step:   report.step.0,
                city:   map.name(c.city).unwrap_or_default().to_owned(),
                aliens: c.aliens.iter().map(|&a| aliens.name(a).to_owned()).collect(),
            })
            .collect();
        let result = self.writer.write_collisions(&rows);
        self.store_err(result);
    }

    fn on_end(&mut self, _outcome: &Outcome, map: &CityMap, aliens: &AlienStore) {
        let rows: Vec<SurvivorRow> = aliens
            .active_ids()
            .map(|a| SurvivorRow {
                alien: aliens.name(a).to_owned(),
                city:  aliens
                    .city(a)
                    .and_then(|c| map.name(c))
                    .unwrap_or_default()
                    .to_owned(),
                steps: aliens.steps(a),
            })
            .collect();
        let result = self.writer.write_survivors(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
