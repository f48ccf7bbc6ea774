//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `step_summaries.csv`
//! - `collisions.csv` (colliding aliens joined with `;`)
//! - `survivors.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CollisionRow, OutputResult, StepSummaryRow, SurvivorRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries:  Writer<File>,
    collisions: Writer<File>,
    survivors:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["step", "active_aliens", "remaining_cities", "moves", "collisions"])?;

        let mut collisions = Writer::from_path(dir.join("collisions.csv"))?;
        collisions.write_record(["step", "city", "aliens"])?;

        let mut survivors = Writer::from_path(dir.join("survivors.csv"))?;
        survivors.write_record(["alien", "city", "steps"])?;

        Ok(Self {
            summaries,
            collisions,
            survivors,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.active_aliens.to_string(),
            row.remaining_cities.to_string(),
            row.moves.to_string(),
            row.collisions.to_string(),
        ])?;
        Ok(())
    }

    fn write_collisions(&mut self, rows: &[CollisionRow]) -> OutputResult<()> {
        for row in rows {
            self.collisions.write_record(&[
                row.step.to_string(),
                row.city.clone(),
                row.aliens.join(";"),
            ])?;
        }
        Ok(())
    }

    fn write_survivors(&mut self, rows: &[SurvivorRow]) -> OutputResult<()> {
        for row in rows {
            self.survivors.write_record(&[
                row.alien.clone(),
                row.city.clone(),
                row.steps.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.collisions.flush()?;
        self.survivors.flush()?;
        Ok(())
    }
}
