//! `inv-output` — reporting for the alien invasion simulator.
//!
//! Two observers render what the engine reports:
//!
//! | Observer              | Sink                                              |
//! |-----------------------|---------------------------------------------------|
//! | [`LogObserver`]       | `tracing` events (initial map, collisions, end)   |
//! | [`ReportObserver<W>`] | any [`OutputWriter`]; [`CsvWriter`] ships here     |
//!
//! `CsvWriter` creates `step_summaries.csv`, `collisions.csv` and
//! `survivors.csv` in its output directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use inv_output::{CsvWriter, LogObserver, ReportObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = (LogObserver::new(), ReportObserver::new(writer));
//! invasion.run(&mut obs);
//! if let Some(e) = obs.1.take_error() {
//!     tracing::error!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod log;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use log::LogObserver;
pub use observer::ReportObserver;
pub use row::{CollisionRow, StepSummaryRow, SurvivorRow};
pub use writer::OutputWriter;
