//! Stem frequency reports for pre-stemmed text documents.
//!
//! Each input document is read once, its whitespace-separated stems are
//! counted, and a CSV report named `<input minus extension>_Output.csv` is
//! written next to it.

mod counter;
mod error;
mod frequency_reporter;
pub mod report;
pub mod util;

pub use counter::{FrequencyTable, StemCounter, StemStats};
pub use error::{Error, Result};
pub use frequency_reporter::{process_file, FrequencyReporter, ProcessedFile};
pub use report::{rank, write_report, RankedEntry, ReportOptions};
