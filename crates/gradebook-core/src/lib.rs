//! GradeBook core: roster collection, summary statistics, grading and
//! report formatting for the `gradebook` console tool.
//!
//! Console interaction is abstracted over `BufRead`/`Write` pairs so every
//! operation can be driven from tests without a terminal. The data flows
//! one way: a [`Roster`] is built once per analysis run, then the
//! statistics, grading and report stages read it without mutating it.

pub mod collect;
pub mod error;
pub mod grading;
pub mod report;
pub mod roster;
pub mod stats;

pub use collect::RosterBuilder;
pub use error::{Error, Result};
pub use grading::{Distribution, Grade, GradeMap, PASS_CUTOFF, PassFailPartition};
pub use report::{
    format_distribution, format_pass_fail, format_results_table, format_statistics, write_report,
};
pub use roster::{MAX_MARKS, Roster};
pub use stats::{Summary, max_entry, mean, median, min_entry};
