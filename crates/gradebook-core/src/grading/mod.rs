//! Grading types and operations.
//!
//! This module contains the grading half of the pipeline:
//! - `Grade` - letter grades (A, B, C, D, F)
//! - `GradeMap` - per-student grades in roster entry order
//! - `Distribution` - count of students per letter
//! - `PassFailPartition` - pass/fail split at a cutoff mark

mod grade;
mod map;
mod partition;

pub use grade::*;
pub use map::*;
pub use partition::*;
