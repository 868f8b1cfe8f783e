//! Report rendering: plain fixed-width text blocks.
//!
//! Block layout is part of the contract (column widths, heading order), so
//! everything here is uncolored text; the menu shell decides what, if
//! anything, gets color.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::grading::{Distribution, GradeMap, PassFailPartition};
use crate::roster::Roster;
use crate::stats::Summary;

/// Marks column width.
const MARKS_COL: usize = 5;
/// Grade column width.
const GRADE_COL: usize = 5;
/// Minimum name column width (fits the "Name" header).
const MIN_NAME_COL: usize = 4;

/// Statistics block: mean, median and the holders of the highest and
/// lowest marks.
pub fn format_statistics(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "STATISTICAL SUMMARY");
    let _ = writeln!(out, "-------------------");
    let _ = writeln!(out, "Average (mean) marks : {}", summary.mean);
    let _ = writeln!(out, "Median marks         : {}", summary.median);
    match &summary.highest {
        Some((name, marks)) => {
            let _ = writeln!(out, "Highest marks        : {marks}  (Student: {name})");
        }
        None => {
            let _ = writeln!(out, "Highest marks        : -");
        }
    }
    match &summary.lowest {
        Some((name, marks)) => {
            let _ = writeln!(out, "Lowest marks         : {marks}  (Student: {name})");
        }
        None => {
            let _ = writeln!(out, "Lowest marks         : -");
        }
    }
    out
}

/// Grade distribution block, one line per letter in A..F display order.
pub fn format_distribution(distribution: &Distribution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "GRADE SUMMARY");
    let _ = writeln!(out, "-------------");
    for (grade, count) in distribution.iter() {
        let _ = writeln!(out, "{grade}: {count}");
    }
    out
}

/// Pass/fail block: per-group count and the ordered name list.
pub fn format_pass_fail(partition: &PassFailPartition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PASS / FAIL");
    let _ = writeln!(out, "-----------");
    let _ = writeln!(out, "{}", format_group("Passed", &partition.passed));
    let _ = writeln!(out, "{}", format_group("Failed", &partition.failed));
    out
}

fn format_group(label: &str, names: &[String]) -> String {
    if names.is_empty() {
        format!("{label} (0): -")
    } else {
        format!("{label} ({}): {}", names.len(), names.join(", "))
    }
}

/// Results table: Name left-aligned (width grows with the longest name),
/// Marks right-aligned, Grade centered, one row per roster entry in
/// insertion order.
pub fn format_results_table(roster: &Roster, grades: &GradeMap) -> String {
    let name_col = roster
        .names()
        .map(str::len)
        .max()
        .unwrap_or(MIN_NAME_COL)
        .max(MIN_NAME_COL);

    let mut out = String::new();
    let _ = writeln!(out, "RESULTS TABLE");
    let _ = writeln!(out, "-------------");
    let _ = writeln!(
        out,
        "{:<name_col$}  {:>marks_col$}  {:^grade_col$}",
        "Name",
        "Marks",
        "Grade",
        marks_col = MARKS_COL,
        grade_col = GRADE_COL,
    );
    let _ = writeln!(out, "{}", "-".repeat(name_col + MARKS_COL + GRADE_COL + 4));
    for (name, marks) in roster.iter() {
        let grade = grades.get(name).map(|g| g.letter()).unwrap_or("");
        let _ = writeln!(
            out,
            "{name:<name_col$}  {marks:>marks_col$}  {grade:^grade_col$}",
            marks_col = MARKS_COL,
            grade_col = GRADE_COL,
        );
    }
    out
}

/// Render the four report blocks in their fixed order, separated by blank
/// lines. Only fails on sink IO errors.
pub fn write_report<W: Write>(
    out: &mut W,
    roster: &Roster,
    grades: &GradeMap,
    summary: &Summary,
    distribution: &Distribution,
    partition: &PassFailPartition,
) -> io::Result<()> {
    writeln!(out, "{}", format_statistics(summary))?;
    writeln!(out, "{}", format_distribution(distribution))?;
    writeln!(out, "{}", format_pass_fail(partition))?;
    writeln!(out, "{}", format_results_table(roster, grades))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        for (name, marks) in [
            ("Alice", 78),
            ("Bob", 92),
            ("Carol", 56),
            ("David", 34),
            ("Eve", 88),
        ] {
            roster.insert(name, marks).unwrap();
        }
        roster
    }

    #[test]
    fn test_statistics_block_layout() {
        let summary = Summary::from_roster(&sample_roster());
        assert_eq!(
            format_statistics(&summary),
            "STATISTICAL SUMMARY\n\
             -------------------\n\
             Average (mean) marks : 69.6\n\
             Median marks         : 78\n\
             Highest marks        : 92  (Student: Bob)\n\
             Lowest marks         : 34  (Student: David)\n"
        );
    }

    #[test]
    fn test_statistics_block_empty_roster() {
        let summary = Summary::from_roster(&Roster::new());
        let block = format_statistics(&summary);
        assert!(block.contains("Average (mean) marks : 0"));
        assert!(block.contains("Highest marks        : -"));
        assert!(block.contains("Lowest marks         : -"));
    }

    #[test]
    fn test_distribution_block_lists_all_letters() {
        let grades = GradeMap::from_roster(&sample_roster());
        let distribution = Distribution::from_grades(&grades);
        assert_eq!(
            format_distribution(&distribution),
            "GRADE SUMMARY\n\
             -------------\n\
             A: 1\n\
             B: 1\n\
             C: 1\n\
             D: 0\n\
             F: 2\n"
        );
    }

    #[test]
    fn test_pass_fail_block() {
        let partition = PassFailPartition::from_roster(&sample_roster());
        assert_eq!(
            format_pass_fail(&partition),
            "PASS / FAIL\n\
             -----------\n\
             Passed (4): Alice, Bob, Carol, Eve\n\
             Failed (1): David\n"
        );
    }

    #[test]
    fn test_empty_group_renders_dash() {
        let mut roster = Roster::new();
        roster.insert("Amy", 90).unwrap();
        let partition = PassFailPartition::from_roster(&roster);
        let block = format_pass_fail(&partition);
        assert!(block.contains("Passed (1): Amy"));
        assert!(block.contains("Failed (0): -"));
    }

    #[test]
    fn test_table_minimum_name_width() {
        let mut roster = Roster::new();
        roster.insert("Al", 50).unwrap();
        let grades = GradeMap::from_roster(&roster);

        let table = format_results_table(&roster, &grades);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "RESULTS TABLE");
        assert_eq!(lines[1], "-------------");
        assert_eq!(lines[2], "Name  Marks  Grade");
        assert_eq!(lines[3], "------------------");
        assert_eq!(lines[4], "Al       50    F  ");
    }

    #[test]
    fn test_table_column_widths_follow_longest_name() {
        let mut roster = Roster::new();
        roster.insert("Jo", 100).unwrap();
        roster.insert("Maximiliane", 7).unwrap();
        let grades = GradeMap::from_roster(&roster);

        let table = format_results_table(&roster, &grades);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "Name         Marks  Grade");
        assert_eq!(lines[3], "-".repeat(25));
        assert_eq!(lines[4], "Jo             100    A  ");
        assert_eq!(lines[5], "Maximiliane      7    F  ");
    }
}
