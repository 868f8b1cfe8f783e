//! Summary statistics over a roster.

use crate::roster::Roster;

/// Mean marks rounded to 2 decimal places, 0.0 for an empty roster.
pub fn mean(roster: &Roster) -> f64 {
    if roster.is_empty() {
        return 0.0;
    }
    let sum: u32 = roster.marks().map(u32::from).sum();
    let avg = f64::from(sum) / roster.len() as f64;
    (avg * 100.0).round() / 100.0
}

/// Median marks, 0.0 for an empty roster.
///
/// Even-sized rosters take the average of the two middle values.
pub fn median(roster: &Roster) -> f64 {
    if roster.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<u8> = roster.marks().collect();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        f64::from(sorted[mid])
    } else {
        f64::from(u16::from(sorted[mid - 1]) + u16::from(sorted[mid])) / 2.0
    }
}

/// Student with the highest marks; ties go to the student entered first.
pub fn max_entry(roster: &Roster) -> Option<(&str, u8)> {
    roster
        .iter()
        .reduce(|best, entry| if entry.1 > best.1 { entry } else { best })
}

/// Student with the lowest marks; ties go to the student entered first.
pub fn min_entry(roster: &Roster) -> Option<(&str, u8)> {
    roster
        .iter()
        .reduce(|best, entry| if entry.1 < best.1 { entry } else { best })
}

/// Aggregate of the statistics block for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub highest: Option<(String, u8)>,
    pub lowest: Option<(String, u8)>,
}

impl Summary {
    pub fn from_roster(roster: &Roster) -> Self {
        Self {
            mean: mean(roster),
            median: median(roster),
            highest: max_entry(roster).map(|(name, marks)| (name.to_string(), marks)),
            lowest: min_entry(roster).map(|(name, marks)| (name.to_string(), marks)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(marks: &[(&str, u8)]) -> Roster {
        let mut roster = Roster::new();
        for &(name, m) in marks {
            roster.insert(name, m).unwrap();
        }
        roster
    }

    #[test]
    fn test_mean_rounds_to_two_decimals() {
        let roster = roster_with(&[("Amy", 33), ("Ben", 33), ("Cleo", 34)]);
        assert_eq!(mean(&roster), 33.33);

        let roster = roster_with(&[("Amy", 1), ("Ben", 2)]);
        assert_eq!(mean(&roster), 1.5);
    }

    #[test]
    fn test_median_odd_and_even() {
        let odd = roster_with(&[("A", 78), ("B", 92), ("C", 56), ("D", 34), ("E", 88)]);
        assert_eq!(median(&odd), 78.0);

        let even = roster_with(&[("A", 71), ("B", 72)]);
        assert_eq!(median(&even), 71.5);

        let even = roster_with(&[("A", 100), ("B", 70), ("C", 90), ("D", 80)]);
        assert_eq!(median(&even), 85.0);
    }

    #[test]
    fn test_empty_roster_is_fail_safe() {
        let roster = Roster::new();
        assert_eq!(mean(&roster), 0.0);
        assert_eq!(median(&roster), 0.0);
        assert_eq!(max_entry(&roster), None);
        assert_eq!(min_entry(&roster), None);
    }

    #[test]
    fn test_max_min_ties_resolve_to_first_inserted() {
        let roster = roster_with(&[("Amy", 90), ("Ben", 90), ("Cleo", 10), ("Dan", 10)]);
        assert_eq!(max_entry(&roster), Some(("Amy", 90)));
        assert_eq!(min_entry(&roster), Some(("Cleo", 10)));
    }

    #[test]
    fn test_summary_aggregates_all_statistics() {
        let roster = roster_with(&[("Amy", 40), ("Ben", 60)]);
        let summary = Summary::from_roster(&roster);

        assert_eq!(summary.mean, 50.0);
        assert_eq!(summary.median, 50.0);
        assert_eq!(summary.highest, Some(("Ben".to_string(), 60)));
        assert_eq!(summary.lowest, Some(("Amy".to_string(), 40)));
    }
}
