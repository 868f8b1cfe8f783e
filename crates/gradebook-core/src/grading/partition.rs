use crate::roster::Roster;

/// Default pass mark.
pub const PASS_CUTOFF: u8 = 40;

/// Names partitioned into pass and fail groups, each in roster insertion
/// order. Together the groups cover the whole roster with no overlap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassFailPartition {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
}

impl PassFailPartition {
    /// Partition at the default cutoff ([`PASS_CUTOFF`]).
    pub fn from_roster(roster: &Roster) -> Self {
        Self::with_cutoff(roster, PASS_CUTOFF)
    }

    /// Marks >= `cutoff` pass, everything below fails.
    pub fn with_cutoff(roster: &Roster, cutoff: u8) -> Self {
        let mut partition = Self::default();
        for (name, marks) in roster.iter() {
            if marks >= cutoff {
                partition.passed.push(name.to_string());
            } else {
                partition.failed.push(name.to_string());
            }
        }
        partition
    }
}
