use std::collections::HashMap;

use crate::error::{Error, Result};

/// Maximum marks a student can be awarded.
pub const MAX_MARKS: u8 = 100;

/// Insertion-ordered mapping from student name to marks.
///
/// Entry order determines display order and the tie-break for max/min
/// lookups, so entries live in a vector with a side index for uniqueness
/// checks and name lookup.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<(String, u8)>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student at the end of the roster.
    ///
    /// Rejects empty or whitespace-only names, duplicate names
    /// (case-sensitive exact match) and marks above [`MAX_MARKS`]. A
    /// rejected insert leaves the roster unchanged.
    pub fn insert(&mut self, name: impl Into<String>, marks: u8) -> Result<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        if marks > MAX_MARKS {
            return Err(Error::MarksOutOfRange(marks));
        }
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateName(name));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, marks));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries
            .iter()
            .map(|(name, marks)| (name.as_str(), *marks))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn marks(&self) -> impl Iterator<Item = u8> {
        self.entries.iter().map(|(_, marks)| *marks)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
