//! Interactive roster entry with validation loops.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::{Error, Result};
use crate::roster::{MAX_MARKS, Roster};

/// Collects a validated roster from an input/output stream pair.
///
/// Invalid input never surfaces as an error: every prompt re-asks until it
/// gets an acceptable line. The only failure mode is the input stream
/// itself failing or closing mid-entry.
pub struct RosterBuilder<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> RosterBuilder<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask how many students, then collect a name and marks for each.
    ///
    /// Enforces at least `minimum` students. On success the roster holds
    /// exactly the requested number of entries, every name unique and
    /// non-empty, every marks value in 0..=100.
    pub fn collect_roster(&mut self, minimum: usize) -> Result<Roster> {
        let count = self.prompt_count(minimum)?;

        let mut roster = Roster::new();
        for i in 1..=count {
            let name = self.prompt_name(&roster, i)?;
            let marks = self.prompt_marks(&name)?;
            roster.insert(name, marks)?;
        }

        writeln!(self.output, "\nData entry complete.\n")?;
        debug!(students = roster.len(), "roster collected");
        Ok(roster)
    }

    fn prompt_count(&mut self, minimum: usize) -> Result<usize> {
        loop {
            let line = self.prompt(&format!(
                "How many students are in the class? (minimum {minimum}): "
            ))?;
            let value: i64 = match line.parse() {
                Ok(v) => v,
                Err(_) => {
                    writeln!(self.output, "That's not a valid integer. Try again.")?;
                    continue;
                }
            };
            if value < 1 {
                writeln!(self.output, "Please enter an integer greater than 0.")?;
                continue;
            }
            if (value as usize) < minimum {
                writeln!(
                    self.output,
                    "At least {minimum} students are required. Please enter {minimum} or more."
                )?;
                continue;
            }
            return Ok(value as usize);
        }
    }

    fn prompt_name(&mut self, roster: &Roster, index: usize) -> Result<String> {
        loop {
            let name = self.prompt(&format!("Enter name of student #{index}: "))?;
            if name.is_empty() {
                writeln!(self.output, "Name cannot be empty. Try again.")?;
                continue;
            }
            if roster.contains(&name) {
                writeln!(
                    self.output,
                    "This name was already entered. Add a unique identifier or use last name too."
                )?;
                continue;
            }
            return Ok(name);
        }
    }

    fn prompt_marks(&mut self, name: &str) -> Result<u8> {
        loop {
            let line = self.prompt(&format!("Enter marks for {name} (0 - 100): "))?;
            let value: f64 = match line.parse() {
                Ok(v) => v,
                Err(_) => {
                    writeln!(
                        self.output,
                        "Invalid number. Enter numeric marks (e.g. 78 or 78.5)."
                    )?;
                    continue;
                }
            };
            if !(0.0..=f64::from(MAX_MARKS)).contains(&value) {
                writeln!(self.output, "Marks must be between 0 and 100.")?;
                continue;
            }
            // Fractional marks round half away from zero (78.5 -> 79).
            return Ok(value.round() as u8);
        }
    }

    /// Print a prompt without a trailing newline and read one trimmed line.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "input stream closed during data entry",
            )));
        }
        Ok(line.trim().to_string())
    }
}
