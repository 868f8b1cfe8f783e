//! Menu-driven shell around the analysis pipeline.

use std::io::{BufRead, Write};

use anyhow::Result;
use gradebook_core::{
    Distribution, GradeMap, PassFailPartition, Roster, RosterBuilder, Summary, write_report,
};
use owo_colors::OwoColorize;
use tracing::debug;

const WELCOME: &str = "\
Welcome to GradeBook Analyzer
-----------------------------
A simple tool to analyze and report student marks.
Please follow the on-screen prompts to enter data and view results.
";

const GOODBYE: &str = "Exiting GradeBook Analyzer. Goodbye!";

/// Shell states; the run loop dispatches on these until `Exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuState {
    MainMenu,
    Running,
    DemoRun,
    Exit,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    min_students: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, min_students: usize) -> Self {
        Self {
            input,
            output,
            min_students,
        }
    }

    /// Run the menu loop until the user chooses to exit.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", WELCOME.bold())?;

        let mut state = MenuState::MainMenu;
        loop {
            state = match state {
                MenuState::MainMenu => self.main_menu()?,
                MenuState::Running => {
                    self.run_analysis()?;
                    self.prompt_continue()?
                }
                MenuState::DemoRun => {
                    self.run_demo()?;
                    self.prompt_continue()?
                }
                MenuState::Exit => {
                    writeln!(self.output, "{GOODBYE}")?;
                    return Ok(());
                }
            };
        }
    }

    fn main_menu(&mut self) -> Result<MenuState> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Enter student data and run analysis")?;
        writeln!(self.output, "2. Example run (pre-filled sample data)")?;
        writeln!(self.output, "3. Exit")?;

        let Some(choice) = self.prompt("Choose an option (1/2/3): ")? else {
            return Ok(MenuState::Exit);
        };
        match choice.as_str() {
            "1" => Ok(MenuState::Running),
            "2" => Ok(MenuState::DemoRun),
            "3" => Ok(MenuState::Exit),
            _ => {
                writeln!(self.output, "{}", "Invalid choice. Enter 1, 2 or 3.".yellow())?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    /// Full pipeline: collect a roster, then analyze and report it.
    fn run_analysis(&mut self) -> Result<()> {
        let roster = {
            let mut builder = RosterBuilder::new(&mut self.input, &mut self.output);
            builder.collect_roster(self.min_students)?
        };
        self.report(&roster)?;
        writeln!(
            self.output,
            "Analysis complete. You may choose to run again or exit from the menu.\n"
        )?;
        Ok(())
    }

    /// Report pipeline over the fixed demonstration dataset.
    fn run_demo(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nRunning example with 5 sample students (Alice, Bob, Carol, David, Eve)\n"
        )?;
        let roster = demo_roster()?;
        self.report(&roster)
    }

    fn report(&mut self, roster: &Roster) -> Result<()> {
        let grades = GradeMap::from_roster(roster);
        let summary = Summary::from_roster(roster);
        let distribution = Distribution::from_grades(&grades);
        let partition = PassFailPartition::from_roster(roster);
        write_report(
            &mut self.output,
            roster,
            &grades,
            &summary,
            &distribution,
            &partition,
        )?;
        debug!(students = roster.len(), "analysis rendered");
        Ok(())
    }

    fn prompt_continue(&mut self) -> Result<MenuState> {
        let Some(answer) = self.prompt("Return to menu? (y/n): ")? else {
            return Ok(MenuState::Exit);
        };
        match answer.to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => Ok(MenuState::MainMenu),
            _ => Ok(MenuState::Exit),
        }
    }

    /// Print a prompt and read one trimmed line; `None` once the input
    /// stream is exhausted, so piped sessions end cleanly.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// The fixed demonstration dataset.
fn demo_roster() -> Result<Roster> {
    let mut roster = Roster::new();
    for (name, marks) in [
        ("Alice", 78),
        ("Bob", 92),
        ("Carol", 56),
        ("David", 34),
        ("Eve", 88),
    ] {
        roster.insert(name, marks)?;
    }
    Ok(roster)
}
