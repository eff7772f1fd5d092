//! Interactive overwrite confirmation

use crate::output::Output;
use aoc_scaffold::{Confirm, Puzzle, ScaffoldError};
use console::Term;
use std::io;
use std::path::Path;
use tracing::debug;

/// Asks on the terminal before an existing puzzle directory is replaced.
///
/// Answers "no" without asking when stderr is not a terminal, so piped or
/// scripted runs never delete anything.
pub struct TerminalConfirm<'a> {
    output: &'a Output,
}

impl<'a> TerminalConfirm<'a> {
    pub fn new(output: &'a Output) -> Self {
        Self { output }
    }
}

impl Confirm for TerminalConfirm<'_> {
    fn confirm_overwrite(&mut self, puzzle: Puzzle, path: &Path) -> Result<bool, ScaffoldError> {
        if !Term::stderr().is_term() {
            debug!("Not a terminal, declining overwrite");
            return Ok(false);
        }

        let answer = dialoguer::Confirm::new()
            .with_prompt(overwrite_prompt(puzzle, &self.output.display_path(path)))
            .default(false)
            .interact_opt();

        match answer {
            // Esc or q leaves the prompt without an answer
            Ok(choice) => Ok(choice.unwrap_or(false)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(false),
            Err(e) => Err(ScaffoldError::io(
                "failed to read confirmation",
                io::Error::other(e.to_string()),
            )),
        }
    }
}

fn overwrite_prompt(puzzle: Puzzle, shown_path: &str) -> String {
    format!(
        "Day {} of {} already exists at {}. Delete and recreate?",
        puzzle.day(),
        puzzle.year(),
        shown_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_prompt() {
        let puzzle = Puzzle::new(2024, 9).unwrap();
        assert_eq!(
            overwrite_prompt(puzzle, "./y2024/d09"),
            "Day 9 of 2024 already exists at ./y2024/d09. Delete and recreate?"
        );
    }
}
