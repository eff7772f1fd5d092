//! Overwrite decision for an existing puzzle directory
//!
//! ```text
//! Idle ──no conflict──▶ Proceeding { clear_existing: false }
//!   │
//!   └─conflict─▶ ConflictDetected ──confirmed──▶ Proceeding { clear_existing: true }
//!                        │
//!                        └──declined──▶ Cancelled
//! ```

use crate::error::ScaffoldError;
use crate::puzzle::Puzzle;
use std::path::Path;

/// Where a run stands with respect to existing output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwriteState {
    /// Nothing checked yet
    #[default]
    Idle,
    /// Existing output found, waiting for an answer
    ConflictDetected,
    /// Overwrite declined
    Cancelled,
    /// Go ahead, deleting the output directory first if `clear_existing`
    Proceeding { clear_existing: bool },
}

impl OverwriteState {
    /// Record the result of the existence check. Only meaningful from `Idle`.
    pub fn detect(self, conflict: bool) -> Self {
        match (self, conflict) {
            (OverwriteState::Idle, true) => OverwriteState::ConflictDetected,
            (OverwriteState::Idle, false) => OverwriteState::Proceeding {
                clear_existing: false,
            },
            (state, _) => state,
        }
    }

    /// Record the user's answer. Only meaningful from `ConflictDetected`.
    pub fn resolve(self, confirmed: bool) -> Self {
        match (self, confirmed) {
            (OverwriteState::ConflictDetected, true) => OverwriteState::Proceeding {
                clear_existing: true,
            },
            (OverwriteState::ConflictDetected, false) => OverwriteState::Cancelled,
            (state, _) => state,
        }
    }

    pub fn needs_confirmation(self) -> bool {
        self == OverwriteState::ConflictDetected
    }
}

/// Asked whether an existing puzzle directory may be deleted and recreated
pub trait Confirm {
    /// `path` is the puzzle's output directory
    fn confirm_overwrite(&mut self, puzzle: Puzzle, path: &Path) -> Result<bool, ScaffoldError>;
}

/// A fixed answer, for non-interactive use
impl Confirm for bool {
    fn confirm_overwrite(&mut self, _puzzle: Puzzle, _path: &Path) -> Result<bool, ScaffoldError> {
        Ok(*self)
    }
}

impl<F> Confirm for F
where
    F: FnMut(Puzzle, &Path) -> Result<bool, ScaffoldError>,
{
    fn confirm_overwrite(&mut self, puzzle: Puzzle, path: &Path) -> Result<bool, ScaffoldError> {
        self(puzzle, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_conflict_proceeds_without_clearing() {
        let state = OverwriteState::default().detect(false);
        assert_eq!(state, OverwriteState::Proceeding { clear_existing: false });
        assert!(!state.needs_confirmation());
    }

    #[test]
    fn test_conflict_then_answer() {
        let state = OverwriteState::Idle.detect(true);
        assert!(state.needs_confirmation());
        assert_eq!(state.resolve(false), OverwriteState::Cancelled);
        assert_eq!(
            state.resolve(true),
            OverwriteState::Proceeding { clear_existing: true }
        );
    }

    #[test]
    fn test_out_of_order_transitions_are_ignored() {
        assert_eq!(OverwriteState::Idle.resolve(true), OverwriteState::Idle);
        assert_eq!(OverwriteState::Cancelled.detect(false), OverwriteState::Cancelled);
        assert_eq!(OverwriteState::Cancelled.resolve(true), OverwriteState::Cancelled);
    }

    #[test]
    fn test_closure_and_bool_confirm() {
        let puzzle = Puzzle::new(2024, 1).unwrap();
        let mut asked = Vec::new();
        let mut confirm = |p: Puzzle, path: &Path| {
            asked.push((p, path.to_path_buf()));
            Ok::<_, ScaffoldError>(true)
        };
        assert!(confirm.confirm_overwrite(puzzle, Path::new("./y2024/d01")).unwrap());
        assert_eq!(asked.len(), 1);

        assert!(!false.confirm_overwrite(puzzle, Path::new("x")).unwrap());
    }
}
