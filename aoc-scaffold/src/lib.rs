//! Scaffolding for Advent of Code puzzles
//!
//! Given a year, a day and a working directory, [`Generator`] lays out
//!
//! ```text
//! <work_dir>/y<YYYY>/d<DD>/
//! ├── mod.rs              solution skeleton
//! ├── tests.rs            test skeleton
//! └── testdata/input.txt  puzzle input (only with a session cookie)
//! ```
//!
//! The generator never overwrites silently: when any of the output exists it
//! asks a [`Confirm`] collaborator first. Progress is pushed to a
//! [`Reporter`], which keeps the crate free of terminal concerns.
//!
//! # Example
//!
//! ```no_run
//! use aoc_scaffold::{Generator, ScaffoldConfig, ScaffoldEvent};
//!
//! # fn main() -> Result<(), aoc_scaffold::ScaffoldError> {
//! let config = ScaffoldConfig::new(2024, 1, "./solutions");
//! let generator = Generator::new(config)?;
//!
//! // Decline any overwrite, print every event
//! generator.run(&mut false, &mut |event: ScaffoldEvent| println!("{event:?}"))?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod generator;
mod overwrite;
mod puzzle;
mod report;
mod templates;

pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use generator::{Generator, INPUT_DIR, INPUT_FILE, SOLUTION_FILE, TESTS_FILE};
pub use overwrite::{Confirm, OverwriteState};
pub use puzzle::Puzzle;
pub use report::{Reporter, ScaffoldEvent};
pub use templates::{Renderer, TemplateData};
