//! Helpers for solving Advent of Code puzzles
//!
//! Nothing here knows about any particular puzzle. The modules cover the
//! chores that come up every December:
//!
//! - [`grid`]: 2D maps, points and compass directions
//! - [`list`]: linked lists, a FIFO queue, a stack and a sorted list
//! - [`set`]: a hash set with union/intersection/difference
//! - [`strings`], [`math`], [`slices`]: small parsing and arithmetic helpers
//! - [`reader`]: turning an input file into lines
//!
//! # Example
//!
//! ```rust
//! use aoc_helpers::grid::{Direction, Grid, Point};
//! use aoc_helpers::strings::extract_ints;
//!
//! let grid: Grid<char> = "..#\n#..".parse().unwrap();
//! let start = grid.find(|_, c| *c == '#').unwrap();
//! assert_eq!(start, Point::new(2, 0));
//! assert_eq!(grid.get(Direction::South.step(start)), Some(&'.'));
//!
//! assert_eq!(extract_ints("x=-3, y=12"), vec![-3, 12]);
//! ```

pub mod grid;
pub mod list;
pub mod math;
pub mod reader;
pub mod set;
pub mod slices;
pub mod strings;
