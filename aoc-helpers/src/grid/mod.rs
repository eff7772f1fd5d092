//! Rectangular 2D grids addressed by [`Point`].
//!
//! Puzzle maps are almost always a block of equal-length lines, so the usual
//! entry point is [`Grid::parse`] (or [`Grid::parse_chars`]):
//!
//! ```rust
//! use aoc_helpers::grid::{Grid, Point};
//!
//! let grid = Grid::parse(&["#..", ".#."], |c| c == '#').unwrap();
//! assert_eq!(grid.width(), 3);
//! assert_eq!(grid.get(Point::new(1, 1)), Some(&true));
//! assert_eq!(grid.get(Point::new(3, 0)), None);
//! ```
//!
//! Access outside the grid never panics: getters return `None`, setters
//! return `false`.

mod direction;
mod point;

pub use direction::Direction;
pub use point::Point;

use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;
use thiserror::Error;

/// Error type for grid construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Input rows do not all have the same length
    #[error("row {row} has length {len}, expected {expected}")]
    DimensionMismatch {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A rectangular grid stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a `width` x `height` grid with every cell set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }

    /// Copy of column `x`, top to bottom
    pub fn col(&self, x: i32) -> Option<Vec<T>> {
        if !self.in_bounds_xy(x, 0) {
            return None;
        }
        let x = x as usize;
        Some(
            (0..self.height)
                .map(|y| self.cells[y * self.width + x].clone())
                .collect(),
        )
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows, rejecting ragged input
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::DimensionMismatch {
                row,
                len: r.len(),
                expected: width,
            });
        }

        Ok(Self {
            cells: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    /// Parse equal-length lines, converting every character with `decode`
    pub fn parse<S, F>(lines: &[S], mut decode: F) -> Result<Self, GridError>
    where
        S: AsRef<str>,
        F: FnMut(char) -> T,
    {
        let height = lines.len();
        let width = lines.first().map_or(0, |l| l.as_ref().chars().count());

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in lines.iter().enumerate() {
            let before = cells.len();
            cells.extend(line.as_ref().chars().map(&mut decode));
            let len = cells.len() - before;
            if len != width {
                return Err(GridError::DimensionMismatch {
                    row,
                    len,
                    expected: width,
                });
            }
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        self.in_bounds_xy(p.x, p.y)
    }

    pub fn in_bounds_xy(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds_xy(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    pub fn get(&self, p: Point) -> Option<&T> {
        self.get_xy(p.x, p.y)
    }

    pub fn get_xy(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p.x, p.y).map(|i| &mut self.cells[i])
    }

    /// Store `value` at `p`. Returns `false` (and drops `value`) when out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        self.set_xy(p.x, p.y, value)
    }

    pub fn set_xy(&mut self, x: i32, y: i32, value: T) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// In-bounds neighbors of `p`, in the order of `directions`
    pub fn neighbors(&self, p: Point, directions: &[Direction]) -> Vec<Point> {
        directions
            .iter()
            .map(|d| d.step(p))
            .filter(|n| self.in_bounds(*n))
            .collect()
    }

    /// In-bounds neighbors in order N, E, S, W
    pub fn neighbors4(&self, p: Point) -> Vec<Point> {
        self.neighbors(p, &Direction::CARDINAL)
    }

    /// In-bounds neighbors in order N, E, S, W, NE, SE, SW, NW
    pub fn neighbors8(&self, p: Point) -> Vec<Point> {
        self.neighbors(p, &Direction::ALL)
    }

    /// Row-major iterator over `(point, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (Point::new((i % width) as i32, (i / width) as i32), v))
    }

    /// Visit every cell row-major until `f` returns `ControlFlow::Break`
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Point, &T) -> ControlFlow<()>,
    {
        for (p, v) in self.iter() {
            if f(p, v).is_break() {
                return;
            }
        }
    }

    /// First point (row-major) whose cell matches
    pub fn find<F>(&self, mut predicate: F) -> Option<Point>
    where
        F: FnMut(Point, &T) -> bool,
    {
        self.iter().find(|(p, v)| predicate(*p, v)).map(|(p, _)| p)
    }

    /// Every matching point, row-major
    pub fn find_all<F>(&self, mut predicate: F) -> Vec<Point>
    where
        F: FnMut(Point, &T) -> bool,
    {
        self.iter()
            .filter(|(p, v)| predicate(*p, v))
            .map(|(p, _)| p)
            .collect()
    }

    /// Row `y` as a slice
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if !self.in_bounds_xy(0, y) {
            return None;
        }
        let start = y as usize * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterator over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1))
    }
}

impl Grid<char> {
    /// Parse lines into a grid of their characters
    pub fn parse_chars<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        Self::parse(lines, |c| c)
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        Self::parse_chars(&lines)
    }
}

impl fmt::Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
