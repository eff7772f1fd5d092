//! 2D integer coordinates.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D coordinate. `y` grows downward, matching the row order of puzzle input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan (taxicab) distance
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev (chessboard) distance
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Squared Euclidean distance, kept integral to avoid floating point
    pub fn euclidean_squared(self, other: Point) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let cases = [
            ((0, 0), (0, 0), (0, 0)),
            ((1, 2), (3, 4), (4, 6)),
            ((-1, -2), (-3, -4), (-4, -6)),
            ((1, -2), (-3, 4), (-2, 2)),
        ];
        for (a, b, expected) in cases {
            assert_eq!(Point::from(a) + Point::from(b), Point::from(expected));
        }
    }

    #[test]
    fn test_sub_mul_neg() {
        let p = Point::new(3, -2);
        assert_eq!(p - Point::new(1, 1), Point::new(2, -3));
        assert_eq!(p * 3, Point::new(9, -6));
        assert_eq!(-p, Point::new(-3, 2));

        let mut q = p;
        q += Point::new(1, 1);
        q -= Point::new(0, 2);
        assert_eq!(q, Point::new(4, -3));
    }

    #[test]
    fn test_manhattan() {
        let cases = [
            ((0, 0), (0, 0), 0),
            ((0, 0), (5, 0), 5),
            ((0, 0), (0, 5), 5),
            ((0, 0), (3, 4), 7),
            ((-1, -2), (2, 3), 8),
        ];
        for (a, b, expected) in cases {
            assert_eq!(Point::from(a).manhattan(Point::from(b)), expected);
        }
    }

    #[test]
    fn test_chebyshev() {
        let cases = [
            ((0, 0), (0, 0), 0),
            ((0, 0), (5, 0), 5),
            ((0, 0), (3, 4), 4),
            ((-1, -2), (2, 3), 5),
        ];
        for (a, b, expected) in cases {
            assert_eq!(Point::from(a).chebyshev(Point::from(b)), expected);
        }
    }

    #[test]
    fn test_euclidean_squared() {
        assert_eq!(Point::ORIGIN.euclidean_squared(Point::new(3, 4)), 25);
        assert_eq!(Point::new(-1, -1).euclidean_squared(Point::new(1, 1)), 8);
    }
}
