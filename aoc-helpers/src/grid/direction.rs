//! Compass directions on a grid where north is `y - 1`.

use super::Point;
use std::fmt;

/// One of the eight compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// The four cardinal directions, clockwise from north
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// All eight directions: cardinals first, then diagonals clockwise from north-east
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit offset of one step in this direction
    pub const fn offset(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::East => Point::new(1, 0),
            Direction::South => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthEast => Point::new(1, -1),
            Direction::SouthEast => Point::new(1, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    /// The point one step away from `p`
    pub fn step(self, p: Point) -> Point {
        p + self.offset()
    }

    /// Rotate 90 degrees clockwise
    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::NorthEast => Direction::SouthEast,
            Direction::SouthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthWest,
            Direction::NorthWest => Direction::NorthEast,
        }
    }

    /// Rotate 90 degrees counter-clockwise
    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
            Direction::NorthEast => Direction::NorthWest,
            Direction::SouthEast => Direction::NorthEast,
            Direction::SouthWest => Direction::SouthEast,
            Direction::NorthWest => Direction::SouthWest,
        }
    }

    /// The opposite direction
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::SouthEast | Direction::SouthWest | Direction::NorthWest
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
            Direction::NorthEast => "NorthEast",
            Direction::SouthEast => "SouthEast",
            Direction::SouthWest => "SouthWest",
            Direction::NorthWest => "NorthWest",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let expected = [
            (Direction::North, (0, -1)),
            (Direction::East, (1, 0)),
            (Direction::South, (0, 1)),
            (Direction::West, (-1, 0)),
            (Direction::NorthEast, (1, -1)),
            (Direction::SouthEast, (1, 1)),
            (Direction::SouthWest, (-1, 1)),
            (Direction::NorthWest, (-1, -1)),
        ];
        for (dir, offset) in expected {
            assert_eq!(dir.offset(), Point::from(offset), "{}", dir);
        }
    }

    #[test]
    fn test_turn_right_cardinals() {
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::East.turn_right(), Direction::South);
        assert_eq!(Direction::South.turn_right(), Direction::West);
        assert_eq!(Direction::West.turn_right(), Direction::North);
    }

    #[test]
    fn test_turn_left_cardinals() {
        assert_eq!(Direction::North.turn_left(), Direction::West);
        assert_eq!(Direction::East.turn_left(), Direction::North);
        assert_eq!(Direction::South.turn_left(), Direction::East);
        assert_eq!(Direction::West.turn_left(), Direction::South);
    }

    #[test]
    fn test_four_right_turns_is_identity() {
        for dir in Direction::ALL {
            let turned = dir.turn_right().turn_right().turn_right().turn_right();
            assert_eq!(turned, dir);
            assert_eq!(dir.turn_right().turn_left(), dir);
        }
    }

    #[test]
    fn test_rotation_matches_offset_rotation() {
        // Clockwise with y pointing down maps (x, y) to (-y, x).
        for dir in Direction::ALL {
            let o = dir.offset();
            assert_eq!(dir.turn_right().offset(), Point::new(-o.y, o.x), "{}", dir);
        }
    }

    #[test]
    fn test_reverse() {
        for dir in Direction::ALL {
            assert_eq!(dir.reverse().offset(), -dir.offset());
            assert_eq!(dir.reverse().reverse(), dir);
            assert_eq!(dir.reverse().is_diagonal(), dir.is_diagonal());
        }
    }

    #[test]
    fn test_step_and_display() {
        assert_eq!(Direction::NorthWest.step(Point::new(5, 5)), Point::new(4, 4));
        assert_eq!(Direction::SouthEast.to_string(), "SouthEast");
    }
}
