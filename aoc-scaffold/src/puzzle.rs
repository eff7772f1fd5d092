//! Puzzle identity and calendar validation

use crate::error::ScaffoldError;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Days in a classic December calendar
pub const MAX_DAY: u8 = 25;

/// First year with the shortened calendar
pub const SHORT_CALENDAR_SINCE: u16 = 2025;

/// Days in the shortened calendar
pub const SHORT_CALENDAR_DAYS: u8 = 12;

/// A validated (year, day) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Puzzle {
    year: u16,
    day: u8,
}

impl Puzzle {
    /// Validate and build a puzzle identity
    ///
    /// # Errors
    ///
    /// * `ScaffoldError::InvalidDay` - day outside `1..=25`, or above 12 from 2025 on
    /// * `ScaffoldError::InvalidYear` - year is zero
    pub fn new(year: u16, day: u8) -> Result<Self, ScaffoldError> {
        if day == 0 || day > MAX_DAY {
            return Err(ScaffoldError::invalid_day(day, year));
        }
        if year == 0 {
            return Err(ScaffoldError::InvalidYear(year));
        }
        if day > Self::days_in(year) {
            return Err(ScaffoldError::invalid_day(day, year));
        }
        Ok(Self { year, day })
    }

    /// Number of puzzles published for `year`
    pub const fn days_in(year: u16) -> u8 {
        if year >= SHORT_CALENDAR_SINCE {
            SHORT_CALENDAR_DAYS
        } else {
            MAX_DAY
        }
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// `y<YYYY>/d<DD>`, relative to the working directory
    pub fn relative_dir(&self) -> PathBuf {
        PathBuf::from(format!("y{:04}", self.year)).join(format!("d{:02}", self.day))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} of {}", self.day, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_relative_dir_is_zero_padded() {
        let puzzle = Puzzle::new(2015, 3).unwrap();
        assert_eq!(puzzle.relative_dir(), PathBuf::from("y2015").join("d03"));

        let puzzle = Puzzle::new(999, 25).unwrap();
        assert_eq!(puzzle.relative_dir(), PathBuf::from("y0999").join("d25"));
    }

    #[test]
    fn test_short_calendar() {
        assert!(Puzzle::new(2024, 25).is_ok());
        assert!(Puzzle::new(2025, 12).is_ok());
        assert!(matches!(
            Puzzle::new(2025, 13),
            Err(ScaffoldError::InvalidDay { day: 13, year: 2025 })
        ));
        assert_eq!(Puzzle::days_in(2030), 12);
    }

    #[test]
    fn test_day_is_checked_before_year() {
        assert!(matches!(Puzzle::new(0, 0), Err(ScaffoldError::InvalidDay { .. })));
        assert!(matches!(Puzzle::new(0, 1), Err(ScaffoldError::InvalidYear(0))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Puzzle::new(2023, 7).unwrap().to_string(), "day 7 of 2023");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_range_accepted(year in 1u16..2025, day in 1u8..=25) {
            let puzzle = Puzzle::new(year, day).unwrap();
            prop_assert_eq!((puzzle.year(), puzzle.day()), (year, day));
        }

        #[test]
        fn prop_day_out_of_range_rejected(year in 1u16..3000, day in 26u8..=255) {
            let rejected = matches!(Puzzle::new(year, day), Err(ScaffoldError::InvalidDay { .. }));
            prop_assert!(rejected);
        }

        #[test]
        fn prop_short_calendar_rejects_late_days(year in 2025u16..3000, day in 13u8..=25) {
            let rejected = matches!(Puzzle::new(year, day), Err(ScaffoldError::InvalidDay { .. }));
            prop_assert!(rejected);
        }
    }
}
