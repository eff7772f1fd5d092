//! Configuration resolution from CLI args

use crate::cli::CreateArgs;
use aoc_scaffold::ScaffoldConfig;
use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Build the generator config for `aoc create`, filling year and day from `today`
pub fn from_args(args: CreateArgs, today: NaiveDate) -> ScaffoldConfig {
    let (default_year, default_day) = default_puzzle(today);

    let work_dir = args
        .workdir
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_default();

    let config = ScaffoldConfig::new(
        args.year.unwrap_or(default_year),
        args.day.unwrap_or(default_day),
        work_dir,
    );

    match args.cookie {
        Some(cookie) => config.with_session(Zeroizing::new(cookie)),
        None => config,
    }
}

/// Latest event year and today's day of month.
///
/// Before December the latest event is last year's.
pub fn default_puzzle(today: NaiveDate) -> (u16, u8) {
    let mut year = today.year();
    if today.month() < 12 {
        year -= 1;
    }
    (
        u16::try_from(year).unwrap_or_default(),
        today.day() as u8,
    )
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn args(workdir: Option<&str>, cookie: Option<&str>) -> CreateArgs {
        CreateArgs {
            day: None,
            year: None,
            workdir: workdir.map(PathBuf::from),
            cookie: cookie.map(str::to_string),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_puzzle_in_december() {
        assert_eq!(default_puzzle(date(2024, 12, 7)), (2024, 7));
    }

    #[test]
    fn test_default_puzzle_before_december() {
        assert_eq!(default_puzzle(date(2025, 3, 14)), (2024, 14));
        assert_eq!(default_puzzle(date(2025, 11, 30)), (2024, 30));
    }

    #[test]
    fn test_explicit_values_win() {
        let mut a = args(Some("/srv/aoc"), Some("cookie"));
        a.day = Some(2);
        a.year = Some(2017);

        let config = from_args(a, date(2024, 12, 9));
        assert_eq!((config.year, config.day), (2017, 2));
        assert_eq!(config.work_dir, PathBuf::from("/srv/aoc"));
        assert_eq!(config.session.as_deref().map(String::as_str), Some("cookie"));
    }

    #[test]
    fn test_missing_values() {
        let config = from_args(args(None, Some("")), date(2024, 12, 1));
        assert!(config.work_dir.as_os_str().is_empty());
        assert!(config.session.is_none());
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        assert_eq!(expand_tilde(Path::new("/abs/~/x")), PathBuf::from("/abs/~/x"));
        assert_eq!(expand_tilde(Path::new("~other")), PathBuf::from("~other"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        /// Default year is never ahead of today and lags only before December
        #[test]
        fn prop_default_year(y in 2015i32..2100, m in 1u32..=12, d in 1u32..=28) {
            let (year, day) = default_puzzle(date(y, m, d));
            prop_assert_eq!(day as u32, d);
            prop_assert_eq!(year as i32, if m == 12 { y } else { y - 1 });
        }
    }
}
