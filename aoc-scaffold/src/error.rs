//! Error types for scaffold generation

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use thiserror_ext::Construct;

/// Errors raised while validating or generating a puzzle scaffold
#[derive(Error, Debug, Construct)]
pub enum ScaffoldError {
    /// Day outside the calendar for its year
    #[error("invalid day: {day} for year {year}")]
    InvalidDay { day: u8, year: u16 },

    /// Year cannot be zero
    #[error("invalid year: {0}")]
    InvalidYear(u16),

    /// No working directory to generate into
    #[error("workdir is required")]
    WorkdirRequired,

    /// Download attempted without a session cookie
    #[error("cookie is required")]
    CredentialRequired,

    /// A target file is already present
    #[error("file already exists: {}", .path.display())]
    FileExists { path: PathBuf },

    /// Puzzle input could not be downloaded
    #[error("failed to download input: {reason}{}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Download { reason: String, status: Option<u16> },

    /// The overwrite prompt was declined
    #[error("operation cancelled by user")]
    CancelledByUser,

    /// Template failed to parse or render
    #[error("template error: {0}")]
    Template(String),

    /// Filesystem or prompt I/O failure
    #[error("{context}: {source}")]
    #[construct(skip)]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// `Io` with a description of what was being attempted
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            context: context.into(),
            source,
        }
    }

    /// One-line message for end users
    ///
    /// Download failures show only their reason and existing files are named
    /// by puzzle where the path allows it.
    pub fn user_message(&self) -> String {
        match self {
            ScaffoldError::FileExists { path } => file_exists_message(path),
            ScaffoldError::Download { reason, .. } => reason.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::CancelledByUser)
    }
}

static YEAR_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[\\/])y(\d{4}|\d{2})(?:[\\/]|$)").unwrap());

static DAY_COMPONENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[\\/])d(\d{1,2})(?:[\\/]|$)").unwrap());

/// Year and day encoded in `y<YYYY>` / `d<DD>` path components.
/// Two-digit years are read as `20YY`.
fn year_day_from_path(path: &str) -> Option<(u16, u8)> {
    let year_digits = YEAR_COMPONENT.captures(path)?.get(1)?.as_str();
    let mut year: u16 = year_digits.parse().ok()?;
    if year_digits.len() == 2 {
        year += 2000;
    }

    let day: u8 = DAY_COMPONENT.captures(path)?.get(1)?.as_str().parse().ok()?;

    (year > 0 && day > 0).then_some((year, day))
}

fn file_exists_message(path: &Path) -> String {
    match year_day_from_path(&path.to_string_lossy()) {
        Some((year, day)) => format!("day {} of {} already exists", day, year),
        None => format!(
            "file already exists: {}",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        ),
    }
}
