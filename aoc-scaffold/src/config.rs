//! Generator configuration

use std::fmt;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Everything a [`Generator`](crate::Generator) needs to know up front
#[derive(Clone)]
pub struct ScaffoldConfig {
    pub year: u16,
    pub day: u8,
    /// Directory the `y<YYYY>/d<DD>` tree is created under
    pub work_dir: PathBuf,
    /// Session cookie (zeroized on drop). `None` skips the input download.
    pub session: Option<Zeroizing<String>>,
}

impl ScaffoldConfig {
    pub fn new(year: u16, day: u8, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            year,
            day,
            work_dir: work_dir.into(),
            session: None,
        }
    }

    /// Attach a session cookie; an empty string counts as no session
    pub fn with_session(mut self, session: Zeroizing<String>) -> Self {
        self.session = (!session.is_empty()).then_some(session);
        self
    }
}

impl fmt::Debug for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScaffoldConfig")
            .field("year", &self.year)
            .field("day", &self.day)
            .field("work_dir", &self.work_dir)
            .field("session", &self.session.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
