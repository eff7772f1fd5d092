//! Progress events emitted while generating

use std::path::PathBuf;

/// Something the generator just did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// Generation began; emitted once per run
    Started { year: u16, day: u8 },
    /// Output directory did not exist and was created
    DirCreated(PathBuf),
    /// A file was written
    FileCreated(PathBuf),
    /// About to fetch the puzzle input
    Downloading { url: String },
    /// No session cookie, input download left out
    DownloadSkipped,
}

/// Receives [`ScaffoldEvent`]s as they happen
pub trait Reporter {
    fn report(&mut self, event: ScaffoldEvent);
}

/// Discards every event
impl Reporter for () {
    fn report(&mut self, _event: ScaffoldEvent) {}
}

impl<F> Reporter for F
where
    F: FnMut(ScaffoldEvent),
{
    fn report(&mut self, event: ScaffoldEvent) {
        self(event)
    }
}
