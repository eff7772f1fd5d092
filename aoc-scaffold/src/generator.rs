//! The scaffold run: conflict check, directory, templates, input download

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::overwrite::{Confirm, OverwriteState};
use crate::puzzle::Puzzle;
use crate::report::{Reporter, ScaffoldEvent};
use crate::templates::{Renderer, TemplateData};
use aoc_http_client::{AocClient, AocError};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zeroize::Zeroizing;

/// Solution skeleton file name
pub const SOLUTION_FILE: &str = "mod.rs";

/// Test skeleton file name
pub const TESTS_FILE: &str = "tests.rs";

/// Directory holding the downloaded input, inside the puzzle directory
pub const INPUT_DIR: &str = "testdata";

/// Downloaded input file name, inside [`INPUT_DIR`]
pub const INPUT_FILE: &str = "input.txt";

const AUTH_FAILED: &str = "authentication failed - check your session cookie";
const NOT_RELEASED: &str = "input not available - puzzle may not be released yet";

/// Generates the files for one puzzle
pub struct Generator {
    puzzle: Puzzle,
    output_dir: PathBuf,
    session: Option<Zeroizing<String>>,
    client: Option<AocClient>,
}

impl Generator {
    /// Validate `config` and derive the output directory
    ///
    /// # Errors
    ///
    /// * `ScaffoldError::InvalidDay` / `ScaffoldError::InvalidYear` - see [`Puzzle::new`]
    /// * `ScaffoldError::WorkdirRequired` - `work_dir` is empty
    pub fn new(config: ScaffoldConfig) -> Result<Self, ScaffoldError> {
        let puzzle = Puzzle::new(config.year, config.day)?;

        if config.work_dir.as_os_str().is_empty() {
            return Err(ScaffoldError::WorkdirRequired);
        }

        let output_dir = config.work_dir.join(puzzle.relative_dir());
        debug!(output_dir = %output_dir.display(), "Resolved output directory");

        Ok(Self {
            puzzle,
            output_dir,
            session: config.session,
            client: None,
        })
    }

    /// Use `client` for the input download instead of a default one
    pub fn with_client(mut self, client: AocClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn puzzle(&self) -> Puzzle {
        self.puzzle
    }

    /// `<work_dir>/y<YYYY>/d<DD>`
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn input_path(&self) -> PathBuf {
        self.output_dir.join(INPUT_DIR).join(INPUT_FILE)
    }

    /// Generate everything, stopping at the first failure
    ///
    /// `confirm` is consulted only when some output already exists.
    /// Declining returns `ScaffoldError::CancelledByUser` with nothing touched.
    pub fn run(
        &self,
        confirm: &mut dyn Confirm,
        reporter: &mut dyn Reporter,
    ) -> Result<(), ScaffoldError> {
        let (year, day) = (self.puzzle.year(), self.puzzle.day());
        info!(year, day, "Generating scaffold");
        reporter.report(ScaffoldEvent::Started { year, day });

        let mut state = OverwriteState::Idle.detect(self.has_existing_output());
        if state.needs_confirmation() {
            debug!("Existing output found, asking before overwriting");
            let confirmed = confirm.confirm_overwrite(self.puzzle, &self.output_dir)?;
            state = state.resolve(confirmed);
        }

        let OverwriteState::Proceeding { clear_existing } = state else {
            info!("Overwrite declined, leaving existing files untouched");
            return Err(ScaffoldError::CancelledByUser);
        };
        if clear_existing {
            self.clear_output_dir()?;
        }

        self.create_output_dir(reporter)?;
        self.render_templates(reporter)?;

        match self.session.as_deref() {
            Some(session) => self.download_input(session, reporter),
            None => {
                info!("No session cookie, skipping input download");
                reporter.report(ScaffoldEvent::DownloadSkipped);
                Ok(())
            }
        }
    }

    fn expected_files(&self) -> [PathBuf; 3] {
        [
            self.output_dir.join(SOLUTION_FILE),
            self.output_dir.join(TESTS_FILE),
            self.input_path(),
        ]
    }

    fn has_existing_output(&self) -> bool {
        self.output_dir.is_dir() || self.expected_files().iter().any(|p| p.is_file())
    }

    fn clear_output_dir(&self) -> Result<(), ScaffoldError> {
        debug!(path = %self.output_dir.display(), "Removing existing output");
        match fs::remove_dir_all(&self.output_dir) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScaffoldError::io(
                format!(
                    "failed to delete existing directory {}",
                    self.output_dir.display()
                ),
                e,
            )),
        }
    }

    fn create_output_dir(&self, reporter: &mut dyn Reporter) -> Result<(), ScaffoldError> {
        let existed = self.output_dir.is_dir();

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ScaffoldError::io(
                format!("failed to create directory {}", self.output_dir.display()),
                e,
            )
        })?;

        if !existed {
            reporter.report(ScaffoldEvent::DirCreated(self.output_dir.clone()));
        }
        Ok(())
    }

    fn render_templates(&self, reporter: &mut dyn Reporter) -> Result<(), ScaffoldError> {
        let renderer = Renderer::builtin()?;
        let data = TemplateData::from(self.puzzle);

        for name in [SOLUTION_FILE, TESTS_FILE] {
            let path = self.output_dir.join(name);
            if path.exists() {
                return Err(ScaffoldError::file_exists(path));
            }

            let contents = renderer.render(name, &data)?;
            write_new(&path, contents.as_bytes())?;

            debug!(path = %path.display(), "Rendered template");
            reporter.report(ScaffoldEvent::FileCreated(path));
        }
        Ok(())
    }

    fn download_input(&self, session: &str, reporter: &mut dyn Reporter) -> Result<(), ScaffoldError> {
        let path = self.input_path();
        if path.exists() {
            return Err(ScaffoldError::file_exists(path));
        }
        if session.is_empty() {
            return Err(ScaffoldError::CredentialRequired);
        }

        let client = match &self.client {
            Some(client) => client.clone(),
            None => AocClient::new().map_err(download_error)?,
        };
        let (year, day) = (self.puzzle.year(), self.puzzle.day());

        let url = client.input_url(year, day).map_err(download_error)?;
        info!(%url, "Downloading puzzle input");
        reporter.report(ScaffoldEvent::Downloading {
            url: url.to_string(),
        });

        let body = client.get_input(year, day, session).map_err(download_error)?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                ScaffoldError::io(format!("failed to create directory {}", dir.display()), e)
            })?;
        }
        write_new(&path, &body)?;

        debug!(path = %path.display(), bytes = body.len(), "Saved puzzle input");
        reporter.report(ScaffoldEvent::FileCreated(path));
        Ok(())
    }
}

/// Create `path` and write `contents`, refusing to replace an existing file
fn write_new(path: &Path, contents: &[u8]) -> Result<(), ScaffoldError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ScaffoldError::file_exists(path),
            _ => ScaffoldError::io(format!("failed to create file {}", path.display()), e),
        })?;

    file.write_all(contents)
        .map_err(|e| ScaffoldError::io(format!("failed to write file {}", path.display()), e))
}

/// Map a client failure onto the reason shown to the user
fn download_error(err: AocError) -> ScaffoldError {
    let Some(status) = err.status() else {
        return match err {
            AocError::ClientInit(msg) => {
                ScaffoldError::download(format!("failed to create request: {msg}"), None)
            }
            other => ScaffoldError::download(format!("network error: {other}"), None),
        };
    };

    let code = status.as_u16();
    let reason = match code {
        401 | 403 => AUTH_FAILED.to_string(),
        404 => NOT_RELEASED.to_string(),
        _ => status.to_string(),
    };
    ScaffoldError::download(reason, Some(code))
}
