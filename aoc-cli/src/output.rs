//! Styled terminal output for the scaffold run

use aoc_scaffold::{Reporter, ScaffoldEvent};
use console::{Style, Term, measure_text_width, style};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes progress to stdout and failures to stderr
pub struct Output {
    out: Term,
    err: Term,
    cwd: Option<PathBuf>,
}

impl Output {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            cwd: std::env::current_dir().ok(),
        }
    }

    /// Bold title in a rounded cyan box, padded by blank lines
    pub fn header(&self, msg: &str) -> io::Result<()> {
        let border = Style::new().cyan();
        let bar = "─".repeat(measure_text_width(msg) + 2);

        self.out.write_line("")?;
        self.out
            .write_line(&border.apply_to(format!("╭{bar}╮")).to_string())?;
        self.out.write_line(&format!(
            "{} {} {}",
            border.apply_to("│"),
            style(msg).white().bright().bold(),
            border.apply_to("│")
        ))?;
        self.out
            .write_line(&border.apply_to(format!("╰{bar}╯")).to_string())?;
        self.out.write_line("")
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        let ok = Style::new().green().bold();
        self.out.write_line("")?;
        self.out
            .write_line(&format!("{} {}", ok.apply_to("✓"), ok.apply_to(msg)))
    }

    /// Always to stderr
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let bad = Style::new().red().bold();
        self.err
            .write_line(&format!("{} {}", bad.apply_to("✗"), bad.apply_to(msg)))
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        let info = Style::new().cyan().bold();
        self.out
            .write_line(&format!("{} {}", info.apply_to("ℹ"), info.apply_to(msg)))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        let warn = Style::new().yellow().bold();
        self.out
            .write_line(&format!("{} {}", warn.apply_to("⚠"), warn.apply_to(msg)))
    }

    /// Info line set apart by a blank line above it
    pub fn highlight(&self, msg: &str) -> io::Result<()> {
        self.out.write_line("")?;
        self.info(msg)
    }

    pub fn dim(&self, msg: &str) -> io::Result<()> {
        self.out.write_line(&style(msg).dim().to_string())
    }

    pub fn file_created(&self, path: &Path) -> io::Result<()> {
        self.created("📄", path)
    }

    pub fn dir_created(&self, path: &Path) -> io::Result<()> {
        self.created("📁", path)
    }

    fn created(&self, icon: &str, path: &Path) -> io::Result<()> {
        self.out.write_line(&format!(
            "  {} {} {}",
            style("✓").green().bold(),
            style(icon).blue().bold(),
            style(self.display_path(path)).blue()
        ))?;
        self.out.write_line("")
    }

    pub fn download(&self, msg: &str) -> io::Result<()> {
        self.out.write_line(&format!(
            "  {} {}",
            style("⬇").magenta().bold(),
            style(msg).magenta()
        ))?;
        self.out.write_line("")
    }

    /// `path` relative to the working directory as `./...`, when it lies beneath it
    pub fn display_path(&self, path: &Path) -> String {
        relative_display(self.cwd.as_deref(), path)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for &Output {
    fn report(&mut self, event: ScaffoldEvent) {
        let written = match event {
            ScaffoldEvent::Started { year, day } => {
                self.header(&format!("Creating Advent of Code {} - Day {}", year, day))
            }
            ScaffoldEvent::DirCreated(path) => self.dir_created(&path),
            ScaffoldEvent::FileCreated(path) => self.file_created(&path),
            ScaffoldEvent::Downloading { url } => {
                debug!(%url, "Input request");
                self.download("Downloading input from adventofcode.com")
            }
            ScaffoldEvent::DownloadSkipped => self
                .warning("No cookie provided - skipping input download")
                .and_then(|()| {
                    self.dim("  You can download the input manually or provide a cookie with --cookie")
                }),
        };

        if let Err(e) = written {
            debug!(error = %e, "Failed to write progress");
        }
    }
}

fn relative_display(cwd: Option<&Path>, path: &Path) -> String {
    if let Some(cwd) = cwd
        && let Ok(rel) = path.strip_prefix(cwd)
    {
        return format!("./{}", rel.display());
    }
    if path.is_relative() && !path.starts_with(".") && !path.starts_with("..") {
        return format!("./{}", path.display());
    }
    path.display().to_string()
}
