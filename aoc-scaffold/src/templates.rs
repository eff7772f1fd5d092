//! Handlebars templates for the generated source files

use crate::error::ScaffoldError;
use crate::generator::{SOLUTION_FILE, TESTS_FILE};
use crate::puzzle::Puzzle;
use handlebars::Handlebars;
use serde::Serialize;

/// Solution skeleton, rendered to `mod.rs`
pub const SOLUTION_TEMPLATE: &str = include_str!("../templates/solution.rs.hbs");

/// Test skeleton, rendered to `tests.rs`
pub const TESTS_TEMPLATE: &str = include_str!("../templates/tests.rs.hbs");

/// Values available to every template as `{{year}}` and `{{day}}`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateData {
    pub year: u16,
    pub day: u8,
}

impl From<Puzzle> for TemplateData {
    fn from(puzzle: Puzzle) -> Self {
        Self {
            year: puzzle.year(),
            day: puzzle.day(),
        }
    }
}

/// Template registry keyed by output file name
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    /// The solution and test skeletons, registered under their file names
    pub fn builtin() -> Result<Self, ScaffoldError> {
        Self::new([(SOLUTION_FILE, SOLUTION_TEMPLATE), (TESTS_FILE, TESTS_TEMPLATE)])
    }

    /// Registry holding `(name, template)` pairs
    ///
    /// Strict mode is on, so a template referring to a missing value fails
    /// instead of rendering an empty string. Output is source code, so no
    /// HTML escaping.
    pub fn new<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ScaffoldError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);

        for (name, template) in templates {
            registry
                .register_template_string(name, template)
                .map_err(|e| ScaffoldError::Template(e.to_string()))?;
        }

        Ok(Self { registry })
    }

    /// Render the template registered as `name`
    pub fn render(&self, name: &str, data: &TemplateData) -> Result<String, ScaffoldError> {
        self.registry
            .render(name, data)
            .map_err(|e| ScaffoldError::Template(e.to_string()))
    }
}
