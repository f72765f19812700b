//! Page template and placeholder substitution.

use std::path::Path;

use crate::error::{RenderError, TemplateError};

/// Marker replaced with the generated cards.
pub const PLACEHOLDER: &str = "__REPLACE_ANIMALS_INFO__";

const EMBEDDED_PAGE: &str = include_str!("templates/page.html");

/// A page template. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Template {
            source: source.into(),
        }
    }

    /// The page bundled with the binary.
    pub fn embedded() -> Self {
        Template::new(EMBEDDED_PAGE)
    }

    /// Read a template file. Placeholder checks happen at substitution time.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded page template");
        Ok(Template::new(source))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Fails unless [`PLACEHOLDER`] occurs exactly once.
    pub fn validate(&self) -> Result<(), TemplateError> {
        match self.source.matches(PLACEHOLDER).count() {
            1 => Ok(()),
            0 => Err(TemplateError::PlaceholderMissing {
                placeholder: PLACEHOLDER,
            }),
            count => Err(TemplateError::PlaceholderRepeated {
                placeholder: PLACEHOLDER,
                count,
            }),
        }
    }
}

/// Replace the single placeholder in `template` with `fragment`.
pub fn substitute(template: &Template, fragment: &str) -> Result<String, TemplateError> {
    template.validate()?;
    Ok(template.source.replacen(PLACEHOLDER, fragment, 1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
