//! Error types for menagerie-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// The page template cannot take the generated markup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template does not contain the placeholder {placeholder}")]
    PlaceholderMissing { placeholder: &'static str },

    #[error("template contains the placeholder {placeholder} {count} times; expected exactly once")]
    PlaceholderRepeated {
        placeholder: &'static str,
        count: usize,
    },
}

/// All errors that can arise from rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Malformed page template.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Tera failed to render a fragment.
    #[error("fragment engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading a page template.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
