//! Error types for actiondocs-patch.

use std::path::PathBuf;

use thiserror::Error;

use actiondocs_core::LoadError;
use actiondocs_renderer::RenderError;

/// All errors that can arise while patching documents.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The metadata file could not be loaded or parsed.
    #[error("metadata error: {0}")]
    Load(#[from] LoadError),

    /// An error from the table renderer.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The document to patch does not exist.
    #[error("document not found at {path}")]
    DocumentNotFound { path: PathBuf },

    /// A target whose heading level is not a Markdown heading level.
    #[error("{path}: heading level {level} is outside 1..=6")]
    InvalidHeadingLevel { path: PathBuf, level: u8 },

    /// The line the table belongs on lies past the end of the document.
    #[error(
        "{path}: heading on line {heading_line} expects its table on line {target_line}, \
         but the document has only {line_count} lines"
    )]
    MissingContentLine {
        path: PathBuf,
        heading_line: usize,
        target_line: usize,
        line_count: usize,
    },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PatchError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PatchError {
    PatchError::Io {
        path: path.into(),
        source,
    }
}
