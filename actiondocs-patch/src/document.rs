//! Line-oriented document patching.
//!
//! For each attribute kind the patcher scans for the first line containing
//! `"#" * heading_level + " " + label` (e.g. `### Inputs`) and overwrites the
//! line [`HEADING_CONTENT_OFFSET`] positions below it with the rendered table:
//!
//! ```text
//! ### Inputs                 <- heading_line
//!                            <- blank
//! <table>…</table>           <- heading_line + 2, replaced
//! ```
//!
//! Matching is a substring test, so `### Inputs` also matches inside
//! `#### Inputs`. Every other line is left byte-identical.

use std::path::Path;

use actiondocs_core::{ActionMetadata, AttributeKind, AttributeSet, DocTarget};
use actiondocs_renderer::{TableFormat, TableRenderer};

use crate::error::PatchError;

/// Distance from a heading line to the line holding its table.
pub const HEADING_CONTENT_OFFSET: usize = 2;

/// Character repeated `heading_level` times to form a heading marker.
pub const HEADING_MARKER_CHAR: char = '#';

/// The substring that identifies the `kind` heading at `level`.
pub fn heading_marker(level: u8, kind: AttributeKind) -> String {
    let hashes: String = std::iter::repeat(HEADING_MARKER_CHAR)
        .take(usize::from(level))
        .collect();
    format!("{hashes} {}", kind.heading_label())
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A text document held as lines, each keeping its original terminator.
///
/// `Document::parse(text).to_text() == text` for any input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the first line containing `needle`.
    pub fn find_line(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }

    /// Overwrite line `index` with `content` plus a line terminator.
    ///
    /// The terminator is `\r\n` when the replaced line used one, `\n` otherwise.
    /// Returns the previous line, or `None` (leaving the document untouched)
    /// when `index` is out of range.
    pub fn replace_line(&mut self, index: usize, content: &str) -> Option<String> {
        let slot = self.lines.get_mut(index)?;
        let terminator = if slot.ends_with("\r\n") { "\r\n" } else { "\n" };
        Some(std::mem::replace(slot, format!("{content}{terminator}")))
    }

    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

// ---------------------------------------------------------------------------
// Section outcomes
// ---------------------------------------------------------------------------

/// What happened to one (kind, heading) pair of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The table was written. Line numbers are 1-based.
    Replaced {
        heading_line: usize,
        target_line: usize,
    },
    /// No line contains the heading marker; nothing was changed.
    HeadingNotFound,
    /// The target is configured without outputs.
    Disabled,
}

/// Outcome for one attribute kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResult {
    pub kind: AttributeKind,
    pub marker: String,
    pub outcome: SectionOutcome,
}

impl SectionResult {
    pub fn is_replaced(&self) -> bool {
        matches!(self.outcome, SectionOutcome::Replaced { .. })
    }

    pub fn is_heading_missing(&self) -> bool {
        matches!(self.outcome, SectionOutcome::HeadingNotFound)
    }
}

// ---------------------------------------------------------------------------
// patch_document
// ---------------------------------------------------------------------------

/// Splice the inputs and outputs tables of `metadata` into `document`.
///
/// Headings are located on the document as given, before any table is
/// written, so text inside a spliced table never counts as a heading.
/// `path` is only used for messages. Fails with
/// [`PatchError::InvalidHeadingLevel`] for a level outside `1..=6`, and with
/// [`PatchError::MissingContentLine`] when a heading has no line at
/// `+HEADING_CONTENT_OFFSET`; the document is then left untouched.
pub fn patch_document(
    document: &mut Document,
    metadata: &ActionMetadata,
    target: &DocTarget,
    renderer: &TableRenderer,
    path: &Path,
) -> Result<Vec<SectionResult>, PatchError> {
    if !target.has_valid_heading_level() {
        return Err(PatchError::InvalidHeadingLevel {
            path: path.to_path_buf(),
            level: target.heading_level,
        });
    }

    let mut results = Vec::with_capacity(AttributeKind::all().len());
    let mut replacements = Vec::new();

    for &kind in AttributeKind::all() {
        let marker = heading_marker(target.heading_level, kind);

        if kind == AttributeKind::Outputs && !target.has_outputs {
            results.push(SectionResult {
                kind,
                marker,
                outcome: SectionOutcome::Disabled,
            });
            continue;
        }

        let Some(heading) = document.find_line(&marker) else {
            tracing::warn!("heading '{}' not found in {}", marker, path.display());
            results.push(SectionResult {
                kind,
                marker,
                outcome: SectionOutcome::HeadingNotFound,
            });
            continue;
        };

        let target_index = heading + HEADING_CONTENT_OFFSET;
        if target_index >= document.len() {
            return Err(PatchError::MissingContentLine {
                path: path.to_path_buf(),
                heading_line: heading + 1,
                target_line: target_index + 1,
                line_count: document.len(),
            });
        }

        replacements.push((kind, target_index));
        results.push(SectionResult {
            kind,
            marker,
            outcome: SectionOutcome::Replaced {
                heading_line: heading + 1,
                target_line: target_index + 1,
            },
        });
    }

    let empty = AttributeSet::default();
    for (kind, target_index) in replacements {
        let set = metadata.attributes(kind).unwrap_or_else(|| {
            tracing::warn!(
                "{} has a {} heading but no {} in its metadata",
                path.display(),
                kind.heading_label(),
                kind
            );
            &empty
        });
        let table = renderer.render(set, kind, TableFormat::Html)?;
        document.replace_line(target_index, &table);

        tracing::debug!(
            "{}: {} table written to line {}",
            path.display(),
            kind,
            target_index + 1
        );
    }

    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
