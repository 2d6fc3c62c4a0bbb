//! Atomic writer and patch orchestration.
//!
//! ## `patch_target`: per-document flow
//!
//! 1. Load the action metadata.
//! 2. Read the document into lines.
//! 3. Patch the inputs and outputs sections in memory.
//! 4. Compare with the on-disk bytes → skip if identical.
//! 5. Write to `<path>.actiondocs.tmp`.
//! 6. Rename to final path (atomic on POSIX).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use actiondocs_core::{metadata, AttributeKind, DocTarget, PatchConfig};
use actiondocs_renderer::TableRenderer;

use crate::document::{patch_document, Document, SectionResult};
use crate::error::{io_err, PatchError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed).
    Written { path: PathBuf },
    /// File was skipped: patched content matches what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// Atomically replace `path` with `content` unless it already holds exactly that.
pub(crate) fn atomic_write(
    path: &Path,
    content: &str,
    dry_run: bool,
) -> Result<WriteResult, PatchError> {
    let tmp = PathBuf::from(format!("{}.actiondocs.tmp", path.display()));
    atomic_write_with_tmp(path, content, dry_run, &tmp)
}

fn atomic_write_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, PatchError> {
    match std::fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            tracing::debug!("unchanged: {}", path.display());
            return Ok(WriteResult::Unchanged {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(io_err(path, e)),
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Patched documents
// ---------------------------------------------------------------------------

/// A document patched in memory, before anything is written.
#[derive(Debug, Clone)]
pub struct PatchedDocument {
    pub path: PathBuf,
    pub original: String,
    pub patched: String,
    pub sections: Vec<SectionResult>,
}

impl PatchedDocument {
    pub fn is_changed(&self) -> bool {
        self.original != self.patched
    }
}

/// Load the target's metadata and document and patch the document in memory.
pub fn render_target(
    target: &DocTarget,
    renderer: &TableRenderer,
) -> Result<PatchedDocument, PatchError> {
    let meta = metadata::load_metadata(&target.metadata)?;
    let path = target.document_path();
    let original = read_document(&path)?;

    let mut document = Document::parse(&original);
    let sections = patch_document(&mut document, &meta, target, renderer, &path)?;

    Ok(PatchedDocument {
        path,
        patched: document.to_text(),
        original,
        sections,
    })
}

fn read_document(path: &Path) -> Result<String, PatchError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PatchError::DocumentNotFound {
            path: path.to_path_buf(),
        },
        _ => io_err(path, e),
    })
}

// ---------------------------------------------------------------------------
// patch_target / patch_all
// ---------------------------------------------------------------------------

/// Outcome of patching a single document.
#[derive(Debug, Clone)]
pub struct PatchTargetResult {
    pub metadata: PathBuf,
    pub sections: Vec<SectionResult>,
    pub write: WriteResult,
}

impl PatchTargetResult {
    pub fn document(&self) -> &Path {
        self.write.path()
    }

    /// Kinds whose heading could not be found in the document.
    pub fn missing_headings(&self) -> impl Iterator<Item = AttributeKind> + '_ {
        self.sections
            .iter()
            .filter(|s| s.is_heading_missing())
            .map(|s| s.kind)
    }
}

/// Patch one document and write it back.
pub fn patch_target(
    target: &DocTarget,
    renderer: &TableRenderer,
    dry_run: bool,
) -> Result<PatchTargetResult, PatchError> {
    let patched = render_target(target, renderer)?;
    let write = atomic_write(&patched.path, &patched.patched, dry_run)?;
    Ok(PatchTargetResult {
        metadata: target.metadata.clone(),
        sections: patched.sections,
        write,
    })
}

/// Patch every configured document, in order. Stops at the first error.
pub fn patch_all(
    config: &PatchConfig,
    renderer: &TableRenderer,
    dry_run: bool,
) -> Result<Vec<PatchTargetResult>, PatchError> {
    let mut results = Vec::with_capacity(config.targets.len());
    for target in &config.targets {
        results.push(patch_target(target, renderer, dry_run)?);
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
