//! Dry-run unified diff support for `actiondocs diff`.

use std::path::{Path, PathBuf};

use similar::TextDiff;

use actiondocs_core::{DocTarget, PatchConfig};
use actiondocs_renderer::TableRenderer;

use crate::{writer::render_target, PatchError};

/// A single document diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Compare what `patch` would write for `target` with the document on disk.
///
/// Returns `None` when the document is already up to date. No files are written.
/// Headers are relative to `root` when the document lives under it.
pub fn diff_target(
    target: &DocTarget,
    renderer: &TableRenderer,
    root: &Path,
) -> Result<Option<FileDiff>, PatchError> {
    let patched = render_target(target, renderer)?;
    if !patched.is_changed() {
        return Ok(None);
    }

    let relative = patched.path.strip_prefix(root).unwrap_or(patched.path.as_path());
    let old_header = format!("a/{}", relative.display());
    let new_header = format!("b/{}", relative.display());
    let unified = TextDiff::from_lines(&patched.original, &patched.patched)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: patched.path,
        unified_diff: unified,
    }))
}

/// Diff every configured document.
pub fn diff_all(
    config: &PatchConfig,
    renderer: &TableRenderer,
    root: &Path,
) -> Result<Vec<FileDiff>, PatchError> {
    let mut diffs = Vec::new();
    for target in &config.targets {
        if let Some(diff) = diff_target(target, renderer, root)? {
            diffs.push(diff);
        }
    }
    Ok(diffs)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::patch_target;

    use super::*;

    fn setup(root: &Path) -> DocTarget {
        fs::write(
            root.join("action.yml"),
            "inputs:\n  key:\n    description: Cache key.\n",
        )
        .expect("write action");
        fs::write(root.join("README.md"), "# Cache\n\n### Inputs\n\nstale\n\nfooter\n")
            .expect("write readme");
        DocTarget::new("action.yml", false, 3).resolve(root)
    }

    #[test]
    fn stale_document_produces_unified_diff() {
        let root = TempDir::new().expect("root");
        let target = setup(root.path());
        let renderer = TableRenderer::new().expect("renderer");

        let diff = diff_target(&target, &renderer, root.path())
            .expect("diff")
            .expect("document is stale");
        assert!(diff.unified_diff.contains("--- a/README.md"));
        assert!(diff.unified_diff.contains("+++ b/README.md"));
        assert!(diff.unified_diff.contains("-stale"));
        assert!(diff.unified_diff.contains("+<table>"));
        assert!(diff.unified_diff.contains("@@"));
    }

    #[test]
    fn diff_writes_nothing() {
        let root = TempDir::new().expect("root");
        let target = setup(root.path());
        let before = fs::read_to_string(root.path().join("README.md")).expect("read");
        diff_target(&target, &TableRenderer::new().unwrap(), root.path()).expect("diff");
        let after = fs::read_to_string(root.path().join("README.md")).expect("read");
        assert_eq!(before, after);
    }

    #[test]
    fn no_diff_after_patch() {
        let root = TempDir::new().expect("root");
        let target = setup(root.path());
        let renderer = TableRenderer::new().expect("renderer");
        patch_target(&target, &renderer, false).expect("patch");

        let config = PatchConfig::new(vec![target]);
        let diffs = diff_all(&config, &renderer, root.path()).expect("diff");
        assert!(diffs.is_empty(), "patched document should have no diff");
    }
}
