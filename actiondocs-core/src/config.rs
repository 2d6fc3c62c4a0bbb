//! Patch configuration: which documents to patch, and how.
//!
//! # File format
//!
//! ```yaml
//! # actiondocs.yaml
//! targets:
//!   - metadata: action.yml
//!     has_outputs: true
//!     heading_level: 3
//!   - metadata: save/action.yml
//!     has_outputs: false
//!     document: save/README.md   # optional; defaults to README.md beside the metadata
//! ```
//!
//! When no config file exists, [`PatchConfig::default_targets`] is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::metadata::read_yaml;

/// Config file looked up in the root directory by [`PatchConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "actiondocs.yaml";

/// Document file name used when a target does not name one.
pub const DEFAULT_DOCUMENT_NAME: &str = "README.md";

/// Markdown heading levels run from `#` to `######`.
pub const HEADING_LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

fn default_has_outputs() -> bool {
    true
}

fn default_heading_level() -> u8 {
    3
}

// ---------------------------------------------------------------------------
// DocTarget
// ---------------------------------------------------------------------------

/// One (metadata, document) pair to patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTarget {
    /// Path to the action metadata file.
    pub metadata: PathBuf,
    /// Whether the `Outputs` section of the document should be patched.
    #[serde(default = "default_has_outputs")]
    pub has_outputs: bool,
    /// Number of `#` in the `Inputs`/`Outputs` headings.
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
    /// Document to patch; `README.md` beside `metadata` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PathBuf>,
}

impl DocTarget {
    /// `heading_level` must lie in [`HEADING_LEVELS`]; [`PatchConfig::load`]
    /// checks this for file configs, and patching refuses other levels.
    pub fn new(metadata: impl Into<PathBuf>, has_outputs: bool, heading_level: u8) -> Self {
        Self {
            metadata: metadata.into(),
            has_outputs,
            heading_level,
            document: None,
        }
    }

    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = Some(document.into());
        self
    }

    /// `true` when `heading_level` names a Markdown heading (`#` to `######`).
    pub fn has_valid_heading_level(&self) -> bool {
        HEADING_LEVELS.contains(&self.heading_level)
    }

    /// The document this target patches.
    pub fn document_path(&self) -> PathBuf {
        match &self.document {
            Some(doc) => doc.clone(),
            None => self
                .metadata
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(DEFAULT_DOCUMENT_NAME),
        }
    }

    /// Re-root relative paths under `root`. Absolute paths are kept as-is.
    pub fn resolve(&self, root: &Path) -> DocTarget {
        DocTarget {
            metadata: root.join(&self.metadata),
            has_outputs: self.has_outputs,
            heading_level: self.heading_level,
            document: Some(root.join(self.document_path())),
        }
    }
}

// ---------------------------------------------------------------------------
// PatchConfig
// ---------------------------------------------------------------------------

/// The full list of documents to patch in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PatchConfig {
    #[serde(default)]
    pub targets: Vec<DocTarget>,
}

impl PatchConfig {
    pub fn new(targets: Vec<DocTarget>) -> Self {
        Self { targets }
    }

    /// Root action plus its `save/` and `restore/` sub-actions.
    pub fn default_targets() -> Self {
        Self::new(vec![
            DocTarget::new("save/action.yml", false, 3),
            DocTarget::new("restore/action.yml", true, 3),
            DocTarget::new("action.yml", true, 3),
        ])
    }

    /// Load a config file.
    ///
    /// Returns `LoadError::NotFound` if absent, `LoadError::Parse` if malformed,
    /// `LoadError::InvalidConfig` if a heading level is out of range.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let config: PatchConfig = read_yaml(path)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Load `<root>/actiondocs.yaml` if present, else [`Self::default_targets`].
    pub fn discover(root: &Path) -> Result<Self, LoadError> {
        match Self::load(&root.join(CONFIG_FILE_NAME)) {
            Err(LoadError::NotFound { .. }) => Ok(Self::default_targets()),
            other => other,
        }
    }

    /// Every target re-rooted under `root`.
    pub fn resolve(&self, root: &Path) -> PatchConfig {
        PatchConfig {
            targets: self.targets.iter().map(|t| t.resolve(root)).collect(),
        }
    }

    fn validate(&self, path: &Path) -> Result<(), LoadError> {
        for target in &self.targets {
            if !target.has_valid_heading_level() {
                return Err(LoadError::InvalidConfig {
                    path: path.to_path_buf(),
                    message: format!(
                        "heading_level {} for {} is outside 1..=6",
                        target.heading_level,
                        target.metadata.display()
                    ),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
