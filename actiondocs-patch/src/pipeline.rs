//! Shared entrypoint used by `actiondocs patch` and `actiondocs diff`.

use std::path::{Path, PathBuf};

use actiondocs_core::PatchConfig;

use crate::PatchError;

/// Where a run's configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `<root>/actiondocs.yaml` when present, else the default targets.
    Discover,
    /// An explicit config file.
    File(PathBuf),
}

/// Load the configuration for a run and re-root its targets under `root`.
///
/// A relative `ConfigSource::File` path is taken relative to the working
/// directory, like any other command-line path.
pub fn load_config(root: &Path, source: &ConfigSource) -> Result<PatchConfig, PatchError> {
    let config = match source {
        ConfigSource::Discover => PatchConfig::discover(root)?,
        ConfigSource::File(path) => PatchConfig::load(path)?,
    };
    tracing::debug!(
        "{} target(s) configured under {}",
        config.targets.len(),
        root.display()
    );
    Ok(config.resolve(root))
}
