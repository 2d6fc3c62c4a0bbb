//! Subcommand implementations.

pub mod diff;
pub mod patch;
pub mod print;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use actiondocs_core::PatchConfig;
use actiondocs_patch::pipeline::{self, ConfigSource};
use actiondocs_renderer::TableRenderer;

/// Target selection shared by `patch` and `diff`.
#[derive(Args, Debug)]
pub struct TargetArgs {
    /// Repository root; metadata and document paths are relative to it.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Config file listing targets (default: `<root>/actiondocs.yaml`, else built-in targets).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory of `.tera` files overriding the embedded table templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

impl TargetArgs {
    /// Resolved configuration plus a renderer honouring `--templates`.
    pub fn load(&self) -> Result<(PatchConfig, TableRenderer)> {
        let source = match &self.config {
            Some(path) => ConfigSource::File(path.clone()),
            None => ConfigSource::Discover,
        };
        let config = pipeline::load_config(&self.root, &source)
            .context("failed to load patch configuration")?;
        let renderer = TableRenderer::with_template_dir(self.templates.as_deref())
            .context("failed to load table templates")?;
        Ok((config, renderer))
    }
}
