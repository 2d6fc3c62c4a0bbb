//! `actiondocs print <path>`: print rendered tables instead of patching.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use actiondocs_core::{metadata, ActionMetadata, AttributeKind};
use actiondocs_patch::heading_marker;
use actiondocs_renderer::{TableFormat, TableRenderer};

/// Arguments for `actiondocs print`.
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Metadata file to render.
    pub path: PathBuf,

    /// Table format: markdown or html.
    #[arg(long, default_value = "markdown")]
    pub format: TableFormat,

    /// Number of `#` in the printed section headings.
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub heading_level: u8,

    /// Directory of `.tera` files overriding the embedded table templates.
    #[arg(long)]
    pub templates: Option<PathBuf>,
}

impl PrintArgs {
    pub fn run(self) -> Result<()> {
        let meta = metadata::load_metadata(&self.path)
            .with_context(|| format!("failed to load '{}'", self.path.display()))?;
        let renderer = TableRenderer::with_template_dir(self.templates.as_deref())
            .context("failed to load table templates")?;
        print!(
            "{}",
            render_sections(&meta, &renderer, self.format, self.heading_level)?
        );
        Ok(())
    }
}

/// One heading + table block per attribute set the metadata declares.
fn render_sections(
    meta: &ActionMetadata,
    renderer: &TableRenderer,
    format: TableFormat,
    heading_level: u8,
) -> Result<String> {
    let mut blocks = Vec::new();
    for &kind in AttributeKind::all() {
        let Some(set) = meta.attributes(kind) else {
            continue;
        };
        let table = renderer
            .render(set, kind, format)
            .with_context(|| format!("failed to render {kind} table"))?;
        blocks.push(format!(
            "{}\n\n{}\n",
            heading_marker(heading_level, kind),
            table.trim_end_matches('\n')
        ));
    }
    Ok(blocks.join("\n"))
}
