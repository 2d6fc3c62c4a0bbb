//! `actiondocs diff`: show unified diffs for what patch would write.

use anyhow::{bail, Context, Result};
use clap::Args;

use actiondocs_patch::diff_all;

use super::TargetArgs;

/// Arguments for `actiondocs diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Exit with a failure status when any document is out of date.
    #[arg(long)]
    pub exit_code: bool,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let (config, renderer) = self.target.load()?;
        let diffs = diff_all(&config, &renderer, &self.target.root).context("diff failed")?;

        if diffs.is_empty() {
            println!("No differences.");
            return Ok(());
        }

        for diff in &diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        if self.exit_code {
            bail!("{} document(s) out of date", diffs.len());
        }
        Ok(())
    }
}
