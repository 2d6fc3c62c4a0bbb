//! `actiondocs patch`: splice rendered tables into every configured document.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use actiondocs_patch::{patch_all, PatchTargetResult, SectionOutcome, WriteResult};

use super::TargetArgs;

/// Arguments for `actiondocs patch`.
#[derive(Args, Debug)]
pub struct PatchArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Fail when a configured heading is missing from its document.
    #[arg(long)]
    pub strict: bool,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl PatchArgs {
    pub fn run(self) -> Result<()> {
        let (config, renderer) = self.target.load()?;
        if config.targets.is_empty() {
            println!("No targets configured.");
            return Ok(());
        }

        let results = patch_all(&config, &renderer, self.dry_run).context("patch failed")?;
        if self.json {
            print_json(&results, &self.target.root)?;
        } else {
            print_results(&results, &self.target.root, self.dry_run);
        }

        if self.strict {
            let missing: Vec<String> = results
                .iter()
                .flat_map(|r| {
                    r.sections
                        .iter()
                        .filter(|s| s.is_heading_missing())
                        .map(move |s| format!("'{}' in {}", s.marker, r.document().display()))
                })
                .collect();
            if !missing.is_empty() {
                bail!("missing heading(s): {}", missing.join(", "));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Human output
// ---------------------------------------------------------------------------

#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "document")]
    document: String,
    #[tabled(rename = "section")]
    section: String,
    #[tabled(rename = "outcome")]
    outcome: String,
}

fn print_results(results: &[PatchTargetResult], root: &Path, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = results
        .iter()
        .filter(|r| {
            matches!(
                r.write,
                WriteResult::Written { .. } | WriteResult::WouldWrite { .. }
            )
        })
        .count();
    let missing: usize = results.iter().map(|r| r.missing_headings().count()).sum();

    println!(
        "{prefix}{} {} document(s) patched ({} written, {} unchanged)",
        "✓".green(),
        results.len(),
        written,
        results.len() - written,
    );
    if missing > 0 {
        println!("{} {missing} heading(s) not found", "!".yellow());
    }

    let rows: Vec<SectionRow> = results
        .iter()
        .flat_map(|r| {
            let document = relative(r.document(), root);
            r.sections.iter().map(move |s| SectionRow {
                document: document.clone(),
                section: s.marker.clone(),
                outcome: outcome_label(&s.outcome),
            })
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    for r in results {
        match &r.write {
            WriteResult::Written { path } => println!("  ✎  {}", relative(path, root)),
            WriteResult::WouldWrite { path } => println!("  ~  {}", relative(path, root)),
            WriteResult::Unchanged { path } => println!("  ·  {}", relative(path, root)),
        }
    }
}

fn outcome_label(outcome: &SectionOutcome) -> String {
    match outcome {
        SectionOutcome::Replaced { target_line, .. } => format!("replaced line {target_line}"),
        SectionOutcome::HeadingNotFound => "heading not found".to_string(),
        SectionOutcome::Disabled => "skipped (no outputs)".to_string(),
    }
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct PatchReportJson {
    documents: Vec<DocumentJson>,
}

#[derive(Serialize)]
struct DocumentJson {
    document: String,
    metadata: String,
    write: &'static str,
    sections: Vec<SectionJson>,
}

#[derive(Serialize)]
struct SectionJson {
    kind: String,
    marker: String,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_line: Option<usize>,
}

fn write_key(write: &WriteResult) -> &'static str {
    match write {
        WriteResult::Written { .. } => "written",
        WriteResult::Unchanged { .. } => "unchanged",
        WriteResult::WouldWrite { .. } => "would-write",
    }
}

fn print_json(results: &[PatchTargetResult], root: &Path) -> Result<()> {
    let payload = PatchReportJson {
        documents: results
            .iter()
            .map(|r| DocumentJson {
                document: relative(r.document(), root),
                metadata: relative(&r.metadata, root),
                write: write_key(&r.write),
                sections: r
                    .sections
                    .iter()
                    .map(|s| {
                        let (outcome, heading_line, target_line) = match s.outcome {
                            SectionOutcome::Replaced {
                                heading_line,
                                target_line,
                            } => ("replaced", Some(heading_line), Some(target_line)),
                            SectionOutcome::HeadingNotFound => ("heading-not-found", None, None),
                            SectionOutcome::Disabled => ("disabled", None, None),
                        };
                        SectionJson {
                            kind: s.kind.to_string(),
                            marker: s.marker.clone(),
                            outcome,
                            heading_line,
                            target_line,
                        }
                    })
                    .collect(),
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize patch JSON")?
    );
    Ok(())
}
