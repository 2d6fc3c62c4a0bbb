//! actiondocs: render action metadata tables into documentation.
//!
//! # Usage
//!
//! ```text
//! actiondocs patch [--root DIR] [--config FILE] [--templates DIR] [--dry-run] [--strict] [--json]
//! actiondocs diff  [--root DIR] [--config FILE] [--templates DIR] [--exit-code]
//! actiondocs print <action.yml> [--format markdown|html] [--heading-level N]
//! ```

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{diff::DiffArgs, patch::PatchArgs, print::PrintArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "actiondocs",
    version,
    about = "Render action inputs/outputs tables and splice them into README files",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Patch the Inputs/Outputs tables of every configured document.
    Patch(PatchArgs),

    /// Show unified diff of what patch would write.
    Diff(DiffArgs),

    /// Print the rendered tables of one metadata file to stdout.
    Print(PrintArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Patch(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Print(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
