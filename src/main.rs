//! `handoff` command-line entry point.
//!
//! Prints exactly one JSON document on stdout. Logs go to stderr and are
//! filtered with `HANDOFF_LOG` (default `warn`).

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use handoff::{DocumentKind, HandoffError, RejectionReport, Verdict};
use tracing_subscriber::EnvFilter;

/// Validates pipeline handoff documents.
#[derive(Parser, Debug)]
#[command(name = "handoff", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a builder or inspector result and print its verdict.
    Check(CheckArgs),
    /// Wrap a rendered verdict into a rejection report.
    Reject(RejectArgs),
}

#[derive(clap::Args, Debug)]
struct CheckArgs {
    /// Document kind: `builder` or `inspector`.
    #[arg(long)]
    kind: DocumentKind,

    /// Document to validate. Defaults to `<worktree>/<kind>_result.json`.
    #[arg(long)]
    file: Option<PathBuf>,

    /// Worktree whose root holds the result file.
    #[arg(long, env = "HANDOFF_WORKTREE", default_value = ".")]
    worktree: PathBuf,

    /// Pretty-print the verdict.
    #[arg(long)]
    pretty: bool,

    /// Exit with status 1 unless the verdict is `valid`.
    #[arg(long)]
    fail_on_invalid: bool,
}

#[derive(clap::Args, Debug)]
struct RejectArgs {
    #[arg(long)]
    status: String,

    #[arg(long)]
    reason: String,

    /// The verdict JSON being rejected.
    #[arg(long)]
    raw_json: String,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("HANDOFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Reject(args) => {
            let report = RejectionReport::from_raw(args.status, args.reason, &args.raw_json);
            emit(&report.to_json()?, "rejection report")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let verdict = match &args.file {
        Some(file) => handoff::check_file(args.kind, file),
        None => handoff::check_worktree(args.kind, &args.worktree),
    };
    tracing::info!(
        kind = %args.kind,
        status = %verdict.status,
        errors = verdict.errors.len(),
        "handoff verdict"
    );

    let rendered = if args.pretty {
        verdict.to_json_pretty()?
    } else {
        verdict.to_json()?
    };
    emit(&rendered, "verdict")?;

    Ok(exit_code(&verdict, args.fail_on_invalid))
}

fn exit_code(verdict: &Verdict, fail_on_invalid: bool) -> ExitCode {
    if fail_on_invalid && !verdict.is_valid() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn emit(rendered: &str, what: &'static str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered)
        .map_err(|source| HandoffError::Write { what, source })
        .with_context(|| format!("emitting {}", what))?;
    Ok(())
}
