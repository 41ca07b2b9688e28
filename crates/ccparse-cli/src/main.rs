//! CLI application for credit-card statement parsing.

mod commands;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Credit-card statement parser - Extract issuer, card suffix, billing
/// cycle, due date and total due from statement PDFs
#[derive(Parser)]
#[command(name = "ccparse")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  ccparse statement.pdf    Parse a single file\n  ccparse statements/      Parse all PDFs in a directory")]
struct Cli {
    /// Statement PDF, or a directory of statement PDFs
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Console output carries the results; logs default to warnings only
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let Some(path) = cli.path else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = commands::config::load()?;
    commands::run(&path, &config)
}
