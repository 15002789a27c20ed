//! `pkgscan`: validate package.json manifests and list monorepo workspaces.

mod cli;
mod commands;
mod errors;
mod output;
mod tracing;

use crate::cli::Cli;
use crate::tracing::TracingConfig;
use clap::Parser;

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    if let Err(error) = run_main().await {
        eprintln!("{error:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> miette::Result<()> {
    let cli = Cli::parse();

    let tracing_config = TracingConfig {
        format: cli.effective_log_format(),
        level: cli.level.into(),
    };
    crate::tracing::init_tracing(tracing_config)?;

    ::tracing::debug!(command = ?cli.command, root = %cli.root.display(), "Parsed command line");

    let text = commands::execute(cli.command, &cli.root).await?;
    output::print_output(&text)?;

    Ok(())
}
