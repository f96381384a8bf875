//! Filestitch CLI Binary
//!
//! Merge files, directories, and zip archives into a single document.

use anyhow::Context;
use clap::Parser;
use filestitch::logging::init_logging;
use filestitch::tooling::cli::{Cli, CliContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let context = CliContext::new(cli.workspace.clone(), cli.config.clone())
        .context("Error initializing workspace")?;

    let logging = cli.logging_config(&context.config().logging);
    init_logging(Some(&logging)).context("Error initializing logging")?;

    let output = context.execute(&cli.command).await?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
