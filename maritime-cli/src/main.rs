//! Maritime CLI - Command line tool for the maritime measurements API.

use clap::Parser;
use maritime_core::config::{ApiConfig, DEFAULT_API_BASE};

#[derive(Parser)]
#[command(
    name = "maritime-cli",
    version,
    about = "Maritime aerosol measurements toolkit"
)]
struct Cli {
    /// Base URL of the measurements API
    #[arg(long, env = "MARITIME_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    api_base: String,

    #[command(subcommand)]
    command: maritime_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    maritime_cmd::run(ApiConfig::new(&cli.api_base), cli.command).await
}
