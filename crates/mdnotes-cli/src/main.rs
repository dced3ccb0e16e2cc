//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;
use mdnotes_cli::{Cli, logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    match mdnotes_cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
