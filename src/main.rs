use clap::Parser;
use log::info;
use std::process::ExitCode;

use wztools::cli::{self, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Quiet by default; RUST_LOG=debug traces each request stage.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return cli::handle_parse_error(err),
    };
    info!("Starting wztools");

    cli::run(cli).await
}
