//! Command routing, user-facing output and exit codes

pub mod app;
pub mod commands;

pub use app::{Cli, Commands};

use clap::error::{ContextKind, ErrorKind};
use colored::*;
use log::debug;
use std::process::ExitCode;

use crate::auth::XsuaaAuthClient;
use crate::config::ConfigStore;
use crate::error::WzError;
use crate::ui::DialoguerPrompter;
use crate::workzone::WorkZoneClient;

/// Dispatch one parsed invocation and map its outcome to an exit code.
pub async fn run(cli: Cli) -> ExitCode {
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Init(args) => {
            let result = match ConfigStore::default_location() {
                Ok(store) => commands::init_command(args, &store, &mut DialoguerPrompter).await,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                eprintln!("{}", "❌ Initialization failed:".red());
                report_error(&e);
                return ExitCode::FAILURE;
            }
        }
        Commands::ClearCache => {
            let result = match ConfigStore::default_location() {
                Ok(store) => {
                    commands::clear_cache_command(
                        &store,
                        &XsuaaAuthClient::new(),
                        &WorkZoneClient::new(),
                    )
                    .await
                }
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                eprintln!("{}", "❌ Cache clear failed:".red());
                report_error(&e);
                return ExitCode::FAILURE;
            }
        }
        Commands::Status => {
            let store = ConfigStore::default_location()
                .inspect_err(|e| debug!("Config location unavailable: {}", e))
                .ok();
            commands::status_command(store.as_ref());
        }
    }

    ExitCode::SUCCESS
}

/// Print a diagnostic for a failed command, including HTTP details and hints.
pub fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<WzError>() {
        Some(WzError::CacheClear(failure)) | Some(WzError::Authentication(failure)) => {
            eprintln!("{}", format!("   {:#}", err).red());
            for line in failure.diagnostic().lines() {
                eprintln!("{}", format!("   {}", line).red());
            }
        }
        Some(not_found @ WzError::ConfigNotFound { .. }) => {
            eprintln!("{}", format!("   {}", not_found).red());
            eprintln!();
            eprintln!(
                "{}",
                "💡 Hint: Run \"wztools init\" first to set up your configuration".yellow()
            );
        }
        _ => eprintln!("{}", format!("   {:#}", err).red()),
    }
}

/// Handle a clap parse failure. Unknown subcommands list the valid ones and
/// exit with 1; help, version and other usage errors keep clap's behavior.
pub fn handle_parse_error(err: clap::Error) -> ExitCode {
    if err.kind() != ErrorKind::InvalidSubcommand {
        err.exit();
    }

    let invalid = err
        .get(ContextKind::InvalidSubcommand)
        .map(|v| v.to_string())
        .unwrap_or_default();

    eprintln!("{} {}", "❌ Invalid command:".red(), invalid);
    println!();
    println!("{}", "Available commands:".blue());
    println!("{}", "  wztools init        - Initialize configuration".dimmed());
    println!("{}", "  wztools clear_cache - Clear Work Zone cache".dimmed());
    println!("{}", "  wztools status      - Show configuration status".dimmed());
    println!();
    println!("{}", "Use \"wztools --help\" for more information".blue());

    ExitCode::FAILURE
}
