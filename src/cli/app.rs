use super::commands::InitArgs;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "wztools")]
#[command(version)]
#[command(about = "CLI tool for managing SAP Work Zone HTML5 content provider cache refresh")]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize wztools configuration
    Init(InitArgs),
    /// Clear Work Zone HTML5 content provider cache
    #[command(name = "clear_cache", alias = "clear-cache")]
    ClearCache,
    /// Show current configuration status
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clear_cache_accepts_both_spellings() {
        for name in ["clear_cache", "clear-cache"] {
            let cli = Cli::try_parse_from(["wztools", name]).unwrap();
            assert!(matches!(cli.command, Commands::ClearCache));
        }
    }

    #[test]
    fn init_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "wztools",
            "init",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "--user-id",
            "user",
            "--password",
            "pw",
            "--xsuaa-url",
            "https://acme.authentication.eu10.hana.ondemand.com",
            "--workzone-host",
            "acme.dt.launchpad.cfapps.eu10.hana.ondemand.com",
            "--subdomain",
            "acme",
            "--subaccount-id",
            "sub-1",
        ])
        .unwrap();

        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.client_id.as_deref(), Some("id"));
                assert_eq!(args.subaccount_id.as_deref(), Some("sub-1"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_subcommand_is_invalid_subcommand_error() {
        let err = Cli::try_parse_from(["wztools", "purge"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }
}
