//! # Kanri CLI
//!
//! Command-line interface for the Kanri Kanban boards.
//!
//! ## Usage
//!
//! ```bash
//! kanri serve    # Start the web server (runs migrations automatically)
//! kanri migrate  # Run database migrations
//! kanri --help   # Show help
//! ```

mod commands;
mod server;

use clap::{CommandFactory as _, Parser};
use commands::Commands;
use error::Result;

/// Kanri - Kanban boards for small teams
#[derive(Parser, Debug)]
#[command(name = "kanri")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "KANRI_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, &cli.log_format, None)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    logging::info!(target: "app", command = ?cli.command, "Kanri CLI starting...");

    match cli.command {
        Commands::Serve(args) => server::serve(&args).await?,
        Commands::Migrate(args) => commands::migrate::migrate(args).await?,
        Commands::Completions(args) => commands::completions::completions(args.shell, &mut Cli::command())?,
        Commands::Validate => commands::validate::validate()?,
    }

    logging::info!(target: "app", "Kanri CLI completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["kanri", "serve", "--host", "127.0.0.1", "--port", "8080"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, "127.0.0.1");
                assert_eq!(args.port, 8080);
                assert!(!args.skip_seeds);
            },
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_cli_parse_migrate_rollback() {
        let cli = Cli::parse_from(["kanri", "migrate", "--rollback"]);
        match cli.command {
            Commands::Migrate(args) => {
                assert!(args.rollback);
                assert!(!args.dry_run);
                assert!(!args.seed);
            },
            _ => panic!("expected migrate command"),
        }
    }

    #[test]
    fn test_cli_parse_completions() {
        let cli = Cli::parse_from(["kanri", "completions", "bash"]);
        assert!(matches!(cli.command, Commands::Completions(_)));
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::parse_from(["kanri", "validate"]);
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn test_cli_command_builds() {
        Cli::command().debug_assert();
    }
}
