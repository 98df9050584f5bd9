//! # CLI Commands
//!
//! Implementation of CLI commands for the Kanri application.

pub mod completions;
pub mod migrate;
pub mod validate;

use clap::{Args, Subcommand};

/// Available commands for the Kanri CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "KANRI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port to bind to
    #[arg(short, long, env = "KANRI_PORT", default_value = "8080")]
    pub port: u16,

    /// Skip seeding demo data after migrations
    #[arg(long, env = "KANRI_SKIP_SEEDS")]
    pub skip_seeds: bool,
}

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Rollback the last migration
    #[arg(long)]
    pub rollback: bool,

    /// Print applied and pending migrations without changing anything
    #[arg(long, conflicts_with = "rollback")]
    pub dry_run: bool,

    /// Seed demo data after migrating
    #[arg(long)]
    pub seed: bool,
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
