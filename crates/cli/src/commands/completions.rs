//! # CLI Completions Command
//!
//! Shell completions generation for the Kanri CLI.

use clap::Command;
use clap_complete::Shell;
use error::Result;

/// Generates shell completions for the CLI.
pub fn completions(shell: Shell, cmd: &mut Command) -> Result<()> {
    clap_complete::generate(shell, cmd, "kanri", &mut std::io::stdout());
    Ok(())
}
