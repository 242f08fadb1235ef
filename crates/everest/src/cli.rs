//! Definitions of the command line interface for the `everest-cli` binary.

use clap::Parser;

use crate::commands;

#[derive(Debug, Parser)]
#[command(
    name = "everest-cli",
    about = "Everest: manage Percona Everest installations from the command line.",
    after_help = "For help with a specific command, see: `everest-cli help <command>`.",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalSettings,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every command. They only configure logging.
#[derive(Clone, Debug, Default, clap::Args)]
pub struct GlobalSettings {
    /// Enable debug logging.
    #[arg(short, long, global = true, env = "EVEREST_CLI_VERBOSE")]
    pub verbose: bool,

    /// Emit log records as JSON lines.
    #[arg(long, global = true, env = "EVEREST_CLI_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::Subcommand)]
pub enum Command {
    /// Print the version of the `everest-cli` binary.
    Version,
}

impl Command {
    /// The name the command is registered under in the
    /// [crate::commands::CommandTree].
    pub fn name(self) -> &'static str {
        match self {
            Command::Version => commands::version::NAME,
        }
    }
}
