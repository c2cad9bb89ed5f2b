//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan local translation files and upload missing assets and tags
//! - `import`: Download translations and write them to local files
//! - `validate`: Parse every configured source file without touching the service
//! - `init`: Initialize locosync configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::API_KEY_ENV;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Validate(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Directory every translation file path is resolved against (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Language to sync, repeatable; the first one is the primary language
    /// (overrides config file)
    #[arg(short = 'l', long = "language")]
    pub languages: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments of commands talking to the translation service.
#[derive(Debug, Clone, Default, Args)]
pub struct RemoteArgs {
    /// API key of the translation service (overrides config file)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the translation service API (overrides config file)
    #[arg(long)]
    pub api_url: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    #[command(flatten)]
    pub common: CommonArgs,
    #[command(flatten)]
    pub remote: RemoteArgs,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan translation files and upload new assets and tags
    Extract(ExtractCommand),
    /// Download translations for every configured file and language
    Import(ImportCommand),
    /// Check that every configured source file parses
    Validate(ValidateCommand),
    /// Initialize a new .locosync.json configuration file
    Init,
}
