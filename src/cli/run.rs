use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, extract::extract, import::import, init::init, validate::validate,
    },
};

/// Dispatches to the command handler matching the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit status
/// - `Err` if the command fails (config error, missing API key, service or
///   file error)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Import(cmd)) => import(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
