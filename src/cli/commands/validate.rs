use anyhow::Result;

use super::super::{args::ValidateCommand, report::Progress};
use super::{CommandResult, CommandSummary, ValidateSummary, context::SyncContext};
use crate::sync::validate_sources;

/// Parse every configured source file. Needs no API key.
pub fn validate(cmd: ValidateCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;

    let mut progress = Progress::new(ctx.verbose);
    let file_count = validate_sources(&ctx.config, &mut |event| progress.on_event(&event))?;

    Ok(CommandResult::success(CommandSummary::Validate(ValidateSummary { file_count })))
}
