use anyhow::Result;

use super::super::{args::ImportCommand, report::Progress};
use super::{CommandResult, CommandSummary, context::SyncContext};
use crate::sync;

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let ctx = SyncContext::new(&cmd.common)?;
    let client = ctx.client(&cmd.remote)?;

    let mut progress = Progress::new(ctx.verbose);
    let summary = sync::import(&ctx.config, &client, &mut |event| progress.on_event(&event))?;

    Ok(CommandResult::success(CommandSummary::Import(summary)))
}
