use std::{path::Path, process::Command};

use crate::{
    core::{EventSink, SyncEvent},
    error::{SyncError, SyncResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    BeforeExtract,
    AfterImport,
}

impl HookEvent {
    pub fn name(self) -> &'static str {
        match self {
            HookEvent::BeforeExtract => "beforeExtract",
            HookEvent::AfterImport => "afterImport",
        }
    }
}

/// Run every command of `event` through `sh -c` in `root`, in order.
///
/// The first command exiting non-zero aborts the flow.
pub fn run_hooks(
    event: HookEvent,
    commands: &[String],
    root: &Path,
    on_event: EventSink<'_>,
) -> SyncResult<()> {
    for command in commands {
        on_event(SyncEvent::HookStarted {
            event: event.name(),
            command: command.clone(),
        });

        let failed = |status: String| SyncError::HookFailed {
            event: event.name(),
            command: command.clone(),
            status,
        };

        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(root)
            .status()
            .map_err(|e| failed(e.to_string()))?;
        if !status.success() {
            return Err(failed(status.to_string()));
        }
    }
    Ok(())
}
