use super::super::exit_status::ExitStatus;
use crate::sync::{ExtractSummary, ImportSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Import(ImportSummary),
    Validate(ValidateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ValidateSummary {
    pub file_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running locosync commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_status: ExitStatus::Success,
        }
    }
}
