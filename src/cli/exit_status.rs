use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the flow ran to completion
/// - `Failure` (1): the command refused to run, e.g. `init` over an existing file
/// - `Error` (2): the flow aborted on a config, credential, file or service error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
