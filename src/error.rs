//! Error types shared by the extract and import flows.
//!
//! Every error is fatal to the flow that produced it: the CLI reports it and
//! exits with [`ExitStatus::Error`](crate::cli::ExitStatus::Error).

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// A failed call to the translation service.
///
/// `status` is `None` for transport failures (connection refused, timeout,
/// undecodable body). `message` carries the service's own error text when the
/// response body contained one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub status: Option<u16>,
    pub message: String,
}

impl RemoteError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{}: {}", status, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for RemoteError {}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("missing i18n API key, aborting")]
    MissingCredential,

    #[error("\"{}\" is not valid or could not be parsed: {reason}", path.display())]
    InvalidLocalFile { path: PathBuf, reason: String },

    #[error("{operation} failed: {source}")]
    RemoteRequestFailure {
        operation: String,
        #[source]
        source: RemoteError,
    },

    #[error("file system error at \"{}\": {source}", path.display())]
    FileSystemFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("plural \"{plural}\" refers to \"{parent}\", which has no remote asset yet")]
    OrphanPlural { plural: String, parent: String },

    #[error("{event} hook `{command}` failed: {status}")]
    HookFailed {
        event: &'static str,
        command: String,
        status: String,
    },
}

impl SyncError {
    pub fn remote(operation: impl Into<String>, source: RemoteError) -> Self {
        Self::RemoteRequestFailure {
            operation: operation.into(),
            source,
        }
    }

    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileSystemFailure {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_file(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::InvalidLocalFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
