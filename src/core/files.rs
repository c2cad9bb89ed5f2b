//! File system helpers for reading sources and writing imported translations.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{SyncError, SyncResult};

/// Placeholder written into newly created directories so they survive in
/// version control while empty.
pub const KEEP_FILE_NAME: &str = ".keep";

/// Outcome of [`write_translations`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// Directory created to hold the file, if it did not exist yet.
    pub created_dir: Option<PathBuf>,
}

pub fn read_source(path: &Path) -> SyncResult<String> {
    fs::read_to_string(path).map_err(|e| SyncError::fs(path, e))
}

/// Create `dir` (and its parents) and drop a `.keep` file into it.
///
/// Returns `None` when the directory already existed.
pub fn create_directory(dir: &Path) -> SyncResult<Option<PathBuf>> {
    if dir.as_os_str().is_empty() || dir.is_dir() {
        return Ok(None);
    }
    fs::create_dir_all(dir).map_err(|e| SyncError::fs(dir, e))?;

    let keep = dir.join(KEEP_FILE_NAME);
    fs::write(&keep, b"").map_err(|e| SyncError::fs(&keep, e))?;

    Ok(Some(dir.to_path_buf()))
}

/// Write an exported payload verbatim to `path`, replacing any previous
/// content.
pub fn write_translations(path: &Path, payload: &[u8]) -> SyncResult<WrittenFile> {
    let created_dir = match path.parent() {
        Some(parent) => create_directory(parent)?,
        None => None,
    };
    fs::write(path, payload).map_err(|e| SyncError::fs(path, e))?;

    Ok(WrittenFile {
        path: path.to_path_buf(),
        created_dir,
    })
}

/// Delete a previously generated file. Missing files are not an error.
pub fn remove_stale(path: &Path) -> SyncResult<bool> {
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| SyncError::fs(path, e))?;
    Ok(true)
}
