use std::path::PathBuf;

/// Progress notifications emitted while a flow runs.
///
/// The core never prints; callers render these however they like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    StaleFileRemoved { path: PathBuf },
    HookStarted { event: &'static str, command: String },
    FileScanned { path: PathBuf, tag: String, ids: usize },
    InventoryFetched { assets: usize },
    AssetCreated {
        name: String,
        id: String,
        plural_of: Option<String>,
    },
    TagAttached { asset_id: String, tag: String },
    LocaleDownloaded { language: String, tag: String },
    DirectoryCreated { path: PathBuf },
    FileWritten { path: PathBuf },
    FileValidated { path: PathBuf },
}

/// Sink receiving [`SyncEvent`]s.
pub type EventSink<'a> = &'a mut dyn FnMut(SyncEvent);
