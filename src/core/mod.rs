//! Reconciliation engine and file format knowledge.
//!
//! ## Module Structure
//!
//! - `data`: discovered messages and the remote inventory snapshot
//! - `formats`: per-format id extraction and export writing
//! - `layout`: on-disk paths of a configured file entry
//! - `reconcile`: diff of local messages against remote assets
//! - `files`: reading sources, writing imports, `.keep` placeholders
//! - `tag`: asset tag derivation

pub mod data;
pub mod event;
pub mod files;
pub mod formats;
pub mod layout;
pub mod reconcile;
mod tag;

pub use data::{DiscoveredMessages, MessageEntry, MessageId, RemoteAsset, RemoteInventory};
pub use event::{EventSink, SyncEvent};
pub use formats::{Format, FormatAdapter, FormatKind, LanguageExport};
pub use layout::FileLayout;
pub use reconcile::{ReconcileOutcome, ReconcileStats, Reconciler};
pub use tag::asset_tag;
