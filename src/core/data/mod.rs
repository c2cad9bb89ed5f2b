//! Data types shared by the extraction and reconciliation phases.

mod asset;
mod message;

pub use asset::{RemoteAsset, RemoteInventory};
pub use message::{DiscoveredMessages, MessageEntry, MessageId};
