//! Diff locally discovered messages against the remote inventory and apply
//! the missing creations and tags.
//!
//! The inventory is fetched once by the caller. Every creation and tag is
//! recorded back into it, so later entries of the same pass see the effect
//! of earlier ones without another round-trip.

use super::{
    data::{DiscoveredMessages, MessageEntry, RemoteAsset, RemoteInventory},
    event::{EventSink, SyncEvent},
};
use crate::{
    error::{SyncError, SyncResult},
    remote::{LocoApi, NewAsset},
};

/// Counters of the remote mutations applied by one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub assets_created: usize,
    pub plurals_created: usize,
    pub tags_attached: usize,
    /// Entries that needed no remote change at all.
    pub unchanged: usize,
}

impl ReconcileStats {
    pub fn mutations(&self) -> usize {
        self.assets_created + self.plurals_created + self.tags_attached
    }
}

pub struct ReconcileOutcome {
    pub stats: ReconcileStats,
    /// Inventory after every applied mutation.
    pub inventory: RemoteInventory,
}

pub struct Reconciler<'a, A: LocoApi + ?Sized> {
    api: &'a A,
    inventory: RemoteInventory,
    stats: ReconcileStats,
}

impl<'a, A: LocoApi + ?Sized> Reconciler<'a, A> {
    pub fn new(api: &'a A, inventory: RemoteInventory) -> Self {
        Self {
            api,
            inventory,
            stats: ReconcileStats::default(),
        }
    }

    /// Walk `messages` in discovery order, creating missing assets and
    /// attaching missing tags.
    ///
    /// Stops at the first failed call; mutations already applied stay applied.
    pub fn run(
        mut self,
        messages: &DiscoveredMessages,
        on_event: EventSink<'_>,
    ) -> SyncResult<ReconcileOutcome> {
        for entry in messages.iter() {
            self.reconcile_entry(entry, on_event)?;
        }
        Ok(ReconcileOutcome {
            stats: self.stats,
            inventory: self.inventory,
        })
    }

    fn reconcile_entry(&mut self, entry: &MessageEntry, on_event: EventSink<'_>) -> SyncResult<()> {
        let (mut asset, created) = match self.inventory.get(&entry.id) {
            Some(existing) => (existing.clone(), false),
            None => (self.create(entry, on_event)?, true),
        };

        let new_tags = missing_tags(entry, &asset);
        for tag in &new_tags {
            self.api.tag_asset(&asset.id, tag).map_err(|e| {
                SyncError::remote(format!("Tagging \"{}\" with \"{}\"", asset.id, tag), e)
            })?;
            asset.tags.insert(tag.clone());
            self.stats.tags_attached += 1;
            on_event(SyncEvent::TagAttached {
                asset_id: asset.id.clone(),
                tag: tag.clone(),
            });
        }

        if !created && new_tags.is_empty() {
            self.stats.unchanged += 1;
        }
        self.inventory.insert(entry.id.clone(), asset);
        Ok(())
    }

    fn create(&mut self, entry: &MessageEntry, on_event: EventSink<'_>) -> SyncResult<RemoteAsset> {
        let request = NewAsset::text(&entry.id);

        let created = match &entry.plural_parent_id {
            Some(parent) => {
                let parent_id = self
                    .inventory
                    .get(parent)
                    .map(|asset| asset.id.clone())
                    .ok_or_else(|| SyncError::OrphanPlural {
                        plural: entry.id.clone(),
                        parent: parent.clone(),
                    })?;
                let created = self
                    .api
                    .create_plural(&parent_id, &request)
                    .map_err(|e| SyncError::remote(format!("Uploading plural \"{}\"", entry.id), e))?;
                self.stats.plurals_created += 1;
                created
            }
            None => {
                let request = request.with_id(entry.explicit_id.clone());
                let created = self
                    .api
                    .create_asset(&request)
                    .map_err(|e| SyncError::remote(format!("Uploading asset \"{}\"", entry.id), e))?;
                self.stats.assets_created += 1;
                created
            }
        };

        let asset = RemoteAsset::from(created);
        on_event(SyncEvent::AssetCreated {
            name: entry.id.clone(),
            id: asset.id.clone(),
            plural_of: entry.plural_parent_id.clone(),
        });
        Ok(asset)
    }
}

/// Tags of `entry` the remote asset does not carry yet.
pub fn missing_tags(entry: &MessageEntry, asset: &RemoteAsset) -> Vec<String> {
    entry
        .tags
        .iter()
        .filter(|tag| !asset.tags.contains(*tag))
        .cloned()
        .collect()
}
