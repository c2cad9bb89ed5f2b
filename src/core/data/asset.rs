//! Snapshot of the assets known to the translation service.

use std::collections::HashMap;

use indexmap::IndexSet;

use crate::remote::{AssetRecord, CreatedAsset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    pub id: String,
    pub tags: IndexSet<String>,
}

impl From<CreatedAsset> for RemoteAsset {
    fn from(created: CreatedAsset) -> Self {
        Self {
            id: created.id,
            tags: created.tags.into_iter().collect(),
        }
    }
}

/// Remote assets indexed by name.
///
/// Fetched once per run and then kept current in memory as assets are
/// created and tagged; it is never re-fetched.
#[derive(Debug, Default, Clone)]
pub struct RemoteInventory {
    assets: HashMap<String, RemoteAsset>,
}

impl RemoteInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = AssetRecord>) -> Self {
        let assets = records
            .into_iter()
            .map(|record| {
                (
                    record.name,
                    RemoteAsset {
                        id: record.id,
                        tags: record.tags.into_iter().collect(),
                    },
                )
            })
            .collect();
        Self { assets }
    }

    pub fn get(&self, name: &str) -> Option<&RemoteAsset> {
        self.assets.get(name)
    }

    pub fn insert(&mut self, name: String, asset: RemoteAsset) {
        self.assets.insert(name, asset);
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
