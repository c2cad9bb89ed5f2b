use super::hooks::{HookEvent, run_hooks};
use crate::{
    config::Config,
    core::{
        DiscoveredMessages, EventSink, FileLayout, Format, FormatAdapter, ReconcileStats,
        Reconciler, RemoteInventory, SyncEvent, files::remove_stale,
    },
    error::{SyncError, SyncResult},
    remote::LocoApi,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub stale_files_removed: usize,
    pub files_scanned: usize,
    pub messages: usize,
    pub remote_assets: usize,
    pub stats: ReconcileStats,
}

/// Scan every configured file and bring the remote assets and tags in line
/// with what was found.
///
/// Runs stale-file removal, the `beforeExtract` hooks, the scan, one
/// inventory fetch and the reconciliation pass, stopping at the first error.
pub fn extract<A: LocoApi + ?Sized>(
    config: &Config,
    api: &A,
    on_event: EventSink<'_>,
) -> SyncResult<ExtractSummary> {
    let root = config.root_path();

    let stale_files_removed = remove_stale_files(config, on_event)?;
    run_hooks(
        HookEvent::BeforeExtract,
        &config.hooks.before_extract,
        &root,
        on_event,
    )?;

    let messages = collect_messages(config, on_event)?;

    let records = api
        .list_assets()
        .map_err(|e| SyncError::remote("Grabbing the list of existing assets", e))?;
    let inventory = RemoteInventory::from_records(records);
    let remote_assets = inventory.len();
    on_event(SyncEvent::InventoryFetched {
        assets: remote_assets,
    });

    let outcome = Reconciler::new(api, inventory).run(&messages, on_event)?;

    Ok(ExtractSummary {
        stale_files_removed,
        files_scanned: config.files.len(),
        messages: messages.len(),
        remote_assets,
        stats: outcome.stats,
    })
}

/// Delete the generated source files of formats marked `delete`.
pub fn remove_stale_files(config: &Config, on_event: EventSink<'_>) -> SyncResult<usize> {
    let root = config.root_path();
    let mut removed = 0;

    for file in &config.files {
        let settings = config.formats.get(file.format);
        if !settings.delete {
            continue;
        }
        let layout = FileLayout::new(&root, settings, &file.name);
        let path = Format::from(file.format).source_path(&layout, config.primary_language());
        if remove_stale(&path)? {
            removed += 1;
            on_event(SyncEvent::StaleFileRemoved { path });
        }
    }

    Ok(removed)
}

/// Read the ids of every configured file into one mapping, unioning the
/// tags of ids found in several files.
pub fn collect_messages(config: &Config, on_event: EventSink<'_>) -> SyncResult<DiscoveredMessages> {
    let root = config.root_path();
    let language = config.primary_language();
    let mut messages = DiscoveredMessages::new();

    for file in &config.files {
        let format = Format::from(file.format);
        let layout = FileLayout::new(&root, config.formats.get(file.format), &file.name);
        let path = format.source_path(&layout, language);
        let tag = file.tag();

        let ids = format.extract_ids(&path, language)?;
        on_event(SyncEvent::FileScanned {
            path: path.clone(),
            tag: tag.clone(),
            ids: ids.len(),
        });
        messages.extend(ids, &tag, format.keyed());
    }

    Ok(messages)
}

/// Pre-flight parse of every configured source file.
pub fn validate_sources(config: &Config, on_event: EventSink<'_>) -> SyncResult<usize> {
    let root = config.root_path();
    let mut validated = 0;

    for file in &config.files {
        let format = Format::from(file.format);
        let layout = FileLayout::new(&root, config.formats.get(file.format), &file.name);
        let path = format.source_path(&layout, config.primary_language());
        format.validate(&path)?;
        validated += 1;
        on_event(SyncEvent::FileValidated { path });
    }

    Ok(validated)
}
