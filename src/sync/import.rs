use std::slice;

use super::hooks::{HookEvent, run_hooks};
use crate::{
    config::Config,
    core::{
        EventSink, FileLayout, Format, FormatAdapter, LanguageExport, SyncEvent,
        files::WrittenFile,
    },
    error::{SyncError, SyncResult},
    remote::LocoApi,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub downloads: usize,
    pub files_written: usize,
    pub directories_created: usize,
}

/// Download every configured file in every language and write the exports
/// to their local paths, then run the `afterImport` hooks.
///
/// Each language is written as soon as it is downloaded, except for formats
/// bundling all languages into one file, which are written once every
/// language is in. Existing files are overwritten. The first failed download
/// or write aborts the flow; files written before it are left in place.
pub fn import<A: LocoApi + ?Sized>(
    config: &Config,
    api: &A,
    on_event: EventSink<'_>,
) -> SyncResult<ImportSummary> {
    let root = config.root_path();
    let mut summary = ImportSummary::default();

    for file in &config.files {
        let format = Format::from(file.format);
        let layout = FileLayout::new(&root, config.formats.get(file.format), &file.name);
        let tag = file.tag();
        let query = format.export_query(&tag);
        let bundled = format.bundles_languages();

        let mut pending = Vec::new();
        for language in &config.languages {
            let payload = api
                .export_locale(language, layout.api_ext(), &query)
                .map_err(|e| {
                    SyncError::remote(format!("Download of \"{}\" {} assets", language, tag), e)
                })?;
            summary.downloads += 1;
            on_event(SyncEvent::LocaleDownloaded {
                language: language.clone(),
                tag: tag.clone(),
            });

            let export = LanguageExport {
                language: language.clone(),
                payload,
            };
            if bundled {
                pending.push(export);
            } else {
                let written = format.write_exports(&layout, slice::from_ref(&export))?;
                record_written(written, &mut summary, on_event);
            }
        }

        if bundled {
            let written = format.write_exports(&layout, &pending)?;
            record_written(written, &mut summary, on_event);
        }
    }

    run_hooks(
        HookEvent::AfterImport,
        &config.hooks.after_import,
        &root,
        on_event,
    )?;

    Ok(summary)
}

fn record_written(written: Vec<WrittenFile>, summary: &mut ImportSummary, on_event: EventSink<'_>) {
    for file in written {
        if let Some(path) = file.created_dir {
            summary.directories_created += 1;
            on_event(SyncEvent::DirectoryCreated { path });
        }
        summary.files_written += 1;
        on_event(SyncEvent::FileWritten { path: file.path });
    }
}
