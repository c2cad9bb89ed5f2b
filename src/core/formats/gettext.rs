use std::path::Path;

use super::{
    FormatAdapter, FormatKind,
    po::{PoEntry, parse_po},
};
use crate::{
    core::{data::MessageId, files::read_source},
    error::{SyncError, SyncResult},
    remote::ExportQuery,
};

/// PO templates: ids are the `msgid` texts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gettext;

impl FormatAdapter for Gettext {
    fn kind(&self) -> FormatKind {
        FormatKind::Gettext
    }

    fn extract_ids(&self, path: &Path, _language: &str) -> SyncResult<Vec<MessageId>> {
        let ids = parse_entries(path)?
            .into_iter()
            .filter(|entry| !entry.msgid.trim().is_empty())
            .map(|entry| match entry.msgid_plural {
                Some(plural) if !plural.trim().is_empty() => {
                    MessageId::plural(entry.msgid, plural)
                }
                _ => MessageId::single(entry.msgid),
            })
            .collect();
        Ok(ids)
    }

    fn keyed(&self) -> bool {
        false
    }

    fn validate(&self, path: &Path) -> SyncResult<()> {
        parse_entries(path).map(|_| ())
    }

    fn export_query(&self, tag: &str) -> ExportQuery {
        ExportQuery {
            index: Some("name"),
            ..ExportQuery::tagged(tag)
        }
    }
}

fn parse_entries(path: &Path) -> SyncResult<Vec<PoEntry>> {
    let content = read_source(path)?;
    parse_po(&content).map_err(|e| SyncError::invalid_file(path, e))
}
