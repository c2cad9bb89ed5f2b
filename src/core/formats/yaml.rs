use std::path::{Path, PathBuf};

use serde_yaml::Value;

use super::{FormatAdapter, FormatKind, child_key};
use crate::{
    core::{data::MessageId, files::read_source, layout::FileLayout},
    error::{SyncError, SyncResult},
    remote::ExportQuery,
};

/// Rails-style YAML: `<language>: { nested: { keys: ... } }`, one file per
/// language.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl FormatAdapter for Yaml {
    fn kind(&self) -> FormatKind {
        FormatKind::Yaml
    }

    fn source_path(&self, layout: &FileLayout<'_>, primary_language: &str) -> PathBuf {
        layout.named(&[primary_language, layout.src_ext()])
    }

    fn extract_ids(&self, path: &Path, language: &str) -> SyncResult<Vec<MessageId>> {
        let document = parse_yaml(path)?;
        let translations = document.get(language).ok_or_else(|| {
            SyncError::invalid_file(path, format!("no top-level \"{}\" key", language))
        })?;

        let mut ids = Vec::new();
        flatten_yaml(translations, "", &mut ids);
        Ok(ids)
    }

    fn export_query(&self, tag: &str) -> ExportQuery {
        ExportQuery {
            format: Some("rails"),
            ..ExportQuery::tagged(tag)
        }
    }

    fn validate(&self, path: &Path) -> SyncResult<()> {
        parse_yaml(path).map(|_| ())
    }
}

fn parse_yaml(path: &Path) -> SyncResult<Value> {
    let content = read_source(path)?;
    serde_yaml::from_str(&content).map_err(|e| SyncError::invalid_file(path, e))
}

fn flatten_yaml(value: &Value, prefix: &str, ids: &mut Vec<MessageId>) {
    match value {
        Value::Mapping(map) => {
            for (key, val) in map {
                if let Some(key) = key_text(key) {
                    flatten_yaml(val, &child_key(prefix, &key), ids);
                }
            }
        }
        Value::Tagged(tagged) => flatten_yaml(&tagged.value, prefix, ids),
        _ if !prefix.is_empty() => ids.push(MessageId::single(prefix)),
        _ => {}
    }
}

fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
