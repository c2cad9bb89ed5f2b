use std::path::Path;

use serde_json::Value;

use super::{FormatAdapter, FormatKind, LanguageExport, child_key};
use crate::{
    core::{
        data::MessageId,
        files::{WrittenFile, read_source, write_translations},
        layout::FileLayout,
    },
    error::{SyncError, SyncResult},
};

/// A single JSON document holding every language:
/// `{ "en": { ... }, "fr": { ... } }`.
///
/// Imports download each language separately and bundle the fragments into
/// that document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl FormatAdapter for Json {
    fn kind(&self) -> FormatKind {
        FormatKind::Json
    }

    fn extract_ids(&self, path: &Path, language: &str) -> SyncResult<Vec<MessageId>> {
        let document = validate_json(path)?;
        let translations = document.get(language).ok_or_else(|| {
            SyncError::invalid_file(path, format!("no top-level \"{}\" key", language))
        })?;

        let mut ids = Vec::new();
        flatten_json(translations, "", &mut ids);
        Ok(ids)
    }

    fn validate(&self, path: &Path) -> SyncResult<()> {
        validate_json(path).map(|_| ())
    }

    fn bundles_languages(&self) -> bool {
        true
    }

    fn write_exports(
        &self,
        layout: &FileLayout<'_>,
        exports: &[LanguageExport],
    ) -> SyncResult<Vec<WrittenFile>> {
        let fragments: Vec<(&str, String)> = exports
            .iter()
            .map(|export| {
                let fragment = String::from_utf8_lossy(&export.payload).trim().to_string();
                (export.language.as_str(), fragment)
            })
            .collect();
        let bundle = bundle_translations(fragments.iter().map(|(l, f)| (*l, f.as_str())));

        let written = write_translations(&layout.bundle_path(), bundle.as_bytes())?;
        self.validate(&written.path)?;
        Ok(vec![written])
    }
}

/// Combine per-language JSON fragments into one object literal.
///
/// Pure string assembly: every fragment must already be a JSON value.
pub fn bundle_translations<'a>(fragments: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let members: Vec<String> = fragments
        .into_iter()
        .map(|(language, fragment)| format!("\"{}\": {}", language, fragment))
        .collect();
    format!("{{ {} }}", members.join(", "))
}

/// Parse `path` as JSON, failing with the file and parser error when it is
/// malformed.
pub fn validate_json(path: &Path) -> SyncResult<Value> {
    let content = read_source(path)?;
    serde_json::from_str(&content)
        .map_err(|e| SyncError::invalid_file(path, format!("not JSON or invalid: {}", e)))
}

fn flatten_json(value: &Value, prefix: &str, ids: &mut Vec<MessageId>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, &child_key(prefix, key), ids);
            }
        }
        _ if !prefix.is_empty() => ids.push(MessageId::single(prefix)),
        _ => {}
    }
}
