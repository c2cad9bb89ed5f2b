//! Per-format knowledge of translation files.
//!
//! Each supported format is a variant of [`Format`] and implements
//! [`FormatAdapter`]:
//! - `gettext`: PO templates keyed by message text, with plural pairs
//! - `yaml`: Rails-style YAML keyed by dotted path
//! - `json`: one JSON document holding every language, keyed by dotted path

mod gettext;
mod json;
mod po;
mod yaml;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

pub use gettext::Gettext;
pub use json::{Json, bundle_translations, validate_json};
pub use yaml::Yaml;

use super::{
    data::MessageId,
    files::{WrittenFile, write_translations},
    layout::FileLayout,
};
use crate::{error::SyncResult, remote::ExportQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Gettext,
    Yaml,
    Json,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormatKind::Gettext => "gettext",
            FormatKind::Yaml => "yaml",
            FormatKind::Json => "json",
        })
    }
}

/// Translations of one language as returned by the export endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageExport {
    pub language: String,
    pub payload: Vec<u8>,
}

#[enum_dispatch]
pub trait FormatAdapter {
    fn kind(&self) -> FormatKind;

    /// File scanned during extraction.
    fn source_path(&self, layout: &FileLayout<'_>, _primary_language: &str) -> PathBuf {
        layout.named(&[layout.src_ext()])
    }

    /// Read the message identifiers of `path`.
    ///
    /// Key-value formats only read the subtree of `language`.
    fn extract_ids(&self, path: &Path, language: &str) -> SyncResult<Vec<MessageId>>;

    /// Whether ids double as the remote asset id.
    fn keyed(&self) -> bool {
        true
    }

    /// Export request for the assets tagged `tag`.
    fn export_query(&self, tag: &str) -> ExportQuery {
        ExportQuery::tagged(tag)
    }

    /// Parse `path` and fail with the file and parser error if it is
    /// malformed.
    fn validate(&self, path: &Path) -> SyncResult<()>;

    /// Whether every language of a file lands in one bundled file, so all
    /// exports must be downloaded before anything is written.
    fn bundles_languages(&self) -> bool {
        false
    }

    /// Write downloaded exports to their destination files.
    ///
    /// By default each language lands in its own file, verbatim.
    fn write_exports(
        &self,
        layout: &FileLayout<'_>,
        exports: &[LanguageExport],
    ) -> SyncResult<Vec<WrittenFile>> {
        exports
            .iter()
            .map(|export| {
                write_translations(&layout.destination(&export.language), &export.payload)
            })
            .collect()
    }
}

#[enum_dispatch(FormatAdapter)]
#[derive(Debug, Clone, Copy)]
pub enum Format {
    Gettext(Gettext),
    Yaml(Yaml),
    Json(Json),
}

impl From<FormatKind> for Format {
    fn from(kind: FormatKind) -> Self {
        match kind {
            FormatKind::Gettext => Format::Gettext(Gettext),
            FormatKind::Yaml => Format::Yaml(Yaml),
            FormatKind::Json => Format::Json(Json),
        }
    }
}

/// Join a parent key path and a child key with `.`.
fn child_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}
