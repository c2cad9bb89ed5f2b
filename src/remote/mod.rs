//! Client side of the Loco translation service API.
//!
//! [`LocoApi`] is the seam between the sync flows and the network: the
//! flows only ever talk to the trait, [`HttpClient`] implements it over
//! HTTP.

mod http;

use serde::{Deserialize, Serialize};

pub use http::HttpClient;

use crate::error::RemoteError;

/// An asset as listed by `GET assets.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Response to asset and plural creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedAsset {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Form body of an asset creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAsset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl NewAsset {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: "text",
            id: None,
        }
    }

    pub fn with_id(mut self, id: Option<String>) -> Self {
        self.id = id;
        self
    }
}

/// Query of an export request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportQuery {
    pub filter: String,
    pub order: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<&'static str>,
}

impl ExportQuery {
    /// Export every asset tagged `tag`, ordered by asset id.
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            filter: tag.into(),
            order: "id",
            index: None,
            format: None,
        }
    }
}

/// Operations the sync flows need from the translation service.
pub trait LocoApi {
    fn list_assets(&self) -> Result<Vec<AssetRecord>, RemoteError>;

    fn create_asset(&self, asset: &NewAsset) -> Result<CreatedAsset, RemoteError>;

    fn create_plural(&self, parent_id: &str, asset: &NewAsset)
    -> Result<CreatedAsset, RemoteError>;

    fn tag_asset(&self, asset_id: &str, tag: &str) -> Result<(), RemoteError>;

    /// Raw export of `language`, encoded as `ext` (`po`, `yml`, `json`...).
    fn export_locale(
        &self,
        language: &str,
        ext: &str,
        query: &ExportQuery,
    ) -> Result<Vec<u8>, RemoteError>;
}
