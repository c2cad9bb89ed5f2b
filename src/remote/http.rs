use chrono::Utc;
use reqwest::{
    StatusCode, Url,
    blocking::{Client, RequestBuilder, Response},
};
use serde::{Deserialize, de::DeserializeOwned};

use super::{AssetRecord, CreatedAsset, ExportQuery, LocoApi, NewAsset};
use crate::error::{RemoteError, SyncError, SyncResult};

/// Blocking HTTP implementation of [`LocoApi`].
///
/// Every request is authenticated with the `key` query parameter. Requests
/// run one at a time with the transport's default timeout.
pub struct HttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpClient {
    /// Fails with [`SyncError::MissingCredential`] when `api_key` is absent or
    /// blank, so no request is ever sent without one.
    pub fn new(api_url: &str, api_key: Option<&str>) -> SyncResult<Self> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SyncError::MissingCredential)?;

        let base_url = Url::parse(api_url).map_err(|e| {
            SyncError::remote(
                format!("Parse API URL \"{}\"", api_url),
                RemoteError::transport(e.to_string()),
            )
        })?;

        let client = Client::builder()
            .user_agent(concat!("locosync/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SyncError::remote("Build HTTP client", RemoteError::transport(e.to_string())))?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Join `segments` onto the base URL, escaping each one.
    fn url(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                RemoteError::transport(format!("\"{}\" cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get(&self, segments: &[&str]) -> Result<RequestBuilder, RemoteError> {
        let ts = Utc::now().to_rfc3339();
        Ok(self
            .client
            .get(self.url(segments)?)
            .query(&[("key", self.api_key.as_str()), ("ts", ts.as_str())]))
    }

    fn post(&self, segments: &[&str]) -> Result<RequestBuilder, RemoteError> {
        Ok(self
            .client
            .post(self.url(segments)?)
            .query(&[("key", self.api_key.as_str())]))
    }
}

fn send(request: RequestBuilder) -> Result<Response, RemoteError> {
    let response = request
        .send()
        .map_err(|e| RemoteError::transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(RemoteError::status(status.as_u16(), error_text(&body, status)))
}

fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, RemoteError> {
    send(request)?
        .json()
        .map_err(|e| RemoteError::transport(format!("unexpected response: {}", e)))
}

/// The service's own error text, falling back to the raw body.
fn error_text(body: &str, status: StatusCode) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return parsed.error;
    }
    let body = body.trim();
    if body.is_empty() {
        status.canonical_reason().unwrap_or("request failed").to_string()
    } else {
        body.to_string()
    }
}

impl LocoApi for HttpClient {
    fn list_assets(&self) -> Result<Vec<AssetRecord>, RemoteError> {
        send_json(self.get(&["assets.json"])?)
    }

    fn create_asset(&self, asset: &NewAsset) -> Result<CreatedAsset, RemoteError> {
        send_json(self.post(&["assets.json"])?.form(asset))
    }

    fn create_plural(
        &self,
        parent_id: &str,
        asset: &NewAsset,
    ) -> Result<CreatedAsset, RemoteError> {
        send_json(
            self.post(&["assets", parent_id, "plurals.json"])?
                .form(asset),
        )
    }

    fn tag_asset(&self, asset_id: &str, tag: &str) -> Result<(), RemoteError> {
        send(
            self.post(&["assets", asset_id, "tags.json"])?
                .form(&[("name", tag)]),
        )?;
        Ok(())
    }

    fn export_locale(
        &self,
        language: &str,
        ext: &str,
        query: &ExportQuery,
    ) -> Result<Vec<u8>, RemoteError> {
        let file = format!("{}.{}", language, ext);
        let bytes = send(self.get(&["export", "locale", &file])?.query(query))?
            .bytes()
            .map_err(|e| RemoteError::transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
