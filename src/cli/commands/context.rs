use std::env;

use anyhow::{Context as _, Result};

use super::super::args::{CommonArgs, RemoteArgs};
use crate::{
    config::{Config, load_config},
    remote::HttpClient,
};

/// Configuration of one command run, with command-line overrides applied.
pub struct SyncContext {
    pub config: Config,
    pub verbose: bool,
}

impl SyncContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        let mut config = load_config(&cwd)?.config;

        if let Some(root) = &common.root {
            config.root = root.to_string_lossy().to_string();
        }
        if !common.languages.is_empty() {
            config.languages = common.languages.clone();
        }
        config.validate()?;

        Ok(Self {
            config,
            verbose: common.verbose,
        })
    }

    /// Build the service client, failing when no API key is available.
    ///
    /// Called before any flow touches the filesystem.
    pub fn client(&self, remote: &RemoteArgs) -> Result<HttpClient> {
        let api_url = remote.api_url.as_deref().unwrap_or(&self.config.api_url);
        let api_key = remote
            .api_key
            .as_deref()
            .or(self.config.api_key.as_deref());
        Ok(HttpClient::new(api_url, api_key)?)
    }
}
