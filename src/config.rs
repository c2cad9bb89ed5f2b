use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

use crate::core::{FormatKind, asset_tag};

pub const CONFIG_FILE_NAME: &str = ".locosync.json";

/// Environment variable holding the API key when it is not in the config file.
pub const API_KEY_ENV: &str = "LOCO_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub files: Vec<FileEntry>,
    #[serde(default)]
    pub formats: FormatTable,
    #[serde(default)]
    pub hooks: Hooks,
}

/// One translation file tracked by the service, identified by its tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub format: FormatKind,
}

impl FileEntry {
    /// Tag attached to every asset found in this file.
    pub fn tag(&self) -> String {
        asset_tag(&[&self.id, &self.name])
    }
}

/// On-disk layout of one file format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatSettings {
    pub path: String,
    pub src_ext: String,
    pub dst_ext: String,
    pub api_ext: String,
    /// Remove the generated source file before extracting.
    #[serde(default)]
    pub delete: bool,
    /// Write imported files to `path/<language>/` instead of `path/name.<language>.ext`.
    #[serde(default)]
    pub language_dirs: bool,
}

impl FormatSettings {
    fn new(path: &str, src_ext: &str, dst_ext: &str, api_ext: &str) -> Self {
        Self {
            path: path.to_string(),
            src_ext: src_ext.to_string(),
            dst_ext: dst_ext.to_string(),
            api_ext: api_ext.to_string(),
            delete: false,
            language_dirs: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormatTable {
    #[serde(default = "default_gettext_settings")]
    pub gettext: FormatSettings,
    #[serde(default = "default_yaml_settings")]
    pub yaml: FormatSettings,
    #[serde(default = "default_json_settings")]
    pub json: FormatSettings,
}

impl FormatTable {
    pub fn get(&self, kind: FormatKind) -> &FormatSettings {
        match kind {
            FormatKind::Gettext => &self.gettext,
            FormatKind::Yaml => &self.yaml,
            FormatKind::Json => &self.json,
        }
    }
}

impl Default for FormatTable {
    fn default() -> Self {
        Self {
            gettext: default_gettext_settings(),
            yaml: default_yaml_settings(),
            json: default_json_settings(),
        }
    }
}

/// Shell commands run around the sync flows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hooks {
    #[serde(default)]
    pub before_extract: Vec<String>,
    #[serde(default)]
    pub after_import: Vec<String>,
}

fn default_api_url() -> String {
    "https://localise.biz/api/".to_string()
}

fn default_root() -> String {
    "./".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_gettext_settings() -> FormatSettings {
    FormatSettings {
        delete: true,
        language_dirs: true,
        ..FormatSettings::new("locale", "pot", "po", "po")
    }
}

fn default_yaml_settings() -> FormatSettings {
    FormatSettings::new("config/locales", "yml", "yml", "yml")
}

fn default_json_settings() -> FormatSettings {
    FormatSettings::new("app/assets/javascripts/i18n", "json", "json", "json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            root: default_root(),
            languages: default_languages(),
            files: Vec::new(),
            formats: FormatTable::default(),
            hooks: Hooks::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Every file entry must produce a non-empty tag, and no two entries may
    /// share one: the tag is what import uses to filter the export.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must list at least one language");
        }
        if let Some(lang) = self.languages.iter().find(|l| l.trim().is_empty()) {
            bail!("Invalid language in 'languages': \"{}\"", lang);
        }

        let mut tags = HashSet::new();
        for file in &self.files {
            if file.name.trim().is_empty() {
                bail!("File entry with id \"{}\" has an empty 'name'", file.id);
            }
            let tag = file.tag();
            if !tag.chars().any(|c| c.is_ascii_alphabetic()) {
                bail!(
                    "File entry \"{}\" produces an empty tag (only letters, ',' and '-' are kept)",
                    file.name
                );
            }
            if !tags.insert(tag.clone()) {
                bail!(
                    "File entry \"{}\" collides with another entry: both produce the tag \"{}\" \
                     once characters other than letters, ',' and '-' are removed",
                    file.name,
                    tag
                );
            }
        }

        Ok(())
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    /// The language whose key-value files are scanned during extraction.
    pub fn primary_language(&self) -> &str {
        self.languages.first().map(String::as_str).unwrap_or("en")
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let mut config: Config = serde_json::from_str(&content)
                .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))?;
            config.validate()?;
            // A relative root is relative to the directory holding the file.
            if let Some(dir) = path.parent()
                && Path::new(&config.root).is_relative()
            {
                config.root = dir.join(&config.root).to_string_lossy().to_string();
            }
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
