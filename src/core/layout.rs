//! Where the files of one configured entry live on disk.

use std::path::{Path, PathBuf};

use crate::config::FormatSettings;

/// Path builder for one file entry: `root/<settings.path>/<name>...`.
#[derive(Debug, Clone, Copy)]
pub struct FileLayout<'a> {
    root: &'a Path,
    settings: &'a FormatSettings,
    name: &'a str,
}

impl<'a> FileLayout<'a> {
    pub fn new(root: &'a Path, settings: &'a FormatSettings, name: &'a str) -> Self {
        Self {
            root,
            settings,
            name,
        }
    }

    pub fn dir(&self) -> PathBuf {
        self.root.join(&self.settings.path)
    }

    pub fn src_ext(&self) -> &'a str {
        &self.settings.src_ext
    }

    pub fn api_ext(&self) -> &'a str {
        &self.settings.api_ext
    }

    /// `dir/<name>.<suffix>.<suffix>...`
    pub fn named(&self, suffixes: &[&str]) -> PathBuf {
        self.dir().join(file_name(self.name, suffixes))
    }

    /// Import target for `language`.
    pub fn destination(&self, language: &str) -> PathBuf {
        if self.settings.language_dirs {
            self.dir()
                .join(language)
                .join(file_name(self.name, &[&self.settings.dst_ext]))
        } else {
            self.named(&[language, &self.settings.dst_ext])
        }
    }

    /// Import target of formats bundling every language into one file.
    pub fn bundle_path(&self) -> PathBuf {
        self.named(&[&self.settings.dst_ext])
    }
}

fn file_name(name: &str, suffixes: &[&str]) -> String {
    std::iter::once(name)
        .chain(suffixes.iter().copied())
        .collect::<Vec<_>>()
        .join(".")
}
