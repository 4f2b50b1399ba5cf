use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::defaults;
use crate::error::ConfigError;
use crate::manifest::DocsManifest;

/// Loads the docs manifest for a repository.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    manifest: DocsManifest,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Use `dotfiles-docs.toml` at the workspace root when present, otherwise
    /// the compiled-in defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_path = workspace.as_ref().join(defaults::CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Self::load_from_file(&config_path);
        }

        debug!(
            path = %config_path.display(),
            "no manifest override found; using built-in defaults"
        );
        Ok(Self {
            manifest: DocsManifest::default(),
            config_path: None,
        })
    }

    /// Load an explicit manifest file. Unlike the workspace lookup, the file
    /// has to exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = DocsManifest::from_toml_str(&content, path)?;
        manifest.validate()?;

        debug!(
            path = %path.display(),
            config_files = manifest.config_files.len(),
            required_docs = manifest.docs.required.len(),
            tools = manifest.tools.names.len(),
            "loaded manifest override"
        );
        Ok(Self {
            manifest,
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn manifest(&self) -> &DocsManifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> DocsManifest {
        self.manifest
    }

    /// File the manifest came from, `None` for built-in defaults.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
