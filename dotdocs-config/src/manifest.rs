//! The manifest of paths and tools the checker inspects.

use std::path::{Path, PathBuf};

use dotdocs_commons::is_plain_relative_path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::debug::DebugConfig;
use crate::defaults;
use crate::error::ConfigError;

/// Everything the checker needs to know about a dotfiles repository.
///
/// Every section is optional in the TOML file; a missing section keeps the
/// compiled-in default, a present one replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsManifest {
    /// Named configuration files, relative to the repository root.
    pub config_files: IndexMap<String, PathBuf>,
    pub docs: DocsSection,
    pub tools: ToolsSection,
    pub site: SiteSection,
    pub debug: DebugConfig,
}

impl Default for DocsManifest {
    fn default() -> Self {
        Self {
            config_files: defaults::CONFIG_FILES
                .iter()
                .map(|(name, path)| ((*name).to_string(), PathBuf::from(path)))
                .collect(),
            docs: DocsSection::default(),
            tools: ToolsSection::default(),
            site: SiteSection::default(),
            debug: DebugConfig::default(),
        }
    }
}

/// `[docs]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsSection {
    /// Documentation pages that must exist, relative to the repository root.
    pub required: Vec<PathBuf>,
}

impl Default for DocsSection {
    fn default() -> Self {
        Self {
            required: defaults::REQUIRED_DOCS.iter().map(PathBuf::from).collect(),
        }
    }
}

/// `[tools]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsSection {
    /// Directory holding `<tool>.md`, relative to the repository root.
    pub dir: PathBuf,
    /// Tools reported in the statistics section, in report order.
    pub names: Vec<String>,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(defaults::TOOLS_DIR),
            names: defaults::TOOLS.iter().map(|tool| (*tool).to_string()).collect(),
        }
    }
}

/// `[site]` section: hints printed after a successful run. Never executed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    pub serve_command: String,
    pub deploy_command: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            serve_command: defaults::SERVE_COMMAND.to_string(),
            deploy_command: defaults::DEPLOY_COMMAND.to_string(),
        }
    }
}

impl DocsManifest {
    /// Parse a manifest from TOML text. Does not validate.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Reject entries that could not be joined safely onto the repository root.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in &self.config_files {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "config file names must not be empty".to_string(),
                ));
            }
            ensure_relative(path, &format!("config file '{name}'"))?;
        }

        for path in &self.docs.required {
            ensure_relative(path, "required doc")?;
        }

        ensure_relative(&self.tools.dir, "tools directory")?;

        for tool in &self.tools.names {
            validate_tool_name(tool)?;
        }

        Ok(())
    }
}

fn ensure_relative(path: &Path, what: &str) -> Result<(), ConfigError> {
    if is_plain_relative_path(path) {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{what} path '{}' must be relative to the repository root",
            path.display()
        )))
    }
}

fn validate_tool_name(tool: &str) -> Result<(), ConfigError> {
    let trimmed = tool.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("tool names must not be empty".to_string()));
    }
    if trimmed != tool {
        return Err(ConfigError::Invalid(format!(
            "tool name '{tool}' has surrounding whitespace"
        )));
    }
    if tool.contains(['/', '\\']) || tool == "." || tool == ".." {
        return Err(ConfigError::Invalid(format!(
            "tool name '{tool}' must be a plain file stem"
        )));
    }
    Ok(())
}
