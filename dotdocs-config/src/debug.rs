//! Debug and tracing configuration

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Trace level for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl TraceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown levels fall back to the default rather than rejecting the file.
impl<'de> Deserialize<'de> for TraceLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// `[debug]` section of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Level used when `RUST_LOG` is not set
    pub trace_level: TraceLevel,

    /// Targets the level applies to; empty means the workspace crates
    pub trace_targets: Vec<String>,
}

impl DebugConfig {
    /// Build an `EnvFilter` directive such as `dotdocs_core=warn,dotfiles_docs=warn`.
    pub fn filter_directive(&self) -> String {
        let level = self.trace_level.as_str();
        let targets: Vec<&str> = if self.trace_targets.is_empty() {
            defaults::TRACE_TARGETS.to_vec()
        } else {
            self.trace_targets.iter().map(String::as_str).collect()
        };

        targets
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
