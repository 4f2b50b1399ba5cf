//! Keyboard shortcut extraction from tool pages.
//!
//! Pages write keys in the pymdownx "keys" notation: `++esc++` for a single
//! key and `++ctrl+alt+del++` for a combination. Every match is folded into
//! a token by lowercasing it and dropping the `+` separators, so
//! `++Ctrl+C++` and `++CTRL+C++` count once as `ctrlc`.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::CheckError;

/// `++` delimiters around `+`-free key names joined by single `+`.
pub static SHORTCUT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+\+([^+]+(?:\+[^+]+)*)\+\+").expect("Failed to compile shortcut regex")
});

/// Deduplicated shortcut tokens of one page.
pub type ShortcutSet = BTreeSet<String>;

/// Lowercase the captured key text and strip every `+`.
pub fn normalize_shortcut(raw: &str) -> String {
    raw.to_lowercase().replace('+', "")
}

/// Collect the normalized tokens of every shortcut in `text`.
pub fn extract_shortcuts(text: &str) -> ShortcutSet {
    SHORTCUT_REGEX
        .captures_iter(text)
        .filter_map(|cap| cap.get(1))
        .map(|keys| normalize_shortcut(keys.as_str()))
        .collect()
}

/// Reads `<tools_dir>/<tool>.md` pages.
#[derive(Debug, Clone)]
pub struct ShortcutExtractor {
    tools_dir: PathBuf,
}

impl ShortcutExtractor {
    pub fn new(tools_dir: impl Into<PathBuf>) -> Self {
        Self {
            tools_dir: tools_dir.into(),
        }
    }

    pub fn doc_path(&self, tool: &str) -> PathBuf {
        self.tools_dir.join(format!("{tool}.md"))
    }

    /// Shortcuts documented for `tool`; empty when the page does not exist.
    pub fn extract(&self, tool: &str) -> Result<ShortcutSet, CheckError> {
        let path = self.doc_path(tool);
        let shortcuts = extract_from_file(&path)?;
        debug!(tool, path = %path.display(), count = shortcuts.len(), "extracted shortcuts");
        Ok(shortcuts)
    }
}

/// Shortcuts in the file at `path`; empty when it does not exist.
pub fn extract_from_file(path: &Path) -> Result<ShortcutSet, CheckError> {
    if !path.exists() {
        return Ok(ShortcutSet::new());
    }

    let content = fs::read_to_string(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(extract_shortcuts(&content))
}
