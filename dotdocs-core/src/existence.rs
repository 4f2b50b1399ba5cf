//! Existence checks over the manifest's configuration files and docs pages.

use std::path::{Path, PathBuf};

use dotdocs_commons::display_relative;
use indexmap::IndexMap;
use tracing::debug;

/// Result of checking one expected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Text printed for the entry, e.g. `tmux: /home/me/dotfiles/tmux/.tmux.conf`.
    pub label: String,
    pub present: bool,
}

/// Checks manifest entries relative to a repository root.
#[derive(Debug, Clone, Copy)]
pub struct ExistenceChecker<'a> {
    root: &'a Path,
}

impl<'a> ExistenceChecker<'a> {
    pub fn new(root: &'a Path) -> Self {
        Self { root }
    }

    /// One status per named configuration file, labelled `name: <full path>`.
    pub fn config_files(&self, entries: &IndexMap<String, PathBuf>) -> Vec<FileStatus> {
        entries
            .iter()
            .map(|(name, relative)| {
                let path = self.root.join(relative);
                FileStatus {
                    label: format!("{name}: {}", path.display()),
                    present: file_exists(&path),
                }
            })
            .collect()
    }

    /// One status per required page, labelled with its root-relative path.
    pub fn docs(&self, required: &[PathBuf]) -> Vec<FileStatus> {
        required
            .iter()
            .map(|relative| {
                let path = self.root.join(relative);
                FileStatus {
                    label: display_relative(self.root, &path),
                    present: file_exists(&path),
                }
            })
            .collect()
    }
}

/// True iff every checked file exists. Vacuously true for an empty list.
pub fn all_present(statuses: &[FileStatus]) -> bool {
    statuses.iter().all(|status| status.present)
}

fn file_exists(path: &Path) -> bool {
    let present = path.exists();
    debug!(path = %path.display(), present, "checked file");
    present
}
