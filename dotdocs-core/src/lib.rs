//! Checks a dotfiles repository for the files its keybinding documentation
//! depends on and counts the shortcuts each tool page documents.
//!
//! A run is strictly sequential: configuration files, then documentation
//! pages, then validation, then statistics. See [`runner::DocsChecker`].

pub mod error;
pub mod existence;
pub mod report;
pub mod runner;
pub mod shortcuts;
pub mod stats;
pub mod validate;

pub use error::CheckError;
pub use existence::{ExistenceChecker, FileStatus, all_present};
pub use report::Reporter;
pub use runner::{DocsChecker, RunOutcome};
pub use shortcuts::{ShortcutExtractor, ShortcutSet, extract_shortcuts, normalize_shortcut};
pub use stats::{ShortcutStats, ToolStats};
pub use validate::{DocsValidator, ValidationCheck};
