//! # dotfiles-docs
//!
//! Consistency checker for the keybinding documentation of a dotfiles
//! repository. It confirms that the tracked configuration files and the
//! documentation pages exist, then counts the keyboard shortcuts each tool
//! page documents.
//!
//! ```bash
//! # From the repository root
//! dotfiles-docs
//!
//! # Somewhere else, with an explicit manifest
//! dotfiles-docs ~/dotfiles --config ~/dotfiles/dotfiles-docs.toml
//! ```
//!
//! The binary is a thin wrapper: argument parsing lives in [`cli`], path and
//! manifest resolution in [`startup`], and the checks themselves in
//! `dotdocs_core`.

pub mod cli;
pub mod startup;

pub use cli::{Cli, ColorMode};
pub use startup::StartupContext;
