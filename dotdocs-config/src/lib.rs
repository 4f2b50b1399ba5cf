//! Configuration for dotfiles-docs.
//!
//! The compiled-in [`defaults`] describe the dotfiles layout the checker was
//! written for: which configuration files must exist, which documentation
//! pages must exist, and which tools get shortcut statistics. A repository
//! can override any section with a `dotfiles-docs.toml` file at its root.

pub mod debug;
pub mod defaults;
pub mod error;
pub mod loader;
pub mod manifest;

pub use debug::{DebugConfig, TraceLevel};
pub use error::ConfigError;
pub use loader::ConfigManager;
pub use manifest::{DocsManifest, DocsSection, SiteSection, ToolsSection};
