//! Shared helpers reused by the dotfiles-docs crates: lexical path handling,
//! Python-compatible text casing for report labels, and the status palette
//! used when printing check results to a terminal.

pub mod paths;
pub mod styling;
pub mod text;

pub use paths::{canonicalize_workspace, display_relative, is_plain_relative_path};
pub use styling::{Palette, StatusMark};
pub use text::capitalize;
