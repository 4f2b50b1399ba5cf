use std::path::PathBuf;

use anstream::ColorChoice;
use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "dotfiles-docs")]
#[command(about = "Check dotfiles keybinding docs and count documented shortcuts")]
#[command(version)]
pub struct Cli {
    /// Repository root (defaults to the current directory)
    #[arg(value_name = "WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Manifest file overriding the built-in file lists
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to color status marks
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

/// `auto` leaves terminal detection and `NO_COLOR` to `anstream`.
impl From<ColorMode> for ColorChoice {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => Self::Auto,
            ColorMode::Always => Self::Always,
            ColorMode::Never => Self::Never,
        }
    }
}
