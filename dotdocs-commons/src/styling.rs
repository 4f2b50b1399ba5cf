//! Status styles for check output

use anstyle::{AnsiColor, Color, Effects, Style};

/// Outcome glyph printed in front of every checked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMark {
    Present,
    Missing,
}

impl StatusMark {
    pub fn from_present(present: bool) -> Self {
        if present { Self::Present } else { Self::Missing }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Present => "✓",
            Self::Missing => "✗",
        }
    }
}

/// Semantic styles applied to report text. Escapes are always emitted;
/// the output stream decides whether they reach the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub success: Style,
    pub failure: Style,
    pub header: Style,
    pub muted: Style,
}

impl Palette {
    pub fn paint(&self, style: Style, text: &str) -> String {
        format!("{style}{text}{style:#}")
    }

    pub fn mark(&self, mark: StatusMark) -> String {
        let style = match mark {
            StatusMark::Present => self.success,
            StatusMark::Missing => self.failure,
        };
        self.paint(style, mark.glyph())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            success: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
            failure: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))),
            header: Style::new().effects(Effects::BOLD),
            muted: Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
        }
    }
}
