//! Human-readable report written to stdout.

use std::io::{self, Write};

use anstream::{
    AutoStream, ColorChoice,
    stream::{AsLockedWrite, RawStream},
};
use dotdocs_commons::{Palette, StatusMark};
use dotdocs_config::SiteSection;

use crate::existence::FileStatus;
use crate::stats::ShortcutStats;
use crate::validate::ValidationCheck;

pub const BANNER: &str = "Dotfiles Documentation Update Helper";
const RULE_WIDTH: usize = 50;

/// Writes the check report to any sink. Styles are stripped or passed
/// through by the wrapping [`AutoStream`] according to `choice`.
pub struct Reporter<W: RawStream> {
    out: AutoStream<W>,
    palette: Palette,
}

impl<W: RawStream + AsLockedWrite> Reporter<W> {
    pub fn new(out: W, choice: ColorChoice) -> Self {
        Self {
            out: AutoStream::new(out, choice),
            palette: Palette::default(),
        }
    }

    /// Reporter that never emits ANSI escapes.
    pub fn plain(out: W) -> Self {
        Self::new(out, ColorChoice::Never)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", self.palette.paint(self.palette.header, BANNER))?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    /// Section heading; every section but the first is preceded by a blank line.
    pub fn heading(&mut self, title: &str, leading_blank: bool) -> io::Result<()> {
        if leading_blank {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", self.palette.paint(self.palette.header, title))
    }

    pub fn file_statuses(&mut self, statuses: &[FileStatus]) -> io::Result<()> {
        for status in statuses {
            let mark = self.palette.mark(StatusMark::from_present(status.present));
            if status.present {
                writeln!(self.out, "  {mark} {}", status.label)?;
            } else {
                writeln!(self.out, "  {mark} {} NOT FOUND", status.label)?;
            }
        }
        Ok(())
    }

    pub fn validation_checks(&mut self, checks: &[ValidationCheck]) -> io::Result<()> {
        writeln!(self.out)?;
        for check in checks {
            writeln!(self.out, "  {}", check.label())?;
        }
        Ok(())
    }

    pub fn statistics(&mut self, stats: &ShortcutStats) -> io::Result<()> {
        self.heading("Documentation Statistics:", true)?;
        for tool in &stats.tools {
            writeln!(self.out, "  {}: {} shortcuts", tool.display_name, tool.count)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "  Total: {} shortcuts documented", stats.total)
    }

    pub fn failure(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.paint(self.palette.failure, &format!("❌ {message}"))
        )
    }

    /// Success line followed by the site preview/deploy hints.
    pub fn success(&mut self, site: &SiteSection) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            self.palette.paint(self.palette.success, "✅ All checks passed!")
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "To preview documentation locally:")?;
        writeln!(
            self.out,
            "  {}",
            self.palette.paint(self.palette.muted, &site.serve_command)
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "To deploy documentation:")?;
        writeln!(
            self.out,
            "  {}",
            self.palette.paint(self.palette.muted, &site.deploy_command)
        )
    }
}
