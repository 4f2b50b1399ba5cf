use std::path::{Path, PathBuf};

use anstream::stream::{AsLockedWrite, RawStream};
use dotdocs_config::DocsManifest;
use tracing::{info, warn};

use crate::error::CheckError;
use crate::existence::{ExistenceChecker, all_present};
use crate::report::Reporter;
use crate::shortcuts::ShortcutExtractor;
use crate::stats::ShortcutStats;
use crate::validate::DocsValidator;

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Passed,
    MissingFiles,
    ValidationFailed,
}

impl RunOutcome {
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::MissingFiles | Self::ValidationFailed => 1,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Runs the checks of one repository in order, stopping at the first gate
/// that fails.
pub struct DocsChecker<'a> {
    root: &'a Path,
    manifest: &'a DocsManifest,
    validator: DocsValidator,
}

impl<'a> DocsChecker<'a> {
    pub fn new(root: &'a Path, manifest: &'a DocsManifest) -> Self {
        Self {
            root,
            manifest,
            validator: DocsValidator::default(),
        }
    }

    fn tools_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.tools.dir)
    }

    pub fn run<W: RawStream + AsLockedWrite>(&self, reporter: &mut Reporter<W>) -> Result<RunOutcome, CheckError> {
        reporter.banner()?;

        let configs_ok = self.check_config_files(reporter)?;
        let docs_ok = self.check_docs_files(reporter)?;
        if !(configs_ok && docs_ok) {
            warn!(configs_ok, docs_ok, "required files are missing");
            reporter.failure("Some files are missing. Please check the output above.")?;
            return Ok(RunOutcome::MissingFiles);
        }

        if !self.validate(reporter)? {
            warn!("documentation validation failed");
            reporter.failure("Documentation validation failed.")?;
            return Ok(RunOutcome::ValidationFailed);
        }

        let stats = self.statistics()?;
        reporter.statistics(&stats)?;
        reporter.success(&self.manifest.site)?;

        info!(total = stats.total, tools = stats.tools.len(), "documentation checks passed");
        Ok(RunOutcome::Passed)
    }

    /// Print one line per configuration file; true iff all exist.
    pub fn check_config_files<W: RawStream + AsLockedWrite>(
        &self,
        reporter: &mut Reporter<W>,
    ) -> Result<bool, CheckError> {
        reporter.heading("Checking configuration files...", false)?;
        let statuses = ExistenceChecker::new(self.root).config_files(&self.manifest.config_files);
        reporter.file_statuses(&statuses)?;
        Ok(all_present(&statuses))
    }

    /// Print one line per required documentation page; true iff all exist.
    pub fn check_docs_files<W: RawStream + AsLockedWrite>(
        &self,
        reporter: &mut Reporter<W>,
    ) -> Result<bool, CheckError> {
        reporter.heading("Checking documentation files...", true)?;
        let statuses = ExistenceChecker::new(self.root).docs(&self.manifest.docs.required);
        reporter.file_statuses(&statuses)?;
        Ok(all_present(&statuses))
    }

    pub fn validate<W: RawStream + AsLockedWrite>(&self, reporter: &mut Reporter<W>) -> Result<bool, CheckError> {
        reporter.heading("Validating documentation...", true)?;
        reporter.validation_checks(self.validator.checks())?;
        Ok(self.validator.validate())
    }

    pub fn statistics(&self) -> Result<ShortcutStats, CheckError> {
        let extractor = ShortcutExtractor::new(self.tools_dir());
        ShortcutStats::collect(&extractor, self.manifest.tools.names.as_slice())
    }
}
