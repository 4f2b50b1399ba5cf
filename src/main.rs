//! dotfiles-docs - documentation consistency checker for a dotfiles repository
//!
//! Thin binary entry point: install logging, resolve the workspace and
//! manifest, then hand off to `dotdocs_core`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dotdocs_core::{DocsChecker, Reporter};
use dotfiles_docs::{Cli, StartupContext};

mod main_helpers;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    let trace_filter = main_helpers::initialize_tracing();
    let startup = StartupContext::from_cli_args(&args)?;
    trace_filter.apply_config(&startup.manifest.debug);
    tracing::debug!(
        workspace = %startup.workspace.display(),
        config = ?startup.config_path,
        "starting documentation checks"
    );

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), startup.color);
    let outcome = DocsChecker::new(&startup.workspace, &startup.manifest)
        .run(&mut reporter)
        .context("Documentation check aborted")?;

    Ok(ExitCode::from(outcome.exit_code()))
}
