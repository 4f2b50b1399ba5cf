use std::path::{Path, PathBuf};

use anstream::ColorChoice;
use anyhow::{Context, Result, bail};
use dotdocs_commons::canonicalize_workspace;
use dotdocs_config::{ConfigManager, DocsManifest};

use crate::cli::Cli;

/// Everything resolved from the command line before the checks run.
#[derive(Debug, Clone)]
pub struct StartupContext {
    /// Canonical repository root
    pub workspace: PathBuf,
    pub manifest: DocsManifest,
    /// Manifest file in use, `None` for the built-in defaults
    pub config_path: Option<PathBuf>,
    pub color: ColorChoice,
}

impl StartupContext {
    pub fn from_cli_args(args: &Cli) -> Result<Self> {
        let workspace = resolve_workspace_path(args.workspace.clone())
            .context("Failed to resolve workspace directory")?;

        if !workspace.is_dir() {
            bail!(
                "Workspace path '{}' does not exist or is not a directory.",
                workspace.display()
            );
        }

        let manager = match &args.config {
            Some(candidate) => {
                let path = resolve_config_path(&workspace, candidate);
                ConfigManager::load_from_file(&path)
                    .with_context(|| format!("Failed to load manifest {}", path.display()))?
            }
            None => ConfigManager::load_from_workspace(&workspace).with_context(|| {
                format!("Failed to load manifest from workspace {}", workspace.display())
            })?,
        };
        let config_path = manager.config_path().map(Path::to_path_buf);

        Ok(Self {
            workspace,
            manifest: manager.into_manifest(),
            config_path,
            color: args.color.into(),
        })
    }
}

fn resolve_workspace_path(workspace_arg: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current working directory")?;

    let resolved = match workspace_arg {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    };

    Ok(canonicalize_workspace(&resolved))
}

/// Relative manifest paths are tried against the workspace first, then the
/// current directory.
fn resolve_config_path(workspace: &Path, candidate: &Path) -> PathBuf {
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    let workspace_candidate = workspace.join(candidate);
    if workspace_candidate.exists() {
        return workspace_candidate;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| workspace.to_path_buf());
    let cwd_candidate = cwd.join(candidate);
    if cwd_candidate.exists() {
        cwd_candidate
    } else {
        workspace_candidate
    }
}
