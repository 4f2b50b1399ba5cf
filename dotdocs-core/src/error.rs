use std::path::PathBuf;

use thiserror::Error;

/// Faults that abort a run. A missing file is never one of these; it only
/// turns a check result to failed.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("I/O error while reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
