//! Errors surfaced by the binary. The generation core itself cannot fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("cannot write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// User declined to continue. Not a failure.
    #[error("aborted")]
    Aborted,
}
