//! Emitter errors.

use std::path::{Path, PathBuf};

/// Errors raised while writing emitted files.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write `content` to `path`, truncating any existing file.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), EmitError> {
    std::fs::write(path, content).map_err(|source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
