//! Runner errors.

use std::path::PathBuf;
use std::time::Duration;

use tf_core::Arity;

/// Errors raised while executing driver steps.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Missing input file {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to start engine {}", engine.display())]
    Spawn {
        engine: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Engine failed for arity {arity} ({status}): {stderr}")]
    EngineFailed {
        arity: Arity,
        status: String,
        stderr: String,
    },

    #[error("Engine timed out for arity {arity} after {timeout:?}")]
    Timeout { arity: Arity, timeout: Duration },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunnerError {
    /// Classify a read failure: a missing file is reported as a missing input.
    pub(crate) fn reading(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            RunnerError::MissingInput { path }
        } else {
            RunnerError::Io { path, source }
        }
    }
}
