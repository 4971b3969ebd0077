//! Core errors.

/// Errors raised while validating generator inputs.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid module name {name:?}: {reason}")]
    InvalidModuleName { name: String, reason: &'static str },
}
