use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by [`ConfigReader`](super::ConfigReader).
///
/// `Load` is fatal to construction. `Call` and `TypeMismatch` are per-call and
/// leave the reader usable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReaderError {
    #[error("failed to load script '{path}': {message}")]
    Load { path: PathBuf, message: String },

    #[error("lookup of '{key}' failed: {message}")]
    Call { key: String, message: String },

    #[error("'{key}' is not a {expected}: found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: String,
    },
}

impl ReaderError {
    pub(crate) fn mismatch(key: impl Into<String>, expected: &'static str, found: String) -> Self {
        ReaderError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }
}
