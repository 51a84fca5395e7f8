use std::path::PathBuf;
use thiserror::Error;

/// Failures loading [`ReaderOptions`](super::ReaderOptions) from a file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("no reader options at '{0}'")]
    Missing(PathBuf),

    #[error("cannot open reader options '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reader options '{path}' are invalid: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
