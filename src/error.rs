use crate::options::OptionsError;
use crate::reader::ReaderError;
use thiserror::Error;

/// Top-level error type for the lua-config-reader library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("reader options error: {0}")]
    Options(#[from] OptionsError),

    #[error(transparent)]
    Reader(#[from] ReaderError),
}
