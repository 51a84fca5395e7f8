pub mod options;
pub mod reader;
mod error;

pub use error::Error;
pub use options::{OptionsError, ReaderOptions};
pub use reader::{ConfigReader, DynamicValue, Number, ReaderError};
