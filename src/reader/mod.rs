//! Typed access to configuration values resolved by a Lua script.
//!
//! The script must define a global table (default `configs`) and a global
//! function (default `get_param_value`) taking that table and a key. The key
//! is opaque here: dotted paths such as `"json.fullname"` are interpreted by
//! the script alone.

mod environment;
mod error;
mod value;

use std::path::Path;

use tracing::{debug, trace};

use crate::options::ReaderOptions;
use environment::Environment;

pub use error::ReaderError;
pub use value::{DynamicValue, Number};

/// Reads typed values out of a loaded configuration script.
///
/// Each reader owns its own interpreter. Lookups never share state between
/// readers, even when they load the same script. A reader is not `Send`;
/// use it from one thread.
///
/// ## Example
///
/// ```no_run
/// use lua_config_reader::ConfigReader;
///
/// let config = ConfigReader::open("config-reader.lua")?;
/// let name = config.read_string("simple.fullname")?;
/// let age = config.read_number("json.age")?;
/// let family = config.read_array("json.otherfamily")?;
/// # Ok::<(), lua_config_reader::ReaderError>(())
/// ```
pub struct ConfigReader {
    env: Environment,
    options: ReaderOptions,
}

impl std::fmt::Debug for ConfigReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigReader")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ConfigReader {
    /// Loads `script` using the standard `get_param_value(configs, key)` convention.
    pub fn open(script: impl AsRef<Path>) -> Result<Self, ReaderError> {
        Self::with_options(ReaderOptions::new(script))
    }

    /// Loads the script named by `options`.
    ///
    /// Fails with [`ReaderError::Load`] if the interpreter cannot be created or
    /// the script is missing, unreadable, or raises while executing.
    pub fn with_options(options: ReaderOptions) -> Result<Self, ReaderError> {
        let env = Environment::open(&options.script)?;
        env.load_script(&options.script)?;

        debug!(
            script = %options.script.display(),
            lookup = %options.lookup_function,
            table = %options.config_table,
            "loaded configuration script"
        );

        Ok(Self { env, options })
    }

    /// Loads [`ReaderOptions`] from a TOML file, then the script they name.
    pub fn from_options_file(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let options = ReaderOptions::from_file(path)?;
        Ok(Self::with_options(options)?)
    }

    /// Returns the options this reader was built with.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Calls the lookup function for `name` and returns the raw result.
    pub fn read_value(&self, name: &str) -> Result<DynamicValue, ReaderError> {
        trace!(key = name, "looking up configuration value");
        self.env
            .lookup(&self.options.lookup_function, &self.options.config_table, name)
    }

    /// Reads a boolean. No other type is converted.
    pub fn read_bool(&self, name: &str) -> Result<bool, ReaderError> {
        match self.read_value(name)? {
            DynamicValue::Boolean(b) => Ok(b),
            other => Err(ReaderError::mismatch(name, "boolean", other.describe())),
        }
    }

    /// Reads a number as `f64`, whether the script produced an integer or a float.
    pub fn read_number(&self, name: &str) -> Result<f64, ReaderError> {
        match self.read_value(name)? {
            DynamicValue::Number(n) => Ok(n.as_f64()),
            other => Err(ReaderError::mismatch(name, "number", other.describe())),
        }
    }

    /// Reads a string. Numbers are accepted and rendered as text, so `21`
    /// reads as `"21"`.
    pub fn read_string(&self, name: &str) -> Result<String, ReaderError> {
        let value = self.read_value(name)?;
        value
            .as_text()
            .ok_or_else(|| ReaderError::mismatch(name, "string", value.describe()))
    }

    /// Reads an array of strings.
    ///
    /// Elements are taken from index 1 upwards and stop at the first missing
    /// index. Every element must be a string or a number; the first that is
    /// not fails the whole call. An empty table yields an empty vector.
    pub fn read_array(&self, name: &str) -> Result<Vec<String>, ReaderError> {
        let table = match self.read_value(name)? {
            DynamicValue::Table(table) => table,
            other => return Err(ReaderError::mismatch(name, "table", other.describe())),
        };

        let mut items = Vec::new();
        for index in 1.. {
            let element = self.env.raw_index(&table, index, name)?;
            if matches!(element, DynamicValue::Nil) {
                break;
            }
            let text = element.as_text().ok_or_else(|| {
                ReaderError::mismatch(format!("{name}[{index}]"), "string", element.describe())
            })?;
            items.push(text);
        }

        Ok(items)
    }
}
