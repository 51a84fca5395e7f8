//! Reader options: which script to load and which globals form the calling
//! convention into it.

mod error;
mod file;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::OptionsError;

/// Script loaded when no path is given.
pub const DEFAULT_SCRIPT: &str = "config-reader.lua";

/// Global function the reader calls as `lookup(table, key)`.
pub const DEFAULT_LOOKUP_FUNCTION: &str = "get_param_value";

/// Global table passed as the first argument of every lookup.
pub const DEFAULT_CONFIG_TABLE: &str = "configs";

/// Options for constructing a [`ConfigReader`](crate::ConfigReader).
///
/// Can be built in code or loaded from a TOML file with [`from_file`](Self::from_file):
///
/// ```toml
/// script = "settings.lua"
/// lookup_function = "get_param_value"
/// config_table = "configs"
/// ```
///
/// Every field is optional in the file and falls back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReaderOptions {
    pub script: PathBuf,
    pub lookup_function: String,
    pub config_table: String,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SCRIPT)
    }
}

impl ReaderOptions {
    /// Options for `script` using the standard `get_param_value(configs, key)` convention.
    pub fn new(script: impl AsRef<Path>) -> Self {
        Self {
            script: script.as_ref().to_path_buf(),
            lookup_function: DEFAULT_LOOKUP_FUNCTION.to_string(),
            config_table: DEFAULT_CONFIG_TABLE.to_string(),
        }
    }

    /// Overrides the name of the global lookup function.
    #[must_use]
    pub fn with_lookup_function(mut self, name: impl Into<String>) -> Self {
        self.lookup_function = name.into();
        self
    }

    /// Overrides the name of the global configuration table.
    #[must_use]
    pub fn with_config_table(mut self, name: impl Into<String>) -> Self {
        self.config_table = name.into();
        self
    }

    /// Loads options from a TOML file.
    ///
    /// A relative `script` path is taken relative to the directory holding the
    /// options file, so an options file and its script can move together.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let mut options: Self = file::load_options_file(path)?;

        if options.script.is_relative() {
            if let Some(dir) = path.parent() {
                options.script = dir.join(&options.script);
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_standard_convention() {
        let options = ReaderOptions::default();
        assert_eq!(options.script, PathBuf::from("config-reader.lua"));
        assert_eq!(options.lookup_function, "get_param_value");
        assert_eq!(options.config_table, "configs");
    }

    #[test]
    fn test_builder_overrides() {
        let options = ReaderOptions::new("app.lua")
            .with_lookup_function("lookup")
            .with_config_table("settings");

        assert_eq!(options.script, PathBuf::from("app.lua"));
        assert_eq!(options.lookup_function, "lookup");
        assert_eq!(options.config_table, "settings");
    }

    #[test]
    fn test_from_file_resolves_script_next_to_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reader.toml");
        std::fs::write(&path, "script = \"app.lua\"\nconfig_table = \"settings\"\n").unwrap();

        let options = ReaderOptions::from_file(&path).unwrap();

        assert_eq!(options.script, dir.path().join("app.lua"));
        assert_eq!(options.config_table, "settings");
        assert_eq!(options.lookup_function, DEFAULT_LOOKUP_FUNCTION);
    }

    #[test]
    fn test_from_file_keeps_absolute_script() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("abs.lua");
        let path = dir.path().join("reader.toml");
        std::fs::write(&path, format!("script = {:?}\n", script.display().to_string())).unwrap();

        let options = ReaderOptions::from_file(&path).unwrap();

        assert_eq!(options.script, script);
    }
}
