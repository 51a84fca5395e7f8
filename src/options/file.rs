//! TOML loading for reader options.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::OptionsError;

/// Reads and deserializes a TOML options file.
pub(super) fn load_options_file<T: DeserializeOwned>(path: &Path) -> Result<T, OptionsError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(OptionsError::Missing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(OptionsError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    toml::from_str(&contents).map_err(|e| OptionsError::Invalid {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::super::ReaderOptions;
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lookup_function = \"find\"").unwrap();

        let options: ReaderOptions = load_options_file(file.path()).unwrap();

        assert_eq!(options.lookup_function, "find");
        assert_eq!(options.config_table, "configs");
    }

    #[test]
    fn test_missing_file() {
        let result: Result<ReaderOptions, _> =
            load_options_file(Path::new("/nonexistent/path/reader.toml"));

        assert!(matches!(result, Err(OptionsError::Missing(_))));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();

        let result: Result<ReaderOptions, _> = load_options_file(dir.path());

        match result {
            Err(err @ OptionsError::Unreadable { .. }) => {
                assert!(err.to_string().starts_with("cannot open reader options"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_message_names_path() {
        let err = load_options_file::<ReaderOptions>(Path::new("/nonexistent/reader.toml"))
            .unwrap_err();

        assert_eq!(err.to_string(), "no reader options at '/nonexistent/reader.toml'");
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "script = [unterminated").unwrap();

        let result: Result<ReaderOptions, _> = load_options_file(file.path());

        assert!(matches!(result, Err(OptionsError::Invalid { .. })));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "scirpt = \"typo.lua\"").unwrap();

        let result: Result<ReaderOptions, _> = load_options_file(file.path());

        assert!(matches!(result, Err(OptionsError::Invalid { .. })));
    }

    #[test]
    fn test_wrong_field_type() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "config_table = 42").unwrap();

        let result: Result<ReaderOptions, _> = load_options_file(file.path());

        assert!(matches!(result, Err(OptionsError::Invalid { .. })));
    }
}
