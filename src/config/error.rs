//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no configuration file was loaded")]
    FilePathNotSet,

    #[error("home directory could not be determined")]
    HomeDirectoryNotFound,

    #[error("could not read {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not encode configuration as YAML: {0}")]
    SerializationFailed(String),

    #[error("malformed configuration file: {0}")]
    DeserializationFailed(String),

    /// Theme name is not one of `Theme::available_themes`.
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("'{0}' is not a log level")]
    InvalidLogLevel(String),

    #[error("cannot read key binding '{0}'")]
    InvalidHotkey(String),

    #[error("'{0}' is not a valid date format")]
    InvalidDateFormat(String),

    /// Two actions of one mode share a key.
    #[error("key '{key}' is bound more than once in {mode}")]
    DuplicateHotkey { mode: String, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_messages_name_the_offending_value() {
        assert_eq!(
            ConfigError::UnknownTheme("neon".to_string()).to_string(),
            "unknown theme 'neon'"
        );
        assert_eq!(
            ConfigError::InvalidLogLevel("loud".to_string()).to_string(),
            "'loud' is not a log level"
        );
        assert!(ConfigError::DeserializationFailed("line 3".to_string())
            .to_string()
            .ends_with("line 3"));
    }

    #[test]
    fn test_io_failures_include_path_and_cause() {
        let error = ConfigError::LoadFailed {
            path: PathBuf::from("/tmp/todo/config.yml"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/todo/config.yml"));
        assert!(message.ends_with("denied"));
    }
}
