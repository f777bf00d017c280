//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including theme, date formats, log level and hotkey bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ModeHotkeys};

use crate::error::AppError;
use crate::ui::Theme;
use crate::utils::datetime::is_valid_format;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub theme_name: String,
    pub date_format: String,
    pub datetime_format: String,
    pub log_level: String,
    pub hotkeys: ModeHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    theme_name: String,
    #[serde(default = "default_date_format")]
    date_format: String,
    #[serde(default = "default_datetime_format")]
    datetime_format: String,
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    hotkeys: ModeHotkeys,
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance holding default values.
    ///
    pub fn new() -> Config {
        Config {
            theme_name: default_theme_name(),
            date_format: default_date_format(),
            datetime_format: default_datetime_format(),
            log_level: default_log_level(),
            hotkeys: ModeHotkeys::default(),
            file_path: None,
        }
    }

    /// Load the configuration from the default directory or the custom one
    /// if provided. A missing file is created with default values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => Path::new(path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.theme_name = data.theme_name;
            self.date_format = data.date_format;
            self.datetime_format = data.datetime_format;
            self.log_level = data.log_level;
            self.hotkeys = data.hotkeys;
            self.validate()?;
        } else {
            self.save()?;
        }

        Ok(())
    }

    /// Serialize the configuration and write it to the file path.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            theme_name: self.theme_name.clone(),
            date_format: self.date_format.clone(),
            datetime_format: self.datetime_format.clone(),
            log_level: self.log_level.clone(),
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Reject values that would break rendering or key dispatch.
    ///
    fn validate(&self) -> Result<(), ConfigError> {
        for format in [&self.date_format, &self.datetime_format] {
            if !is_valid_format(format) {
                return Err(ConfigError::InvalidDateFormat(format.clone()));
            }
        }
        self.hotkeys.check_unique()
    }

    /// Return the configured theme.
    ///
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::from_name(&self.theme_name)
            .ok_or_else(|| ConfigError::UnknownTheme(self.theme_name.clone()))
    }

    /// Return the configured log level.
    ///
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default configuration directory or an
    /// error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(DEFAULT_DIRECTORY_PATH)),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "todo-tui-config-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.theme_name, "tokyo-night");
        assert_eq!(config.date_format, "%Y-%m-%d");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
        assert!(config.theme().is_ok());
        assert!(config.file_path().is_none());
    }

    #[test]
    fn test_save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = temp_dir("create");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        let file = dir.join(FILE_NAME);
        assert!(file.exists());
        assert_eq!(config.file_path(), Some(file.as_path()));
        let contents = fs::read_to_string(file).unwrap();
        assert!(contents.contains("tokyo-night"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_reads_partial_file() {
        let dir = temp_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "theme_name: rose-pine\ndate_format: \"%d.%m.%Y\"\nlog_level: debug\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme_name, "rose-pine");
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert_eq!(config.datetime_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.hotkeys, ModeHotkeys::default());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_round_trips_hotkeys() {
        let dir = temp_dir("hotkeys");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        if let Some(hotkey) = config.hotkeys.task_list.get_mut(&HotkeyAction::Quit) {
            hotkey.code = KeyCode::Char('x');
        }
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(
            reloaded.hotkeys.task_list[&HotkeyAction::Quit].code,
            KeyCode::Char('x')
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = temp_dir("invalid");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme_name: [unclosed").unwrap();
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.to_str()),
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_date_format_is_rejected() {
        let dir = temp_dir("date-format");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "date_format: \"%Q\"\n").unwrap();
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.to_str()),
            Err(AppError::Config(ConfigError::InvalidDateFormat(format))) if format == "%Q"
        ));

        fs::write(dir.join(FILE_NAME), "datetime_format: \"%Y-%m-%d %\"\n").unwrap();
        assert!(matches!(
            config.load(dir.to_str()),
            Err(AppError::Config(ConfigError::InvalidDateFormat(_)))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_duplicate_binding_is_rejected() {
        let dir = temp_dir("duplicate");
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "hotkeys:\n  task_list:\n    quit: j\n    navigate_next: j\n",
        )
        .unwrap();
        let mut config = Config::new();
        assert!(matches!(
            config.load(dir.to_str()),
            Err(AppError::Config(ConfigError::DuplicateHotkey { .. }))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unknown_theme_and_level() {
        let config = Config {
            theme_name: "neon".to_string(),
            log_level: "loud".to_string(),
            ..Config::new()
        };
        assert!(matches!(config.theme(), Err(ConfigError::UnknownTheme(_))));
        assert!(matches!(
            config.level_filter(),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
