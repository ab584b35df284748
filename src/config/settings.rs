//! User settings for the expense tracker
//!
//! Optional preferences read from `config.json` in the config directory.
//! A missing file means defaults; the file is never written implicitly.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};

use super::paths::{ExpensePaths, DEFAULT_DATA_FILE};
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown in front of amounts (display only)
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Ledger file to use when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        let contents = match std::fs::read_to_string(&settings_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
            Err(e) => {
                return Err(ExpenseError::Io(format!(
                    "Failed to read settings file: {}",
                    e
                )))
            }
        };

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Like [`Settings::load_or_default`], but an unreadable or invalid file
    /// is logged and replaced with defaults
    pub fn load_or_warn(paths: &ExpensePaths) -> Self {
        Self::load_or_default(paths).unwrap_or_else(|e| {
            warn!("{}; using default settings", e);
            Settings::default()
        })
    }

    /// Resolve the ledger file
    ///
    /// An explicit path (from `--file` or `EXPENSE_TRACKER_FILE`) wins, then
    /// the `data_file` setting, then `expenses.csv` in the working directory.
    pub fn data_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.data_file, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_config_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_default(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.data_file, None);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }

    #[test]
    fn test_invalid_file_falls_back_with_warning() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        assert_eq!(Settings::load_or_warn(&paths), Settings::default());
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        // config.json is a directory, which cannot be read as a file
        let paths = ExpensePaths::with_config_dir(temp_dir.path().to_path_buf());
        std::fs::create_dir(paths.settings_file()).unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Io(_)));
        assert_eq!(Settings::load_or_warn(&paths), Settings::default());
    }

    #[test]
    fn test_data_file_precedence() {
        let mut settings = Settings::default();
        assert_eq!(settings.data_file(None), PathBuf::from("expenses.csv"));

        settings.data_file = Some(PathBuf::from("/tmp/from-settings.csv"));
        assert_eq!(
            settings.data_file(None),
            PathBuf::from("/tmp/from-settings.csv")
        );
        assert_eq!(
            settings.data_file(Some(PathBuf::from("cli.csv"))),
            PathBuf::from("cli.csv")
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings {
            currency_symbol: "£".into(),
            data_file: Some(PathBuf::from("ledger.csv")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
