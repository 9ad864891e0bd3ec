//! User configuration loaded from `config.toml` in the platform config dir.

use crate::error::AppError;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Offered by the save and load prompts until a file has been used.
    pub default_file: PathBuf,
    /// Log destination; logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `debug` or `tinysheet_core=trace`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_file: PathBuf::from("sheet.txt"),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn parse(path: &Path, content: &str) -> Result<Config, AppError> {
        toml::from_str(content).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Read `path`; a missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Config, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Config::parse(path, &content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(AppError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Load the user's config, falling back to defaults.
    /// Problems are returned as warnings for the caller to report.
    pub fn load() -> (Config, Vec<String>) {
        let Some(path) = config_path() else {
            return (Config::default(), Vec::new());
        };
        match Config::load_from(&path) {
            Ok(config) => (config, Vec::new()),
            Err(e) => (Config::default(), vec![format!("{e}; using defaults")]),
        }
    }
}

fn config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "tinysheet")?;
    Some(proj.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse(Path::new("c.toml"), "").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_file, PathBuf::from("sheet.txt"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse(
            Path::new("c.toml"),
            "default_file = \"budget.txt\"\nlog_file = \"/tmp/tinysheet.log\"\n",
        )
        .unwrap();
        assert_eq!(config.default_file, PathBuf::from("budget.txt"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tinysheet.log")));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Config::parse(Path::new("c.toml"), "colour = \"red\"\n").unwrap_err();
        let AppError::Config { path, message } = err else {
            panic!("expected config error");
        };
        assert_eq!(path, PathBuf::from("c.toml"));
        assert!(message.contains("colour"), "{message}");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(Config::parse(Path::new("c.toml"), "log_level = 3\n").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap().log_level, "debug");
    }
}
