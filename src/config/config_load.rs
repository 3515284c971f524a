// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{LoggingConfig, WindowConfig};
use crate::error::{Result, SpringBallError};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads config.toml, first from the executable's directory, then from
    /// the working directory. Runs before logging is up, so failures are
    /// returned for the caller to report.
    pub fn load() -> Result<Self> {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));

        let mut candidates: Vec<PathBuf> = exe_dir
            .map(|dir| dir.join(CONFIG_FILE))
            .into_iter()
            .collect();
        candidates.push(PathBuf::from(CONFIG_FILE));

        Self::load_first(&candidates)
    }

    /// Loads the first candidate that exists. An existing file that fails to
    /// parse is returned as an error, later candidates are not tried.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => Self::load_from(path),
            None => Err(SpringBallError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {} found", CONFIG_FILE),
            ))),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
            [window]
            width = 800
            height = 600
            title = "chain"
            fullscreen = true

            [logging]
            filter = "springball=debug"
        "#;
        let config = Config::parse(content).unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "chain");
        assert!(config.window.fullscreen);
        assert_eq!(config.logging.filter, "springball=debug");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::parse("[window]\nwidth = 320\n").unwrap();
        assert_eq!(config.window.width, 320);
        assert_eq!(config.window.height, WindowConfig::default().height);
        assert_eq!(config.logging, LoggingConfig::default());

        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::parse("[window\nwidth = ").is_err());
        assert!(Config::parse("[window]\nwidth = \"wide\"").is_err());
    }

    // fresh scratch directory under the system temp dir
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "springball-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_invalid_first_config_is_reported() {
        let exe_dir = scratch_dir("invalid-first");
        let cwd_dir = scratch_dir("valid-second");
        let invalid = exe_dir.join(CONFIG_FILE);
        let valid = cwd_dir.join(CONFIG_FILE);
        fs::write(&invalid, "[window]\nwidth = \"wide\"\n").unwrap();
        fs::write(&valid, "[window]\nwidth = 320\n").unwrap();

        let result = Config::load_first(&[invalid, valid]);
        assert!(
            matches!(result, Err(SpringBallError::ConfigParse(_))),
            "got {:?}",
            result
        );

        fs::remove_dir_all(exe_dir).unwrap();
        fs::remove_dir_all(cwd_dir).unwrap();
    }

    #[test]
    fn test_missing_first_config_falls_through() {
        let dir = scratch_dir("fall-through");
        let missing = dir.join("absent").join(CONFIG_FILE);
        let valid = dir.join(CONFIG_FILE);
        fs::write(&valid, "[window]\nwidth = 320\n").unwrap();

        let config = Config::load_first(&[missing, valid]).unwrap();
        assert_eq!(config.window.width, 320);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_no_config_found_is_io_error() {
        let dir = scratch_dir("none-found");
        let result = Config::load_first(&[dir.join(CONFIG_FILE)]);
        assert!(matches!(result, Err(SpringBallError::Io(_))));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(Config::load_from(Path::new("does/not/exist/config.toml")).is_err());
    }
}
