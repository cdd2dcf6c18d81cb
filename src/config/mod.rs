pub mod model;

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, ExportConfig, LoggingConfig, UiConfig, DEFAULT_DATE_FORMAT};

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("perfect-context")
        .join("config.toml")
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let mut config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    if !is_valid_date_format(&config.ui.date_format) {
        tracing::warn!(format = %config.ui.date_format, "invalid date format, using default");
        config.ui.date_format = DEFAULT_DATE_FORMAT.to_string();
    }
    Ok(config)
}

/// Expand a leading `~` component to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// `true` when every strftime specifier in `fmt` is one chrono understands.
pub fn is_valid_date_format(fmt: &str) -> bool {
    StrftimeItems::new(fmt).all(|item| !matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.ui.tick_rate_ms, 250);
    }

    #[test]
    fn bad_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nuser_name = 3").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{}", err).contains("config.toml"));
    }

    #[test]
    fn reads_export_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[export]\ndir = \"/tmp/pc\"\n").unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.export.dir, PathBuf::from("/tmp/pc"));
    }

    #[test]
    fn bad_date_format_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\ndate_format = \"%Q\"\n").unwrap();
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.ui.date_format, DEFAULT_DATE_FORMAT);

        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(!is_valid_date_format("%Q"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~/exports")), home.join("exports"));
        }
        assert_eq!(expand_home(Path::new("/var/log/pc")), PathBuf::from("/var/log/pc"));
        assert_eq!(expand_home(Path::new("~user/x")), PathBuf::from("~user/x"));
        assert_eq!(expand_home(Path::new("out")), PathBuf::from("out"));
    }
}
