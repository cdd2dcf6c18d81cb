//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! sensible default so the application works without a config file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_ui")]
    pub ui: UiConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: default_ui(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Name used in the header greeting and to sign follow-up emails.
    #[serde(default = "default_user_name")]
    pub user_name: String,
    /// chrono format string for dates shown in cards and panels.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub skip_onboarding: bool,
}

/// US-style month/day/year without padding.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Where "Export All Data" writes its JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub dir: PathBuf,
}

impl ExportConfig {
    /// `dir` with a leading `~` expanded.
    pub fn resolved_dir(&self) -> PathBuf {
        super::expand_home(&self.dir)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: default_export_dir(),
        }
    }
}

/// Diagnostic log settings. Off by default; the terminal belongs to the UI,
/// so logs only ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// `tracing` filter directive, e.g. `info` or `perfect_context=debug`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_user_name() -> String {
    "Mary".to_string()
}
fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}
fn default_tick_rate() -> u64 {
    250
}
fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_log_dir() -> String {
    "~/.local/share/perfect-context/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_ui() -> UiConfig {
    UiConfig {
        user_name: default_user_name(),
        date_format: default_date_format(),
        tick_rate_ms: default_tick_rate(),
        skip_onboarding: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.ui.user_name, "Mary");
        assert_eq!(cfg.ui.date_format, "%-m/%-d/%Y");
        assert!(!cfg.ui.skip_onboarding);
        assert_eq!(cfg.export.dir, PathBuf::from("."));
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn partial_sections_fill_in() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            user_name = "Dana"
            skip_onboarding = true

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.user_name, "Dana");
        assert!(cfg.ui.skip_onboarding);
        assert_eq!(cfg.ui.tick_rate_ms, 250);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }
}
