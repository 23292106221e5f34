//! Application configuration.

use crate::application::services::SortOrder;
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "shelfwatch";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "shelfwatch";

const LOG_FILE_NAME: &str = "shelfwatch.log";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory holding `inventory.json` and the log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Custom keybindings.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    /// Sort order applied at startup.
    #[serde(default)]
    pub default_sort: SortOrder,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration: default_notification_duration(),
            default_sort: SortOrder::default(),
        }
    }
}

/// Theme configuration.
///
/// Light/dark is a runtime toggle persisted in `state.toml`, not a setting here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    "Green".to_string()
}

fn default_notification_duration() -> u64 {
    5
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(data_dir) = args.data_dir {
            self.data_dir = Some(data_dir);
        }
        if let Some(notification_duration) = args.notification_duration {
            self.ui.notification_duration = notification_duration;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns effective data directory.
    #[must_use]
    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(Self::default_data_dir)
    }

    /// Returns effective log path, next to the inventory unless overridden.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path
            .clone()
            .or_else(|| self.effective_data_dir().map(|dir| dir.join(LOG_FILE_NAME)))
    }

    /// Returns the notice display time.
    #[must_use]
    pub const fn notification_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.ui.notification_duration)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            data_dir: None,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r##"
            log_level = "debug"
            data_dir = "/tmp/pantry"

            [ui]
            notification_duration = 2
            default_sort = "ascending"

            [theme]
            accent_color = "#ff8800"

            [keybindings]
            "F2" = "ToggleTheme"
            "Ctrl+q" = "Quit"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/pantry")));
        assert_eq!(config.ui.notification_duration, 2);
        assert_eq!(config.ui.default_sort, SortOrder::Ascending);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.keybindings.get("F2"), Some(&Action::ToggleTheme));
        assert_eq!(config.keybindings.get("Ctrl+q"), Some(&Action::Quit));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.keybindings.is_empty());
        assert_eq!(config.ui.default_sort, SortOrder::None);
        assert_eq!(config.notification_duration().as_secs(), 5);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.theme.accent_color, "Green");
        assert_eq!(config.ui.notification_duration, 5);
    }

    #[test]
    fn test_cli_args_override_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "shelfwatch",
            "--data-dir",
            "/srv/pantry",
            "--log-level",
            "warn",
            "--accent-color",
            "Blue",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/pantry")));
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.theme.accent_color, "Blue");
        assert_eq!(config.ui.notification_duration, 5);
    }

    #[test]
    fn test_log_path_follows_data_dir() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/pantry")),
            ..AppConfig::default()
        };

        assert_eq!(
            config.effective_log_path(),
            Some(PathBuf::from("/srv/pantry/shelfwatch.log"))
        );
    }
}
