//! User configuration
//!
//! Read once at start-up from `countdown-tui/config.toml` in the platform
//! config directory. Every field has a default, so a file that sets only some
//! fields is fine. A missing file means defaults; the app never writes one.

use serde::{Deserialize, Serialize};

/// Application name used for the config and log directories.
pub const APP_NAME: &str = "countdown-tui";
const CONFIG_NAME: &str = "config";

/// Colours and window behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window background.
    pub background: String,
    /// Clock and status text colour.
    pub foreground: String,
    /// Window background once time is up.
    pub alert_background: String,
    /// Width of the windowed frame in columns.
    pub windowed_width: u16,
    /// Height of the windowed frame in rows.
    pub windowed_height: u16,
    /// Start in fullscreen rather than windowed.
    pub start_fullscreen: bool,
    /// Longest gap between two clicks that still counts as a double-click.
    pub double_click_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: "#333333".to_string(),
            foreground: "#ffffff".to_string(),
            alert_background: "#ff0000".to_string(),
            windowed_width: 80,
            windowed_height: 20,
            start_fullscreen: false,
            double_click_ms: 400,
        }
    }
}

impl Config {
    /// Loads the user's configuration, or the defaults when there is no file.
    pub fn load() -> crate::Result<Self> {
        let path = confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)?;
        Self::load_from(&path)
    }

    /// Loads configuration from `path` without creating it.
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = ?path, "no configuration file");
            return Ok(Self::default());
        }
        Ok(confy::load_path(path)?)
    }

    /// Loads the user's configuration, falling back to defaults if it cannot
    /// be read.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// The double-click window as a [`std::time::Duration`].
    pub fn double_click_window(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.double_click_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.background, "#333333");
        assert_eq!(config.alert_background, "#ff0000");
        assert_eq!((config.windowed_width, config.windowed_height), (80, 20));
        assert!(!config.start_fullscreen);
        assert_eq!(config.double_click_window().as_millis(), 400);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml_from_str("start_fullscreen = true\nalert_background = \"#aa0000\"\n");
        assert!(config.start_fullscreen);
        assert_eq!(config.alert_background, "#aa0000");
        assert_eq!(config.background, "#333333");
        assert_eq!(config.windowed_width, 80);
    }

    #[test]
    fn test_missing_file_is_not_created() {
        let dir = test_dir("missing");
        let path = dir.join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!path.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    fn test_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "countdown-tui-test-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn toml_from_str(s: &str) -> Config {
        let dir = test_dir("partial");
        let path = dir.join("config.toml");
        std::fs::write(&path, s).unwrap();
        let config = Config::load_from(&path).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
        config
    }
}
