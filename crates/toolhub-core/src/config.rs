use crate::lookup::DEFAULT_LATENCY_MS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
///
/// Loaded from `<config dir>/toolhub/config.toml`; CLI flags override it.
/// Every field has a default so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load config from default location, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)
                .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            // No config file? Use defaults
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// XDG config dir on Linux, Application Support on macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("toolhub");

        Ok(config_dir.join("config.toml"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    /// "Dark" or "Light"
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_mouse")]
    pub mouse_enabled: bool,
}

fn default_theme() -> String {
    "Dark".to_string()
}

fn default_mouse() -> bool {
    false
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            mouse_enabled: default_mouse(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupConfig {
    /// Simulated fetch latency in milliseconds
    #[serde(default = "default_latency")]
    pub latency_ms: u64,
}

fn default_latency() -> u64 {
    DEFAULT_LATENCY_MS
}

impl LookupConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON file replacing the built-in tool list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "Dark");
        assert_eq!(config.lookup.latency_ms, 2000);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("latency_ms"));
        assert!(toml.contains("theme"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[lookup]\nlatency_ms = 10\n").unwrap();
        assert_eq!(config.lookup.latency(), Duration::from_millis(10));
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.ui.theme = "Light".to_string();
        config.catalog.path = Some(PathBuf::from("/tmp/tools.json"));
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_broken_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ui = [[[").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(crate::Error::ConfigError(_))
        ));
    }
}
