//! Configuration loader with multi-source merging

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Timing configuration for the cosmetic delays
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// How long the "Registration Successful!" display stays up before the
    /// session auto-returns home (milliseconds)
    pub submit_reset_ms: u64,
    /// Pause between a chat menu selection and the bot's scripted reply
    /// (milliseconds)
    pub chat_reply_ms: u64,
    /// How long status-bar flash messages stay visible (milliseconds)
    pub flash_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_reset_ms: 2500,
            chat_reply_ms: 600,
            flash_ms: 4000,
        }
    }
}

impl TimingConfig {
    pub fn submit_reset(&self) -> Duration {
        Duration::from_millis(self.submit_reset_ms)
    }

    pub fn chat_reply(&self) -> Duration {
        Duration::from_millis(self.chat_reply_ms)
    }

    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }
}

/// UI behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show context-sensitive key hints in the status bar
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Timing settings
    pub timing: TimingConfig,
    /// UI settings
    pub ui: UiConfig,
}

/// Configuration loader that merges multiple sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./polyintern.toml` or `./.polyintern.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/polyintern/config.toml`
    /// 4. Fallback: `~/.config/polyintern/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<AppConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        // Add project-level config files (check both names)
        for filename in &["polyintern.toml", ".polyintern.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> AppConfig {
        AppConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/polyintern/config.toml if set,
    /// otherwise falls back to ~/.config/polyintern/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("polyintern").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["polyintern.toml", ".polyintern.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./polyintern.toml or ./.polyintern.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.timing.submit_reset_ms, 2500);
        assert_eq!(config.timing.chat_reply_ms, 600);
        assert_eq!(config.timing.flash_ms, 4000);
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_timing_durations() {
        let timing = TimingConfig::default();
        assert_eq!(timing.submit_reset(), Duration::from_millis(2500));
        assert_eq!(timing.chat_reply(), Duration::from_millis(600));
        assert_eq!(timing.flash(), Duration::from_millis(4000));
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.timing.submit_reset_ms, 2500);
        assert!(config.ui.show_key_hints);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("polyintern"));
    }

    #[test]
    fn test_deserialize_toml() {
        let toml_str = r#"
[timing]
submit_reset_ms = 1000
chat_reply_ms = 250

[ui]
show_key_hints = false
"#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.timing.submit_reset_ms, 1000);
        assert_eq!(config.timing.chat_reply_ms, 250);
        // Unspecified keys fall back to defaults
        assert_eq!(config.timing.flash_ms, 4000);
        assert!(!config.ui.show_key_hints);
    }
}
