//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority
//! (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SNOW_SECTION__KEY`)
//!
//! All settings have built-in defaults, so the program runs with no config
//! files present.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use snowfall_sim::DEFAULT_FLAKE_COUNT;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Layering daemon configuration
    #[serde(default)]
    pub daemon: DaemonConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            simulation: SimulationConfig::default(),
            daemon: DaemonConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SNOW_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SNOW_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SNOW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title, also used by the layering daemon to find the window
    pub title: String,
    /// Fallback class name for the daemon lookup (the class winit registers
    /// on Windows)
    pub class: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Snow Wallpaper".to_string(),
            class: "Window Class".to_string(),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of snowflakes in the field
    pub flake_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            flake_count: DEFAULT_FLAKE_COUNT,
        }
    }
}

/// Layering daemon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Delay before the first restack, in milliseconds
    pub startup_delay_ms: u64,
    /// Interval between restacks, in milliseconds
    pub interval_ms: u64,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            startup_delay_ms: 500,
            interval_ms: 1000,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.title, "Snow Wallpaper");
        assert_eq!(config.simulation.flake_count, 300);
        assert_eq!(config.daemon.startup_delay_ms, 500);
        assert_eq!(config.daemon.interval_ms, 1000);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("flake_count"));
    }
}
