// ABOUTME: Configuration loading for popchat.
// ABOUTME: Reads ~/.popchat/config.toml with serde defaults; CLI flags override.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub widget: WidgetConfig,
    pub responder: ResponderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            widget: WidgetConfig::default(),
            responder: ResponderConfig::default(),
        }
    }
}

/// Popup widget presentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Chatbot".to_string(),
        }
    }
}

/// Canned responder settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponderConfig {
    pub reply_text: String,
    pub delay_ms: u64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            reply_text: "This is a sample response from AI.".to_string(),
            delay_ms: 1000,
        }
    }
}

impl ResponderConfig {
    /// The reply delay as a Duration.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    /// Load config from ~/.popchat/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".popchat")
            .join("config.toml")
    }
}
