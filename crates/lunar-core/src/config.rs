//! Configuration system for the lunar link daemon.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $LUNAR_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/lunar/config.toml
//!   3. ~/.config/lunar/config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::link::TransmissionConfig;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarConfig {
    pub api: ApiConfig,
    /// Link parameters in effect at startup. Changeable at runtime via the API.
    pub link: TransmissionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Built dashboard to serve at `/`. Skipped if the directory is missing.
    pub static_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("frontend/build"),
        }
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_or_home().join(".config"))
        .join("lunar")
}

fn dirs_or_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
    #[error("failed to write {0}: {1}")]
    WriteFailed(PathBuf, std::io::Error),
    #[error("failed to serialize: {0}")]
    SerializeFailed(toml::ser::Error),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl LunarConfig {
    /// Load config: env vars → file → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::file_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let text = std::fs::read_to_string(path)
                .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
            toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))?
        } else {
            LunarConfig::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var("LUNAR_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Write default config if none exists. Returns the path.
    pub fn write_default_if_missing() -> Result<PathBuf, ConfigError> {
        let path = Self::file_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::WriteFailed(path.clone(), e))?;
            }
            let text = toml::to_string_pretty(&LunarConfig::default())
                .map_err(ConfigError::SerializeFailed)?;
            std::fs::write(&path, text).map_err(|e| ConfigError::WriteFailed(path.clone(), e))?;
        }
        Ok(path)
    }

    /// Apply PORT and LUNAR_* overrides. Values that fail to parse are ignored.
    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(p) = var("PORT").and_then(|v| v.parse().ok()) {
            self.api.port = p;
        }
        if let Some(v) = var("LUNAR_API__HOST") {
            self.api.host = v;
        }
        if let Some(p) = var("LUNAR_API__PORT").and_then(|v| v.parse().ok()) {
            self.api.port = p;
        }
        if let Some(v) = var("LUNAR_API__STATIC_DIR") {
            self.api.static_dir = PathBuf::from(v);
        }
        if let Some(d) = var("LUNAR_LINK__DISTANCE_KM").and_then(|v| v.parse().ok()) {
            self.link.distance_km = d;
        }
        if let Some(b) = var("LUNAR_LINK__BANDWIDTH_BPS").and_then(|v| v.parse().ok()) {
            self.link.bandwidth_bps = b;
        }
        if let Some(v) = var("LUNAR_LINK__COMPRESSION_ENABLED") {
            self.link.compression_enabled = v == "true" || v == "1";
        }
        if let Some(s) = var("LUNAR_LINK__LATENCY_SCALE_FACTOR").and_then(|v| v.parse().ok()) {
            self.link.latency_scale_factor = s;
        }
    }
}
