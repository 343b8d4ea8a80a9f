//! Server configuration.
//!
//! Settings are layered: built-in defaults, then an optional JSON file, then
//! environment variables. The CLI applies its flags on top.
//!
//! Environment variables:
//! - `HEXBOARD_HOST` - Bind address (default: `127.0.0.1`)
//! - `HEXBOARD_PORT` - HTTP port (default: `3000`)
//! - `HEXBOARD_LOGIN_DELAY_MS` - Simulated sign-in round trip (default: `500`)
//! - `HEXBOARD_CORS_ORIGINS` - Allowed CORS origins, comma-separated (default: any)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::DEFAULT_LOGIN_DELAY;

const APP_NAME: &str = "hexboard";
const CONFIG_FILE: &str = "config.json";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// How long the mock sign-in takes to complete.
    pub login_delay: Duration,
    /// Allowed CORS origins. `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            login_delay: DEFAULT_LOGIN_DELAY,
            cors_origins: None,
        }
    }
}

/// On-disk form of [`Config`]. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub login_delay_ms: Option<u64>,
    pub cors_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from `path`, or from the user's config directory when
    /// no path is given, then apply environment overrides.
    ///
    /// An explicit path must exist. The default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let file = match path {
            Some(path) => Some(read_file(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => Some(read_file(&path)?),
                _ => None,
            },
        };
        if let Some(file) = file {
            config.apply_file(file);
        }

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: FileConfig) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if let Some(ms) = file.login_delay_ms {
            self.login_delay = Duration::from_millis(ms);
        }
        if let Some(origins) = file.cors_origins {
            self.cors_origins = Some(origins);
        }
    }

    /// Apply overrides from environment variables, read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("HEXBOARD_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("HEXBOARD_PORT") {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid HEXBOARD_PORT: {}", port))?;
        }
        if let Some(ms) = lookup("HEXBOARD_LOGIN_DELAY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("Invalid HEXBOARD_LOGIN_DELAY_MS: {}", ms))?;
            self.login_delay = Duration::from_millis(ms);
        }
        if let Some(origins) = lookup("HEXBOARD_CORS_ORIGINS") {
            self.cors_origins = Some(
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            );
        }
        Ok(())
    }

    /// `host:port` for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// `<config dir>/hexboard/config.json`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
