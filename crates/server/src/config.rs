use std::path::{Path, PathBuf};

use antiabuse::AntiAbuseConfig;
use llm::LlmConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

pub const CONFIG_DIR: &str = ".promptcraft";
pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;

pub const ENV_OPENROUTER_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_RECAPTCHA_SITE_KEY: &str = "RECAPTCHA_SITE_KEY";
pub const ENV_RECAPTCHA_SECRET_KEY: &str = "RECAPTCHA_SECRET_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Directory holding a built front end, served for unmatched paths
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            app_dir: None,
        }
    }
}

/// Application configuration stored in .promptcraft/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub anti_abuse: AntiAbuseConfig,
}

impl AppConfig {
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Read config from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub async fn read(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "Config file does not exist, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path).await {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!(path = %path.display(), "Config loaded successfully");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                Self::default()
            }
        }
    }

    pub async fn write(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).await?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).await?;
        debug!(path = %path.display(), "Config saved successfully");

        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_key) = lookup(ENV_OPENROUTER_API_KEY) {
            self.llm.api_key = api_key;
        }
        if let Some(site_key) = lookup(ENV_RECAPTCHA_SITE_KEY) {
            self.anti_abuse.site_key = Some(site_key);
        }
        if let Some(secret_key) = lookup(ENV_RECAPTCHA_SECRET_KEY) {
            self.anti_abuse.secret_key = Some(secret_key);
        }
        self
    }
}
