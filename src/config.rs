use crate::error::{QigenError, Result};
use crate::models::common::ConfigStatus;
use std::env;
use std::fs;
use std::path::Path;

/// Prefix every DashScope API key starts with. Saving a key is a format
/// check only; the key is never verified against the provider.
pub const API_KEY_PREFIX: &str = "sk-";

const API_KEY_VAR: &str = "DASHSCOPE_API_KEY";
const API_URL_VAR: &str = "DASHSCOPE_API_URL";

#[derive(Debug, Clone)]
pub struct DashScopeConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

impl Default for DashScopeConfig {
    fn default() -> Self {
        DashScopeConfig {
            api_key: None,
            api_url: None,
        }
    }
}

impl DashScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).ok().filter(|v| !v.trim().is_empty());
        let api_url = env::var(API_URL_VAR).ok().filter(|v| !v.trim().is_empty());

        DashScopeConfig { api_key, api_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn status(&self) -> ConfigStatus {
        let has_key = self.api_key.is_some();
        let has_url = self.api_url.is_some();

        ConfigStatus {
            configured: has_key && has_url,
            has_key,
            has_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: Option<u16>,
    pub history_dir: Option<String>,
    pub env_file: String,
    pub dashscope: DashScopeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: None,
            history_dir: None,
            env_file: ".env".to_string(),
            dashscope: DashScopeConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let port = env::var("PORT").ok().and_then(|port| port.parse().ok());
        let history_dir = env::var("QIGEN_HISTORY_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Config {
            port,
            history_dir,
            env_file: ".env".to_string(),
            dashscope: DashScopeConfig::from_env(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_history_dir(mut self, dir: impl Into<String>) -> Self {
        self.history_dir = Some(dir.into());
        self
    }

    pub fn with_env_file(mut self, path: impl Into<String>) -> Self {
        self.env_file = path.into();
        self
    }

    pub fn with_dashscope(mut self, config: DashScopeConfig) -> Self {
        self.dashscope = config;
        self
    }
}

/// Validates a candidate API key and persists it to the env file, updating
/// an existing `DASHSCOPE_API_KEY` line in place or appending one.
///
/// The running process keeps the config it was started with; the returned
/// message tells the user a restart is needed, rather than hiding the
/// staleness window.
pub fn save_api_key(candidate: &str, env_file: impl AsRef<Path>) -> Result<String> {
    let candidate = candidate.trim();

    if candidate.is_empty() {
        return Err(QigenError::ValidationError(
            "API key must not be empty".into(),
        ));
    }

    if !candidate.starts_with(API_KEY_PREFIX) {
        return Err(QigenError::ValidationError(format!(
            "API key must start with '{}'",
            API_KEY_PREFIX
        )));
    }

    let env_file = env_file.as_ref();
    let existing = fs::read_to_string(env_file).unwrap_or_default();

    let mut lines: Vec<String> = Vec::new();
    let mut replaced = false;
    for line in existing.lines() {
        if line.trim_start().starts_with(API_KEY_VAR) {
            lines.push(format!("{}={}", API_KEY_VAR, candidate));
            replaced = true;
        } else {
            lines.push(line.to_string());
        }
    }
    if !replaced {
        lines.push(format!("{}={}", API_KEY_VAR, candidate));
    }

    let mut content = lines.join("\n");
    content.push('\n');

    fs::write(env_file, content).map_err(|e| {
        QigenError::ConfigError(format!(
            "Failed to write {}: {}",
            env_file.display(),
            e
        ))
    })?;

    log::info!("API key saved to {}", env_file.display());

    Ok(format!(
        "API key saved to {}. Restart the service for it to take effect.",
        env_file.display()
    ))
}
