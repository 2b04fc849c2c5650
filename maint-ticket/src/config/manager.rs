// File: maint-ticket/src/config/manager.rs
use super::{Config, Credentials};
use crate::errors::ConfigError;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{info, warn};

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    /// Load the config file (if any), attach environment credentials, validate.
    pub async fn new(config_path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::load_file(config_path.as_ref()).await?;
        let config = config.with_credentials(Credentials::from_env()?);
        config.validate()?;

        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    /// Parse the TOML file at `path`. A missing file yields the compiled-in
    /// defaults.
    pub async fn load_file(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            warn!(
                "Config file not found at {}, using compiled-in defaults",
                path.display()
            );
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::LoadFailed { reason, .. } => ConfigError::LoadFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;

        info!(
            "Loaded config from {}: {} hostgroup patterns, project {}",
            path.display(),
            config.hostgroup_patterns.len(),
            config.ticket.project_key
        );

        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::LoadFailed {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }
}
