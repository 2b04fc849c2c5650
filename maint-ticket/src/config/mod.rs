// File: maint-ticket/src/config/mod.rs
pub mod manager;
pub mod secrets;

use crate::constants;
use crate::errors::ConfigError;
use crate::inventory::HostGroupPattern;
use serde::{Deserialize, Serialize};

pub use manager::ConfigManager;
pub use secrets::{BasicAuth, Credentials};

/// Everything a run needs. Built once at startup and passed by reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub inventory: InventoryConfig,
    pub tracker: TrackerConfig,
    pub ticket: TicketConfig,
    pub hostgroup_patterns: Vec<String>,
    /// Assemble the ticket but never submit it
    pub noop: bool,
    /// Treat a failed confirmation fetch as a run failure
    pub fail_on_unconfirmed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub base_url: String,
    pub accept_invalid_certs: bool,
    pub per_page: Option<u32>,
    #[serde(skip)]
    pub auth: BasicAuth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub base_url: String,
    #[serde(skip)]
    pub auth: BasicAuth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketConfig {
    pub project_key: String,
    pub issue_type: String,
    pub assignee: String,
    pub component: String,
    pub labels: Vec<String>,
    pub summary_prefix: String,
    pub start_date_field: String,
    pub end_date_field: String,
    pub priority: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory: InventoryConfig::default(),
            tracker: TrackerConfig::default(),
            ticket: TicketConfig::default(),
            hostgroup_patterns: constants::inventory::HOSTGROUP_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            noop: false,
            fail_on_unconfirmed: false,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            base_url: format!("https://{}", constants::inventory::HOSTNAME),
            accept_invalid_certs: constants::inventory::ACCEPT_INVALID_CERTS,
            per_page: None,
            auth: BasicAuth::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            base_url: constants::tracker::BASE_URL.to_string(),
            auth: BasicAuth::default(),
        }
    }
}

impl Default for TicketConfig {
    fn default() -> Self {
        use constants::ticket::*;

        Self {
            project_key: PROJECT_KEY.to_string(),
            issue_type: ISSUE_TYPE.to_string(),
            assignee: ASSIGNEE.to_string(),
            component: COMPONENT.to_string(),
            labels: vec![LABEL.to_string()],
            summary_prefix: SUMMARY_PREFIX.to_string(),
            start_date_field: START_DATE_FIELD.to_string(),
            end_date_field: END_DATE_FIELD.to_string(),
            priority: None,
        }
    }
}

impl Config {
    /// Attach credentials loaded from the environment
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.inventory.auth = credentials.inventory;
        self.tracker.auth = credentials.tracker;
        self
    }

    /// Compile the configured hostgroup patterns, sorted by pattern text
    pub fn compiled_patterns(&self) -> Result<Vec<HostGroupPattern>, ConfigError> {
        let mut patterns = self
            .hostgroup_patterns
            .iter()
            .map(|p| HostGroupPattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        patterns.sort();
        patterns.dedup();
        Ok(patterns)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inventory.base_url.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "inventory.base_url".to_string(),
            });
        }
        if self.tracker.base_url.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "tracker.base_url".to_string(),
            });
        }
        if self.ticket.project_key.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                field: "ticket.project_key".to_string(),
            });
        }
        if self.hostgroup_patterns.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "hostgroup_patterns".to_string(),
                reason: "at least one pattern is required".to_string(),
            });
        }
        if self.inventory.per_page == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "inventory.per_page".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        self.compiled_patterns()?;
        Ok(())
    }
}
