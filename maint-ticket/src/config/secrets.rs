// File: maint-ticket/src/config/secrets.rs
//! Credential loading for the inventory and the tracker.
//!
//! Credentials never live in the config file. They are read once at startup
//! from four environment variables:
//!
//! ```text
//! FOREMAN_USER / FOREMAN_PASS   inventory basic auth
//! JIRA_USER    / JIRA_PASS      tracker basic auth
//! ```

use crate::constants::env;
use crate::errors::ConfigError;
use std::fmt;
use tracing::debug;

/// Username/password pair for HTTP basic auth
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs and `{:?}` dumps
impl fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub inventory: BasicAuth,
    pub tracker: BasicAuth,
}

impl Credentials {
    /// Read all four variables from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read credentials through `lookup`. Every variable must be present and
    /// non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired {
                    field: name.to_string(),
                })
        };

        let credentials = Self {
            inventory: BasicAuth::new(require(env::FOREMAN_USER)?, require(env::FOREMAN_PASS)?),
            tracker: BasicAuth::new(require(env::JIRA_USER)?, require(env::JIRA_PASS)?),
        };

        debug!(
            "Loaded credentials for inventory user '{}' and tracker user '{}'",
            credentials.inventory.username, credentials.tracker.username
        );

        Ok(credentials)
    }
}
