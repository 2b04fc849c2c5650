//! Test configuration builder for pointing a run at mock servers

use super::test_data::credentials;
use maint_ticket::config::{BasicAuth, Config};

/// Builder for creating test configurations
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    pub fn new(inventory_url: &str, tracker_url: &str) -> Self {
        let mut config = Config::default();
        config.inventory.base_url = inventory_url.to_string();
        config.inventory.auth = BasicAuth::new(credentials::FOREMAN_USER, credentials::FOREMAN_PASS);
        config.tracker.base_url = tracker_url.to_string();
        config.tracker.auth = BasicAuth::new(credentials::JIRA_USER, credentials::JIRA_PASS);
        Self { config }
    }

    pub fn noop(mut self) -> Self {
        self.config.noop = true;
        self
    }

    pub fn fail_on_unconfirmed(mut self) -> Self {
        self.config.fail_on_unconfirmed = true;
        self
    }

    pub fn with_issue_type(mut self, name: &str) -> Self {
        self.config.ticket.issue_type = name.to_string();
        self
    }

    pub fn with_priority(mut self, name: &str) -> Self {
        self.config.ticket.priority = Some(name.to_string());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
