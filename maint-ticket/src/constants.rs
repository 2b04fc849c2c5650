//! Compiled-in deployment constants
//!
//! These are the values the tool runs with when no config file overrides them.
//! Grouped by the service they belong to.

use std::time::Duration;

/// HTTP transport constants
pub mod http {
    use super::Duration;

    /// Timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent to both services
    pub const USER_AGENT: &str = concat!("maint-ticket/", env!("CARGO_PKG_VERSION"));
}

/// Host inventory (Foreman) constants
pub mod inventory {
    /// Inventory hostname
    pub const HOSTNAME: &str = "foreman.cp.lsst.org";

    /// Host listing endpoint
    pub const HOSTS_PATH: &str = "/api/v2/hosts";

    /// The internal inventory serves a self-signed certificate
    pub const ACCEPT_INVALID_CERTS: bool = true;

    /// Hostgroups whose hosts are announced in the ticket
    pub const HOSTGROUP_PATTERNS: &[&str] = &["^cp/comcam", "^cp/auxtel"];
}

/// Issue tracker (JIRA) constants
pub mod tracker {
    /// Tracker base URL
    pub const BASE_URL: &str = "https://jira.lsstcorp.org";

    /// REST API prefix
    pub const API_PREFIX: &str = "/rest/api/2";
}

/// Ticket content constants
pub mod ticket {
    pub const PROJECT_KEY: &str = "TST";
    pub const ISSUE_TYPE: &str = "Improvement";
    pub const ASSIGNEE: &str = "jhoblitt";
    pub const COMPONENT: &str = "Something";
    pub const LABEL: &str = "it-calendar";
    pub const SUMMARY_PREFIX: &str = "jch test";

    /// Custom field names resolved through the tracker's field map
    pub const START_DATE_FIELD: &str = "Start date";
    pub const END_DATE_FIELD: &str = "End date";

    pub const DESCRIPTION_PREAMBLE: &str = "Maintenance is planned on these hosts:";
}

/// Environment variables holding credentials
pub mod env {
    pub const FOREMAN_USER: &str = "FOREMAN_USER";
    pub const FOREMAN_PASS: &str = "FOREMAN_PASS";
    pub const JIRA_USER: &str = "JIRA_USER";
    pub const JIRA_PASS: &str = "JIRA_PASS";

    /// Set to `1` or `true` to assemble the ticket without submitting it
    pub const NOOP: &str = "MAINT_TICKET_NOOP";
}

/// Default location of the optional config file
pub const DEFAULT_CONFIG_PATH: &str = "config/main.toml";
