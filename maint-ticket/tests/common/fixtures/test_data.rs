//! Common test data and constants

use chrono::NaiveDate;
use serde_json::{json, Value};

/// A date in March 2024; the next maintenance day is 2024-04-11
pub fn march_2024() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
}

/// Host listing with one host per interesting case
pub fn sample_hosts() -> Value {
    json!([
        { "id": 1, "name": "cp-comcam-01", "hostgroup_title": "cp/comcam/rack1" },
        { "id": 2, "name": "aux-01", "hostgroup_title": "cp/auxtel/rack2" },
        { "id": 3, "name": "other", "hostgroup_title": "unrelated" },
        { "id": 4, "name": "orphan", "hostgroup_title": null }
    ])
}

/// Credentials the mock servers expect
pub mod credentials {
    pub const FOREMAN_USER: &str = "foreman-bot";
    pub const FOREMAN_PASS: &str = "foreman-secret";
    pub const JIRA_USER: &str = "jira-bot";
    pub const JIRA_PASS: &str = "jira-secret";
}

/// Tracker metadata served by the mock
pub mod tracker {
    pub const PROJECT_KEY: &str = "TST";
    pub const PROJECT_ID: &str = "10000";
    pub const ISSUE_TYPE_ID: &str = "4";
    pub const COMPONENT_ID: &str = "10100";
    pub const START_DATE_KEY: &str = "customfield_10500";
    pub const END_DATE_KEY: &str = "customfield_10501";
    pub const ISSUE_KEY: &str = "TST-42";
    pub const ISSUE_ID: &str = "31337";
}

pub const EXPECTED_SUMMARY: &str = "jch test - April, 2024";
pub const EXPECTED_DATE: &str = "2024-04-11";
