// File: maint-ticket/src/inventory/mod.rs
//! Host inventory access
//!
//! Hosts come from a Foreman instance's `/api/v2/hosts` listing and are
//! grouped by matching their hostgroup title against configured patterns.

pub mod client;
pub mod summary;

use crate::errors::ConfigError;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub use client::HostInventory;
pub use summary::{hostgroup_filter, hostnames, HostSummary};

/// One host as listed by the inventory. Only the fields used here are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    pub name: String,
    #[serde(default)]
    pub hostgroup_title: Option<String>,
}

impl HostRecord {
    pub fn new(name: impl Into<String>, hostgroup_title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostgroup_title: Some(hostgroup_title.into()),
        }
    }
}

/// A regular expression matched (unanchored, case-sensitive) against a
/// host's hostgroup title. Ordered and compared by its source text.
#[derive(Debug, Clone)]
pub struct HostGroupPattern {
    source: String,
    regex: Regex,
}

impl HostGroupPattern {
    pub fn new(source: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(source).map_err(|e| ConfigError::InvalidValue {
            field: "hostgroup_patterns".to_string(),
            reason: format!("'{}' is not a valid pattern: {}", source, e),
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Hosts without a hostgroup never match
    pub fn matches(&self, record: &HostRecord) -> bool {
        record
            .hostgroup_title
            .as_deref()
            .is_some_and(|title| self.regex.is_match(title))
    }
}

impl PartialEq for HostGroupPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for HostGroupPattern {}

impl PartialOrd for HostGroupPattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostGroupPattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source.cmp(&other.source)
    }
}

impl fmt::Display for HostGroupPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
