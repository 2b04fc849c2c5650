// File: maint-ticket/src/inventory/summary.rs
use super::{HostGroupPattern, HostRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Records whose hostgroup title matches `pattern`, in input order
pub fn hostgroup_filter<'a>(
    records: &'a [HostRecord],
    pattern: &HostGroupPattern,
) -> Vec<&'a HostRecord> {
    records.iter().filter(|r| pattern.matches(r)).collect()
}

pub fn hostnames(records: &[&HostRecord]) -> Vec<String> {
    records.iter().map(|r| r.name.clone()).collect()
}

/// Host names per hostgroup pattern. Keys iterate in pattern order and each
/// name list is sorted, so serializing the same input always yields the same
/// bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HostSummary {
    groups: BTreeMap<String, Vec<String>>,
}

impl HostSummary {
    pub fn build(records: &[HostRecord], patterns: &[HostGroupPattern]) -> Self {
        let mut sorted: Vec<&HostGroupPattern> = patterns.iter().collect();
        sorted.sort();

        let groups = sorted
            .into_iter()
            .map(|pattern| {
                let mut names = hostnames(&hostgroup_filter(records, pattern));
                names.sort();
                (pattern.as_str().to_string(), names)
            })
            .collect();

        Self { groups }
    }

    pub fn get(&self, pattern: &str) -> Option<&[String]> {
        self.groups.get(pattern).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn host_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.host_count() == 0
    }

    /// Block-style YAML mapping of pattern to host list
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.groups)
    }
}
