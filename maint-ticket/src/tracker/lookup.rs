// File: maint-ticket/src/tracker/lookup.rs
//! Exact-name lookups over tracker metadata. Each is a linear search; a
//! miss is a [`LookupError::NotFound`] and must stop ticket creation.

use super::models::{Component, IssueType, Named, Priority};
use crate::errors::LookupError;
use std::collections::HashMap;

fn find_named<'a, T: Named>(
    items: &'a [T],
    kind: &'static str,
    name: &str,
) -> Result<&'a T, LookupError> {
    items
        .iter()
        .find(|item| item.name() == name)
        .ok_or_else(|| LookupError::NotFound {
            kind,
            name: name.to_string(),
        })
}

pub fn find_issue_type<'a>(issue_types: &'a [IssueType], name: &str) -> Result<&'a IssueType, LookupError> {
    find_named(issue_types, "issue type", name)
}

pub fn find_component<'a>(components: &'a [Component], name: &str) -> Result<&'a Component, LookupError> {
    find_named(components, "component", name)
}

pub fn find_priority<'a>(priorities: &'a [Priority], name: &str) -> Result<&'a Priority, LookupError> {
    find_named(priorities, "priority", name)
}

/// Field id (e.g. `customfield_10500`) for a field's display name
pub fn find_field_key<'a>(fields: &'a HashMap<String, String>, name: &str) -> Result<&'a str, LookupError> {
    fields
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| LookupError::NotFound {
            kind: "field",
            name: name.to_string(),
        })
}
