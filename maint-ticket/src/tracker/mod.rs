// File: maint-ticket/src/tracker/mod.rs
//! Issue tracker access: a thin JIRA REST client plus the metadata lookups
//! that turn configured names into the ids an issue payload needs.

pub mod client;
pub mod lookup;
pub mod models;

pub use client::JiraClient;
pub use models::{Component, CreatedIssue, Issue, IssueType, Priority, Project};
