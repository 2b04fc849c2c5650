// File: maint-ticket/src/tracker/models.rs
use serde::{Deserialize, Serialize};

/// Project document. The tracker embeds the project's issue types and
/// components, which is where those lookups are served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "issueTypes")]
    pub issue_types: Vec<IssueType>,
    #[serde(default)]
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
}

/// Response to an issue creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
    pub id: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub key: String,
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
}

impl Issue {
    pub fn summary(&self) -> &str {
        &self.fields.summary
    }
}

/// Metadata entries resolved by exact name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for IssueType {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Component {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Priority {
    fn name(&self) -> &str {
        &self.name
    }
}
