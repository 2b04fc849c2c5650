// File: maint-ticket/src/tracker/client.rs
use super::models::{Component, CreatedIssue, Field, Issue, IssueType, Priority, Project};
use crate::config::{BasicAuth, TrackerConfig};
use crate::constants::tracker::API_PREFIX;
use crate::errors::{HttpError, Service};
use crate::http::{build_client, join_url, send_json};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, info};

/// JIRA REST v2 client authenticated with basic auth
pub struct JiraClient {
    client: Client,
    base_url: String,
    auth: BasicAuth,
}

impl JiraClient {
    pub fn new(config: &TrackerConfig) -> Result<Self, HttpError> {
        Ok(Self {
            client: build_client(Service::Tracker, &config.base_url, false)?,
            base_url: config.base_url.clone(),
            auth: config.auth.clone(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        join_url(&self.base_url, &format!("{}{}", API_PREFIX, path))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.auth.username, Some(&self.auth.password))
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let url = self.api_url(path);
        debug!("GET {}", url);
        let request = self.authorized(self.client.get(&url));
        send_json(Service::Tracker, &url, request).await
    }

    pub async fn find_project(&self, key: &str) -> Result<Project, HttpError> {
        let project: Project = self.get(&format!("/project/{}", key)).await?;
        info!(
            "Found project {} (id {}) with {} issue types and {} components",
            project.key,
            project.id,
            project.issue_types.len(),
            project.components.len()
        );
        Ok(project)
    }

    pub fn list_issue_types<'a>(&self, project: &'a Project) -> &'a [IssueType] {
        &project.issue_types
    }

    pub fn list_components<'a>(&self, project: &'a Project) -> &'a [Component] {
        &project.components
    }

    /// Field display name to field id. When two fields share a name the
    /// first one listed wins.
    pub async fn field_map(&self) -> Result<HashMap<String, String>, HttpError> {
        let fields: Vec<Field> = self.get("/field").await?;
        let mut map = HashMap::with_capacity(fields.len());
        for field in fields {
            map.entry(field.name).or_insert(field.id);
        }
        debug!("Tracker exposes {} fields", map.len());
        Ok(map)
    }

    pub async fn list_priorities(&self) -> Result<Vec<Priority>, HttpError> {
        self.get("/priority").await
    }

    /// Single write. The tracker answers with the assigned key.
    pub async fn create_issue(&self, fields: &Value) -> Result<CreatedIssue, HttpError> {
        let url = self.api_url("/issue");
        info!("Creating issue at {}", url);
        let request = self
            .authorized(self.client.post(&url))
            .json(&json!({ "fields": fields }));
        let created: CreatedIssue = send_json(Service::Tracker, &url, request).await?;
        info!("Tracker assigned key {} (id {})", created.key, created.id);
        Ok(created)
    }

    pub async fn fetch_issue(&self, key: &str) -> Result<Issue, HttpError> {
        self.get(&format!("/issue/{}", key)).await
    }
}
