//! Mock JIRA server for testing ticket creation
//!
//! Serves the project document, field list, issue creation and issue fetch
//! endpoints. Creation requests can be captured to inspect the payload.

use super::test_data::{credentials, tracker};
use serde_json::{json, Value};
use wiremock::{
    matchers::{basic_auth, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub struct MockJiraServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockJiraServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Project, fields and priorities matching the default ticket config
    pub async fn mock_metadata(&self) {
        self.mock_project(json!([{ "id": tracker::COMPONENT_ID, "name": "Something" }]))
            .await;
        self.mock_fields().await;
        self.mock_priorities().await;
    }

    pub async fn mock_project(&self, components: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/rest/api/2/project/{}", tracker::PROJECT_KEY)))
            .and(basic_auth(credentials::JIRA_USER, credentials::JIRA_PASS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": tracker::PROJECT_ID,
                "key": tracker::PROJECT_KEY,
                "name": "Test Project",
                "issueTypes": [
                    { "id": "1", "name": "Bug", "subtask": false },
                    { "id": tracker::ISSUE_TYPE_ID, "name": "Improvement", "subtask": false }
                ],
                "components": components
            })))
            .mount(&self.server)
            .await;
    }

    /// The project key is unknown to the tracker
    pub async fn mock_project_missing(&self) {
        Mock::given(method("GET"))
            .and(path(format!("/rest/api/2/project/{}", tracker::PROJECT_KEY)))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errorMessages": [format!("No project could be found with key '{}'.", tracker::PROJECT_KEY)],
                "errors": {}
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_fields(&self) {
        Mock::given(method("GET"))
            .and(path("/rest/api/2/field"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "summary", "name": "Summary", "custom": false },
                { "id": tracker::START_DATE_KEY, "name": "Start date", "custom": true },
                { "id": tracker::END_DATE_KEY, "name": "End date", "custom": true }
            ])))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_priorities(&self) {
        Mock::given(method("GET"))
            .and(path("/rest/api/2/priority"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "1", "name": "Blocker" },
                { "id": "10000", "name": "SUMMIT-1" }
            ])))
            .mount(&self.server)
            .await;
    }

    /// Accept issue creation, `expected` times
    pub async fn mock_create_issue(&self, expected: u64) {
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .and(basic_auth(credentials::JIRA_USER, credentials::JIRA_PASS))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": tracker::ISSUE_ID,
                "key": tracker::ISSUE_KEY,
                "self": "http://jira/rest/api/2/issue/31337"
            })))
            .expect(expected)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_create_failure(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path("/rest/api/2/issue"))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "errorMessages": [],
                "errors": { "assignee": "User 'jhoblitt' does not exist." }
            })))
            .mount(&self.server)
            .await;
    }

    /// Serve the created issue back with `summary`
    pub async fn mock_fetch_issue(&self, summary: &str, expected: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/rest/api/2/issue/{}", tracker::ISSUE_KEY)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": tracker::ISSUE_ID,
                "key": tracker::ISSUE_KEY,
                "fields": { "summary": summary }
            })))
            .expect(expected)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_fetch_failure(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/rest/api/2/issue/{}", tracker::ISSUE_KEY)))
            .respond_with(ResponseTemplate::new(status_code).set_body_string("Issue Does Not Exist"))
            .mount(&self.server)
            .await;
    }

    /// Answer the read-back with a 200 that is not JSON
    pub async fn mock_fetch_malformed(&self) {
        Mock::given(method("GET"))
            .and(path(format!("/rest/api/2/issue/{}", tracker::ISSUE_KEY)))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&self.server)
            .await;
    }

    /// Bodies of all issue creation requests received so far
    pub async fn created_issue_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.method.as_str() == "POST" && r.url.path() == "/rest/api/2/issue")
            .filter_map(|r| r.body_json::<Value>().ok())
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
