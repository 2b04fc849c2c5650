//! Mock Foreman server for testing host inventory fetches
//!
//! Serves `/api/v2/hosts` behind basic auth so tests can check that the
//! configured credentials are sent.

use super::test_data::credentials;
use serde_json::{json, Value};
use wiremock::{
    matchers::{basic_auth, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub struct MockForemanServer {
    pub server: MockServer,
    pub base_url: String,
}

impl MockForemanServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Serve `hosts` to requests carrying the expected credentials
    pub async fn mock_hosts(&self, hosts: Value) {
        let count = hosts.as_array().map(|a| a.len()).unwrap_or(0);
        Mock::given(method("GET"))
            .and(path("/api/v2/hosts"))
            .and(basic_auth(credentials::FOREMAN_USER, credentials::FOREMAN_PASS))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total": count,
                "subtotal": count,
                "page": 1,
                "per_page": 20,
                "search": null,
                "results": hosts
            })))
            .mount(&self.server)
            .await;
    }

    /// Serve a page that claims more hosts exist than were returned
    pub async fn mock_truncated_page(&self, hosts: Value, subtotal: u64) {
        Mock::given(method("GET"))
            .and(path("/api/v2/hosts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "subtotal": subtotal,
                "results": hosts
            })))
            .mount(&self.server)
            .await;
    }

    /// Reject every request with `status_code`
    pub async fn mock_failure(&self, status_code: u16) {
        Mock::given(method("GET"))
            .and(path("/api/v2/hosts"))
            .respond_with(ResponseTemplate::new(status_code).set_body_string("denied"))
            .mount(&self.server)
            .await;
    }

    /// 200 with a body that is not a host listing
    pub async fn mock_malformed(&self) {
        Mock::given(method("GET"))
            .and(path("/api/v2/hosts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&self.server)
            .await;
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}
