// File: maint-ticket/src/http/mod.rs
//! HTTP plumbing shared by the inventory and tracker clients
//!
//! # Communication Pattern
//!
//! ```text
//! run → inventory GET ──→ filter
//!     → tracker   GET (project, fields) ──→ POST issue ──→ GET issue
//! ```
//!
//! Every call is a single attempt. There is no retry and no request timeout
//! beyond the connect timeout; a failure surfaces as an [`HttpError`] tagged
//! with the service it came from.

use crate::constants::http::{CONNECT_TIMEOUT, USER_AGENT};
use crate::errors::{HttpError, Service};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Build a client for `service` at `base_url`. `accept_invalid_certs` turns
/// off TLS certificate verification entirely.
pub fn build_client(
    service: Service,
    base_url: &str,
    accept_invalid_certs: bool,
) -> Result<Client, HttpError> {
    Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(|e| client_build_error(service, base_url, e))
}

fn client_build_error(service: Service, base_url: &str, cause: impl std::fmt::Display) -> HttpError {
    HttpError::ConnectionFailed {
        service,
        url: base_url.to_string(),
        reason: format!("failed to build HTTP client: {}", cause),
    }
}

/// Send `request` and decode a 2xx JSON body into `T`
pub async fn send_json<T: DeserializeOwned>(
    service: Service,
    url: &str,
    request: RequestBuilder,
) -> Result<T, HttpError> {
    let response = request
        .send()
        .await
        .map_err(|e| HttpError::ConnectionFailed {
            service,
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    debug!("{} responded {} for {}", service, status, url);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(HttpError::ErrorStatus {
            service,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    response.json::<T>().await.map_err(|e| HttpError::InvalidResponse {
        service,
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Join a base URL and an absolute path without doubling the slash
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
