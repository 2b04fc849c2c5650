// File: maint-ticket/src/inventory/client.rs
use super::summary::hostgroup_filter;
use super::{HostGroupPattern, HostRecord};
use crate::config::InventoryConfig;
use crate::constants::inventory::HOSTS_PATH;
use crate::errors::{HttpError, Service};
use crate::http::{build_client, join_url, send_json};
use serde::Deserialize;
use tracing::{info, warn};

/// Foreman list envelope
#[derive(Debug, Deserialize)]
struct HostsResponse {
    results: Vec<HostRecord>,
    #[serde(default)]
    subtotal: Option<u64>,
}

/// Host listing fetched once per run. Read-only after construction.
#[derive(Debug, Clone)]
pub struct HostInventory {
    records: Vec<HostRecord>,
}

impl HostInventory {
    pub fn from_records(records: Vec<HostRecord>) -> Self {
        Self { records }
    }

    /// Single GET against the host listing. Any transport failure, non-2xx
    /// status or undecodable body fails the whole fetch.
    pub async fn fetch(config: &InventoryConfig) -> Result<Self, HttpError> {
        let client = build_client(Service::Inventory, &config.base_url, config.accept_invalid_certs)?;
        let url = join_url(&config.base_url, HOSTS_PATH);

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is disabled for {}", config.base_url);
        }
        info!("Fetching hosts from {}", url);

        let mut request = client
            .get(&url)
            .basic_auth(&config.auth.username, Some(&config.auth.password));
        if let Some(per_page) = config.per_page {
            request = request.query(&[("per_page", per_page)]);
        }

        let response: HostsResponse = send_json(Service::Inventory, &url, request).await?;

        if let Some(subtotal) = response.subtotal {
            if subtotal > response.results.len() as u64 {
                warn!(
                    "Inventory returned {} of {} hosts, raise inventory.per_page to see all of them",
                    response.results.len(),
                    subtotal
                );
            }
        }

        info!("Inventory listed {} hosts", response.results.len());
        Ok(Self::from_records(response.results))
    }

    pub fn records(&self) -> &[HostRecord] {
        &self.records
    }

    pub fn hostgroup_filter(&self, pattern: &HostGroupPattern) -> Vec<&HostRecord> {
        hostgroup_filter(&self.records, pattern)
    }
}
