// File: maint-ticket/src/services/ticket_service.rs
use crate::config::{Config, TicketConfig, TrackerConfig};
use crate::errors::{HttpError, TicketError};
use crate::inventory::{HostInventory, HostSummary};
use crate::maintenance_day::next_maintenance_day;
use crate::services::ticket::{ResolvedMetadata, TicketDraft};
use crate::tracker::lookup::{find_component, find_field_key, find_issue_type, find_priority};
use crate::tracker::JiraClient;
use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use tracing::{info, warn};

/// What happened to the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// No-op mode: nothing was written to the tracker
    DryRun,
    /// Created and read back
    Confirmed { key: String, summary: String },
    /// Created, but reading it back failed. The ticket may exist.
    Unconfirmed { key: String, error: String },
}

pub struct TicketPublisher {
    client: JiraClient,
    ticket: TicketConfig,
}

impl TicketPublisher {
    pub fn new(tracker: &TrackerConfig, ticket: &TicketConfig) -> Result<Self, TicketError> {
        Ok(Self {
            client: JiraClient::new(tracker)?,
            ticket: ticket.clone(),
        })
    }

    /// Resolve every configured name to a tracker id. Any miss aborts before
    /// anything is written.
    pub async fn resolve(&self) -> Result<ResolvedMetadata, TicketError> {
        let project = self.client.find_project(&self.ticket.project_key).await?;

        let issue_type =
            find_issue_type(self.client.list_issue_types(&project), &self.ticket.issue_type)?;
        let component =
            find_component(self.client.list_components(&project), &self.ticket.component)?;

        let fields = self.client.field_map().await?;
        let start_date_key = find_field_key(&fields, &self.ticket.start_date_field)?;
        let end_date_key = find_field_key(&fields, &self.ticket.end_date_field)?;

        let priority_id = match &self.ticket.priority {
            Some(name) => {
                let priorities = self.client.list_priorities().await?;
                Some(find_priority(&priorities, name)?.id.clone())
            }
            None => None,
        };

        info!(
            "Resolved issue type {} ({}), component {} ({}), date fields {} / {}",
            issue_type.name, issue_type.id, component.name, component.id, start_date_key, end_date_key
        );

        Ok(ResolvedMetadata {
            project_id: project.id.clone(),
            issue_type_id: issue_type.id.clone(),
            component: component.clone(),
            start_date_key: start_date_key.to_string(),
            end_date_key: end_date_key.to_string(),
            priority_id,
        })
    }

    /// Submit `draft` unless `noop`, then read it back by key.
    ///
    /// A failed write is an error. A read-back answered with an error status
    /// is not: it is reported as [`PublishOutcome::Unconfirmed`] since the
    /// ticket was already created. Transport and decode failures on the
    /// read-back still fail the run.
    pub async fn publish(&self, draft: &TicketDraft, noop: bool) -> Result<PublishOutcome, TicketError> {
        if noop {
            info!("No-op mode, not submitting '{}'", draft.summary);
            return Ok(PublishOutcome::DryRun);
        }

        let created = self.client.create_issue(&draft.fields()).await?;

        match self.client.fetch_issue(&created.key).await {
            Ok(issue) => Ok(PublishOutcome::Confirmed {
                key: issue.key.clone(),
                summary: issue.summary().to_string(),
            }),
            Err(e @ HttpError::ErrorStatus { .. }) => {
                warn!(
                    "Ticket {} was created but could not be read back, it is unconfirmed: {}",
                    created.key, e
                );
                Ok(PublishOutcome::Unconfirmed {
                    key: created.key,
                    error: e.to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// One full run: pick the maintenance day, collect hosts, file the ticket,
/// and write the report to `out`.
pub async fn run<W: Write>(config: &Config, today: NaiveDate, out: &mut W) -> Result<PublishOutcome> {
    let day = next_maintenance_day(today)
        .ok_or_else(|| anyhow!("No maintenance day representable after {}", today))?;
    info!("Next maintenance day is {}", day);

    let patterns = config.compiled_patterns()?;

    let inventory = HostInventory::fetch(&config.inventory)
        .await
        .context("Failed to fetch hosts from inventory")?;

    let hosts = HostSummary::build(inventory.records(), &patterns);
    for (pattern, names) in hosts.iter() {
        info!("{}: {} hosts", pattern, names.len());
    }
    if hosts.is_empty() {
        warn!("No hosts matched any hostgroup pattern");
    }

    let publisher = TicketPublisher::new(&config.tracker, &config.ticket)?;
    let metadata = publisher
        .resolve()
        .await
        .context("Failed to resolve tracker metadata")?;

    let draft = TicketDraft::assemble(day, &hosts, &config.ticket, metadata)
        .context("Failed to serialize host summary")?;

    let outcome = publisher
        .publish(&draft, config.noop)
        .await
        .context("Failed to create ticket")?;

    report(out, &draft, &outcome)?;

    if let PublishOutcome::Unconfirmed { key, .. } = &outcome {
        if config.fail_on_unconfirmed {
            bail!("Ticket {} was created but could not be confirmed", key);
        }
    }

    Ok(outcome)
}

fn report<W: Write>(out: &mut W, draft: &TicketDraft, outcome: &PublishOutcome) -> Result<()> {
    match outcome {
        PublishOutcome::DryRun => {
            writeln!(out, "{}", serde_json::to_string_pretty(&draft.request_body())?)?;
        }
        PublishOutcome::Confirmed { key, summary } => {
            writeln!(out, "{} - {}", key, summary)?;
        }
        PublishOutcome::Unconfirmed { error, .. } => {
            writeln!(out, "{}", error)?;
        }
    }
    Ok(())
}
