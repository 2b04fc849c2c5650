// File: maint-ticket/src/services/ticket.rs
use crate::config::TicketConfig;
use crate::constants::ticket::DESCRIPTION_PREAMBLE;
use crate::inventory::HostSummary;
use crate::tracker::Component;
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Tracker ids resolved from configured names before a draft can be built
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedMetadata {
    pub project_id: String,
    pub issue_type_id: String,
    pub component: Component,
    pub start_date_key: String,
    pub end_date_key: String,
    pub priority_id: Option<String>,
}

/// The ticket as it will be submitted
#[derive(Debug, Clone, Serialize)]
pub struct TicketDraft {
    pub maintenance_day: NaiveDate,
    pub summary: String,
    pub description: String,
    pub assignee: String,
    pub labels: Vec<String>,
    pub metadata: ResolvedMetadata,
}

/// `"{prefix} - {Month}, {Year}"`, e.g. `jch test - April, 2024`
pub fn summary_for(prefix: &str, day: NaiveDate) -> String {
    format!("{} - {}", prefix, day.format("%B, %Y"))
}

/// Preamble followed by the host summary inside a `{code}` block
pub fn description_for(hosts: &HostSummary) -> Result<String, serde_yaml::Error> {
    let yaml = hosts.to_yaml()?;
    Ok(format!(
        "{}\n\n{{code}}\n{}\n{{code}}",
        DESCRIPTION_PREAMBLE, yaml
    ))
}

impl TicketDraft {
    pub fn assemble(
        day: NaiveDate,
        hosts: &HostSummary,
        ticket: &TicketConfig,
        metadata: ResolvedMetadata,
    ) -> Result<Self, serde_yaml::Error> {
        Ok(Self {
            maintenance_day: day,
            summary: summary_for(&ticket.summary_prefix, day),
            description: description_for(hosts)?,
            assignee: ticket.assignee.clone(),
            labels: ticket.labels.clone(),
            metadata,
        })
    }

    /// Maintenance day as `YYYY-MM-DD`, used for both start and end
    pub fn date_value(&self) -> String {
        self.maintenance_day.format("%Y-%m-%d").to_string()
    }

    /// The `fields` object of the create request
    pub fn fields(&self) -> Value {
        let date = self.date_value();
        let mut fields = Map::new();

        fields.insert("summary".to_string(), json!(self.summary));
        fields.insert("project".to_string(), json!({ "id": self.metadata.project_id }));
        fields.insert(
            "issuetype".to_string(),
            json!({ "id": self.metadata.issue_type_id }),
        );
        fields.insert("assignee".to_string(), json!({ "name": self.assignee }));
        if let Some(priority_id) = &self.metadata.priority_id {
            fields.insert("priority".to_string(), json!({ "id": priority_id }));
        }
        fields.insert(self.metadata.start_date_key.clone(), json!(date));
        fields.insert(self.metadata.end_date_key.clone(), json!(date));
        fields.insert(
            "components".to_string(),
            json!([{ "id": self.metadata.component.id, "name": self.metadata.component.name }]),
        );
        fields.insert("labels".to_string(), json!(self.labels));
        fields.insert("description".to_string(), json!(self.description));

        Value::Object(fields)
    }

    /// Full create request body, as shown in no-op mode
    pub fn request_body(&self) -> Value {
        json!({ "fields": self.fields() })
    }
}
