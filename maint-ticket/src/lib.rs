pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
pub mod inventory;
pub mod maintenance_day;
pub mod services;
pub mod tracker;

// Re-export commonly used types
pub use cli::Cli;
pub use config::{Config, ConfigManager, Credentials};
pub use errors::{ConfigError, HttpError, LookupError, TicketError};
pub use inventory::{HostGroupPattern, HostInventory, HostRecord, HostSummary};
pub use maintenance_day::{next_maintenance_day, next_occurrence, MaintenanceDays};
pub use services::{run, PublishOutcome, TicketDraft, TicketPublisher};
pub use tracker::JiraClient;
