// File: maint-ticket/src/services/mod.rs

pub mod ticket;
pub mod ticket_service;

pub use ticket::{ResolvedMetadata, TicketDraft};
pub use ticket_service::{run, PublishOutcome, TicketPublisher};
