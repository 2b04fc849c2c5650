//! Custom error types for the maintenance ticket tool
//!
//! Provides structured error handling with context for the two external
//! services and for the metadata lookups that precede ticket creation.

use std::fmt;

/// Main error type for a ticket run
#[derive(Debug)]
pub enum TicketError {
    /// Configuration-related errors
    Config(ConfigError),

    /// HTTP communication errors with the inventory or the tracker
    Http(HttpError),

    /// Tracker metadata did not contain a required entry
    Lookup(LookupError),
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to load configuration file
    LoadFailed { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },

    /// Missing required configuration
    MissingRequired { field: String },
}

/// Which external service an HTTP error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Inventory,
    Tracker,
}

/// HTTP communication error variants
#[derive(Debug)]
pub enum HttpError {
    /// Transport failure (DNS, TLS, connection refused, ...)
    ConnectionFailed {
        service: Service,
        url: String,
        reason: String,
    },

    /// Non-2xx response
    ErrorStatus {
        service: Service,
        url: String,
        status: u16,
        body: String,
    },

    /// Response body could not be decoded
    InvalidResponse {
        service: Service,
        url: String,
        reason: String,
    },
}

/// Lookup error variants
#[derive(Debug, PartialEq, Eq)]
pub enum LookupError {
    /// No entry with this exact name
    NotFound { kind: &'static str, name: String },
}

impl HttpError {
    pub fn service(&self) -> Service {
        match self {
            HttpError::ConnectionFailed { service, .. }
            | HttpError::ErrorStatus { service, .. }
            | HttpError::InvalidResponse { service, .. } => *service,
        }
    }
}

impl TicketError {
    /// True for HTTP errors raised while talking to the tracker
    pub fn is_tracker_http(&self) -> bool {
        matches!(self, TicketError::Http(e) if e.service() == Service::Tracker)
    }
}

impl fmt::Display for TicketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketError::Config(e) => write!(f, "Configuration error: {}", e),
            TicketError::Http(e) => write!(f, "HTTP error: {}", e),
            TicketError::Lookup(e) => write!(f, "Lookup error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
            ConfigError::MissingRequired { field } => {
                write!(f, "Missing required field: {}", field)
            }
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Service::Inventory => write!(f, "inventory"),
            Service::Tracker => write!(f, "tracker"),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ConnectionFailed {
                service,
                url,
                reason,
            } => {
                write!(f, "Request to {} ({}) failed: {}", service, url, reason)
            }
            HttpError::ErrorStatus {
                service,
                url,
                status,
                body,
            } => {
                write!(
                    f,
                    "{} returned status {} for {}: {}",
                    service, status, url, body
                )
            }
            HttpError::InvalidResponse {
                service,
                url,
                reason,
            } => {
                write!(f, "Invalid response from {} ({}): {}", service, url, reason)
            }
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound { kind, name } => {
                write!(f, "No {} named '{}'", kind, name)
            }
        }
    }
}

impl std::error::Error for TicketError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for HttpError {}
impl std::error::Error for LookupError {}

impl From<ConfigError> for TicketError {
    fn from(err: ConfigError) -> Self {
        TicketError::Config(err)
    }
}

impl From<HttpError> for TicketError {
    fn from(err: HttpError) -> Self {
        TicketError::Http(err)
    }
}

impl From<LookupError> for TicketError {
    fn from(err: LookupError) -> Self {
        TicketError::Lookup(err)
    }
}
