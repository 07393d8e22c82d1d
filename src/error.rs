//! Error types for the inquiry orchestrator.
//!
//! The taxonomy mirrors how failures propagate through the pipeline:
//! compose failures are fatal to a run, send and trigger failures degrade
//! it, analytics failures are logged and dropped. The engine itself never
//! returns an error — callers read the result's status field.

/// Top-level error type for the orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Compose error: {0}")]
    Compose(#[from] ComposeError),

    #[error("Send error: {0}")]
    Send(#[from] SendError),

    #[error("Trigger activation error: {0}")]
    Activate(#[from] ActivateError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] AnalyticsError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Reply composition errors. The only fatal failure class in the pipeline:
/// if the acknowledgement cannot be built, the run is marked Failed.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Inquiry has no customer name")]
    MissingCustomerName,

    #[error("Invalid customer email address: {address}")]
    InvalidEmail { address: String },
}

/// Outbound email delivery errors. Degrading, never fatal — a failed send
/// does not cancel downstream automation.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Transport failed: {0}")]
    Transport(String),
}

/// Workflow trigger activation errors. Isolated per trigger name: one
/// failing activation never aborts the remaining dispatches.
#[derive(Debug, thiserror::Error)]
pub enum ActivateError {
    #[error("Automation hub rejected trigger {trigger}: {reason}")]
    Rejected { trigger: String, reason: String },

    #[error("Automation hub unreachable: {0}")]
    Unreachable(String),
}

/// Analytics recording errors. Ignorable — logged, never surfaced in the
/// orchestration result.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("Failed to deliver event: {0}")]
    Delivery(String),
}

/// Result type alias for the orchestrator.
pub type Result<T> = std::result::Result<T, Error>;
