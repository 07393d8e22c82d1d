//! External collaborator seams — pure I/O, no decision logic.
//!
//! The engine is constructed against these traits, never against concrete
//! services, so tests substitute doubles and production wires SMTP and
//! webhook implementations. Failures cross these seams as values; how much
//! each failure matters (fatal, degrading, ignorable) is decided by the
//! engine, not here.

pub mod smtp;
pub mod webhook;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::error::{ActivateError, AnalyticsError, SendError};
use crate::inquiry::{Category, Inquiry, Urgency};

// ── Email sending ───────────────────────────────────────────────────

/// Receipt for a dispatched email.
#[derive(Debug, Clone)]
pub struct SentReceipt {
    /// Transport-assigned (or synthesized) message ID.
    pub message_id: String,
}

/// Outbound acknowledgement delivery.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message. The implementation owns the from-address.
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<SentReceipt, SendError>;
}

// ── Workflow activation ─────────────────────────────────────────────

/// Downstream automation activation, one call per trigger name.
#[async_trait]
pub trait WorkflowActivator: Send + Sync {
    async fn activate(&self, inquiry: &Inquiry, trigger_name: &str) -> Result<(), ActivateError>;
}

// ── Analytics ───────────────────────────────────────────────────────

/// One tracked inquiry, as delivered to the analytics sink.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryEvent {
    pub category: Category,
    pub urgency: Urgency,
    pub timestamp: DateTime<Utc>,
    pub customer_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
}

impl InquiryEvent {
    pub fn from_inquiry(inquiry: &Inquiry, timestamp: DateTime<Utc>) -> Self {
        Self {
            category: inquiry.category,
            urgency: inquiry.urgency,
            timestamp,
            customer_email: inquiry.customer_email.clone(),
            budget: inquiry.budget.clone(),
            timeline: inquiry.timeline.clone(),
        }
    }
}

/// Fire-and-forget inquiry tracking. A failing sink is logged and ignored.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn record(&self, event: InquiryEvent) -> Result<(), AnalyticsError>;
}

// ── Console fallbacks ───────────────────────────────────────────────

/// Log-only email sender, used when no SMTP relay is configured.
/// Reports the reply it would have sent and synthesizes a message ID.
pub struct ConsoleSender;

#[async_trait]
impl EmailSender for ConsoleSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<SentReceipt, SendError> {
        info!(to, subject, body_len = body.len(), "Console sender: acknowledgement not relayed");
        Ok(SentReceipt {
            message_id: format!("console-{}", Uuid::new_v4()),
        })
    }
}

/// Log-only workflow activator, used when no automation hub is configured.
/// Every activation succeeds.
pub struct LogActivator;

#[async_trait]
impl WorkflowActivator for LogActivator {
    async fn activate(&self, inquiry: &Inquiry, trigger_name: &str) -> Result<(), ActivateError> {
        info!(
            inquiry_id = %inquiry.id,
            trigger = trigger_name,
            "Log activator: trigger not relayed"
        );
        Ok(())
    }
}
