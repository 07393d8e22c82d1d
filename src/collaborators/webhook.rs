//! Webhook collaborators — trigger activation and analytics delivery over
//! HTTP.
//!
//! The automation hub exposes one endpoint per trigger name; activation is
//! a JSON POST carrying the inquiry context. Analytics events go to a
//! separate collector URL. Both are thin: status checking only, no
//! retries (the pipeline records failures and moves on).

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::collaborators::{AnalyticsSink, InquiryEvent, WorkflowActivator};
use crate::error::{ActivateError, AnalyticsError};
use crate::inquiry::Inquiry;

/// Automation hub location, from `AUTOMATION_HUB_URL`.
#[derive(Debug, Clone)]
pub struct HubConfig {
    pub base_url: String,
}

impl HubConfig {
    /// Returns `None` if `AUTOMATION_HUB_URL` is not set (hub disabled).
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("AUTOMATION_HUB_URL").ok()?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Workflow activator that POSTs to the automation hub.
pub struct WebhookActivator {
    config: HubConfig,
    client: reqwest::Client,
}

impl WebhookActivator {
    pub fn new(config: HubConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn trigger_url(&self, trigger_name: &str) -> String {
        format!("{}/triggers/{trigger_name}", self.config.base_url)
    }

    fn payload(inquiry: &Inquiry) -> serde_json::Value {
        json!({
            "inquiry_id": inquiry.id,
            "category": inquiry.category,
            "urgency": inquiry.urgency,
            "customer_email": inquiry.customer_email,
            "subject": inquiry.subject,
        })
    }
}

#[async_trait]
impl WorkflowActivator for WebhookActivator {
    async fn activate(&self, inquiry: &Inquiry, trigger_name: &str) -> Result<(), ActivateError> {
        let response = self
            .client
            .post(self.trigger_url(trigger_name))
            .json(&Self::payload(inquiry))
            .send()
            .await
            .map_err(|e| ActivateError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ActivateError::Rejected {
                trigger: trigger_name.to_string(),
                reason: format!("{status}: {body}"),
            });
        }

        debug!(trigger = trigger_name, "Automation hub accepted trigger");
        Ok(())
    }
}

/// Analytics sink that POSTs events to a collector URL.
pub struct WebhookAnalyticsSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookAnalyticsSink {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Returns `None` if `ANALYTICS_URL` is not set (sink disabled).
    pub fn from_env() -> Option<Self> {
        std::env::var("ANALYTICS_URL").ok().map(Self::new)
    }
}

#[async_trait]
impl AnalyticsSink for WebhookAnalyticsSink {
    async fn record(&self, event: InquiryEvent) -> Result<(), AnalyticsError> {
        let response = self
            .client
            .post(&self.url)
            .json(&event)
            .send()
            .await
            .map_err(|e| AnalyticsError::Delivery(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AnalyticsError::Delivery(format!(
                "collector returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::inquiry::{Category, Urgency};

    fn make_inquiry() -> Inquiry {
        Inquiry {
            id: Uuid::new_v4(),
            customer_name: "Ana Ruiz".into(),
            customer_email: "ana@example.com".into(),
            subject: "Hello".into(),
            message: "Hi".into(),
            category: Category::Photography,
            urgency: Urgency::Urgent,
            budget: None,
            timeline: None,
            company: None,
            phone: None,
            received_at: Utc::now(),
        }
    }

    #[test]
    fn trigger_url_joins_base_and_name() {
        let activator = WebhookActivator::new(HubConfig {
            base_url: "https://hub.example.com/api".into(),
        });
        assert_eq!(
            activator.trigger_url("portfolio_automation"),
            "https://hub.example.com/api/triggers/portfolio_automation"
        );
    }

    #[test]
    fn payload_carries_wire_labels() {
        let payload = WebhookActivator::payload(&make_inquiry());
        assert_eq!(payload["category"], "photography");
        assert_eq!(payload["urgency"], "urgent");
        assert_eq!(payload["customer_email"], "ana@example.com");
    }
}
