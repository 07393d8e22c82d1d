//! In-memory automation status registry.
//!
//! Tracks the latest orchestration outcome per customer plus aggregate
//! counters, for the dashboard's status and metrics endpoints. Purely
//! in-memory and rebuilt on restart — durable history is out of scope.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::pipeline::engine::{OrchestrationResult, RunStatus};

/// Latest automation state for one customer.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerStatus {
    pub customer_email: String,
    pub status: RunStatus,
    /// Workflows activated by the most recent run.
    pub workflows_active: Vec<String>,
    pub last_activity: DateTime<Utc>,
    /// The earliest pending follow-up, rendered for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_scheduled_action: Option<String>,
}

/// Aggregate counters across all runs since process start.
#[derive(Debug, Clone, Serialize)]
pub struct AutomationMetrics {
    pub total_inquiries: u64,
    /// Runs where the reply was composed (Active or Degraded).
    pub successful_runs: u64,
    pub degraded_runs: u64,
    pub failed_runs: u64,
    /// successful_runs / total_inquiries, 0.0 when nothing ran yet.
    pub success_rate: f64,
    pub customers_tracked: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

struct RegistryInner {
    by_customer: HashMap<String, CustomerStatus>,
    total: u64,
    successful: u64,
    degraded: u64,
    failed: u64,
    last_updated: Option<DateTime<Utc>>,
}

/// RwLock-guarded registry, shared between the engine and the HTTP
/// surface.
pub struct StatusRegistry {
    inner: RwLock<RegistryInner>,
}

impl StatusRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(RegistryInner {
                by_customer: HashMap::new(),
                total: 0,
                successful: 0,
                degraded: 0,
                failed: 0,
                last_updated: None,
            }),
        })
    }

    /// Fold one orchestration result into the registry. The per-customer
    /// entry always reflects the most recent run.
    pub async fn record_run(&self, customer_email: &str, result: &OrchestrationResult) {
        let next_scheduled_action = result
            .scheduled_tasks
            .iter()
            .min_by_key(|task| task.scheduled_at)
            .map(|task| {
                format!(
                    "{} at {}",
                    task.description,
                    task.scheduled_at.format("%Y-%m-%d %H:%M UTC")
                )
            });

        let mut inner = self.inner.write().await;
        inner.total += 1;
        match result.status {
            RunStatus::Active => inner.successful += 1,
            RunStatus::Degraded => {
                inner.successful += 1;
                inner.degraded += 1;
            }
            RunStatus::Failed => inner.failed += 1,
        }
        inner.last_updated = Some(result.completed_at);

        inner.by_customer.insert(
            customer_email.to_string(),
            CustomerStatus {
                customer_email: customer_email.to_string(),
                status: result.status,
                workflows_active: result.triggered_workflows.clone(),
                last_activity: result.completed_at,
                next_scheduled_action,
            },
        );

        debug!(
            customer = customer_email,
            status = %result.status,
            total = inner.total,
            "Status registry updated"
        );
    }

    /// Latest status for a customer, if any run was recorded for them.
    pub async fn status_for(&self, customer_email: &str) -> Option<CustomerStatus> {
        self.inner.read().await.by_customer.get(customer_email).cloned()
    }

    /// Aggregate metrics snapshot.
    pub async fn metrics(&self) -> AutomationMetrics {
        let inner = self.inner.read().await;
        let success_rate = if inner.total == 0 {
            0.0
        } else {
            inner.successful as f64 / inner.total as f64
        };
        AutomationMetrics {
            total_inquiries: inner.total,
            successful_runs: inner.successful,
            degraded_runs: inner.degraded,
            failed_runs: inner.failed,
            success_rate,
            customers_tracked: inner.by_customer.len(),
            last_updated: inner.last_updated,
        }
    }
}
