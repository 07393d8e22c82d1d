//! Downstream trigger dispatch with per-trigger fault isolation.
//!
//! Every trigger named by the strategy is attempted exactly once. A
//! failing activation is recorded against its own name and never aborts
//! the remaining triggers — this is the pipeline's defining
//! failure-handling property.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::collaborators::WorkflowActivator;
use crate::inquiry::Inquiry;
use crate::strategy::Strategy;

/// Outcome of one dispatch pass. Both lists preserve catalog-declared
/// trigger order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Names whose activation succeeded.
    pub triggered: Vec<String>,
    /// Names whose activation errored.
    pub failed: Vec<String>,
}

/// Dispatches a strategy's triggers against the workflow collaborator.
pub struct TriggerDispatcher {
    activator: Arc<dyn WorkflowActivator>,
}

impl TriggerDispatcher {
    pub fn new(activator: Arc<dyn WorkflowActivator>) -> Self {
        Self { activator }
    }

    /// Activate every trigger named by the strategy, in catalog-declared
    /// order.
    ///
    /// Activations are issued concurrently; `join_all` yields results in
    /// input order, so attribution stays deterministic. Failures are
    /// isolated per name.
    pub async fn dispatch(&self, inquiry: &Inquiry, strategy: &Strategy) -> DispatchOutcome {
        let results = join_all(strategy.trigger_names.iter().map(|name| {
            let activator = Arc::clone(&self.activator);
            async move { (*name, activator.activate(inquiry, name).await) }
        }))
        .await;

        let mut outcome = DispatchOutcome::default();
        for (name, result) in results {
            match result {
                Ok(()) => {
                    debug!(inquiry_id = %inquiry.id, trigger = name, "Trigger activated");
                    outcome.triggered.push(name.to_string());
                }
                Err(e) => {
                    warn!(
                        inquiry_id = %inquiry.id,
                        trigger = name,
                        error = %e,
                        "Trigger activation failed; continuing with remaining triggers"
                    );
                    outcome.failed.push(name.to_string());
                }
            }
        }
        outcome
    }
}
