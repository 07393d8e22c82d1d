//! Orchestration engine — one pipeline run per inquiry.
//!
//! classify → compose → send → dispatch triggers → schedule follow-ups →
//! record analytics → aggregate. `run` never returns an error: compose
//! failures terminate the run as `Failed`, every other failure is recorded
//! where it happened and the pipeline continues. No retries anywhere.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::collaborators::{AnalyticsSink, EmailSender, InquiryEvent, WorkflowActivator};
use crate::inquiry::Inquiry;
use crate::pipeline::composer::ReplyComposer;
use crate::pipeline::dispatcher::TriggerDispatcher;
use crate::pipeline::scheduler::{self, FollowUpTask};
use crate::pipeline::stage::Stage;
use crate::status::StatusRegistry;
use crate::strategy::classifier;

// ── Result ──────────────────────────────────────────────────────────

/// Terminal status of one orchestration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Every sub-step succeeded.
    Active,
    /// Completed, but the send or at least one trigger failed.
    Degraded,
    /// The acknowledgement could not be composed.
    Failed,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}

/// Aggregated outcome of one inquiry's pipeline run.
///
/// Invariant: `success` is false only when the reply could not be
/// composed; trigger and send failures degrade `status` without clearing
/// `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationResult {
    pub inquiry_id: Uuid,
    pub success: bool,
    pub reply_text: String,
    /// Trigger names that activated, in catalog-declared order.
    pub triggered_workflows: Vec<String>,
    /// Trigger names that errored, in catalog-declared order.
    pub failed_workflows: Vec<String>,
    pub scheduled_tasks: Vec<FollowUpTask>,
    pub status: RunStatus,
    pub completed_at: DateTime<Utc>,
}

impl OrchestrationResult {
    fn failed(inquiry_id: Uuid) -> Self {
        Self {
            inquiry_id,
            success: false,
            reply_text: String::new(),
            triggered_workflows: Vec::new(),
            failed_workflows: Vec::new(),
            scheduled_tasks: Vec::new(),
            status: RunStatus::Failed,
            completed_at: Utc::now(),
        }
    }
}

// ── Engine ──────────────────────────────────────────────────────────

/// The inquiry pipeline. Stateless between runs — the only shared data is
/// the read-only strategy catalog, so any number of runs may execute
/// concurrently against one engine.
pub struct OrchestrationEngine {
    composer: ReplyComposer,
    dispatcher: TriggerDispatcher,
    sender: Arc<dyn EmailSender>,
    analytics: Option<Arc<dyn AnalyticsSink>>,
    registry: Option<Arc<StatusRegistry>>,
}

impl OrchestrationEngine {
    /// Create an engine from its collaborators.
    pub fn new(
        composer: ReplyComposer,
        sender: Arc<dyn EmailSender>,
        activator: Arc<dyn WorkflowActivator>,
    ) -> Self {
        Self {
            composer,
            dispatcher: TriggerDispatcher::new(activator),
            sender,
            analytics: None,
            registry: None,
        }
    }

    /// Attach an analytics sink (fire-and-forget; failures only log).
    pub fn with_analytics(mut self, sink: Arc<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    /// Attach a status registry, updated after every run.
    pub fn with_status_registry(mut self, registry: Arc<StatusRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Run the full pipeline for one inquiry.
    ///
    /// Always returns a result value; callers distinguish success from
    /// degradation from total failure via `status`, never via control
    /// flow.
    pub async fn run(&self, inquiry: &Inquiry) -> OrchestrationResult {
        info!(
            inquiry_id = %inquiry.id,
            customer = %inquiry.customer_name,
            category = %inquiry.category,
            urgency = %inquiry.urgency,
            "Processing inquiry"
        );

        let mut stage = Stage::Received;

        // 1. Classify.
        let strategy = classifier::classify(inquiry);
        stage = advance(inquiry.id, stage, Stage::Classified);

        // 2. Compose. The only fatal step.
        let reply = match self.composer.compose(inquiry, &strategy) {
            Ok(reply) => reply,
            Err(e) => {
                error!(inquiry_id = %inquiry.id, error = %e, "Reply composition failed");
                advance(inquiry.id, stage, Stage::Failed);
                let result = OrchestrationResult::failed(inquiry.id);
                self.record_status(inquiry, &result).await;
                return result;
            }
        };
        stage = advance(inquiry.id, stage, Stage::Composed);

        // 3. Send the acknowledgement. A failed send degrades the run but
        //    never cancels downstream automation.
        let sent = match self
            .sender
            .send(&inquiry.customer_email, &reply.subject, &reply.body)
            .await
        {
            Ok(receipt) => {
                info!(
                    inquiry_id = %inquiry.id,
                    message_id = %receipt.message_id,
                    "Acknowledgement sent"
                );
                true
            }
            Err(e) => {
                warn!(
                    inquiry_id = %inquiry.id,
                    error = %e,
                    "Acknowledgement send failed; continuing pipeline"
                );
                false
            }
        };
        stage = advance(
            inquiry.id,
            stage,
            if sent { Stage::Dispatched } else { Stage::DispatchFailed },
        );

        // 4. Dispatch triggers, isolated per name.
        let outcome = self.dispatcher.dispatch(inquiry, &strategy).await;
        stage = advance(inquiry.id, stage, Stage::TriggersResolved);

        // 5. Compute the follow-up schedule.
        let scheduled_tasks = scheduler::schedule(inquiry.urgency, Utc::now());
        stage = advance(inquiry.id, stage, Stage::Scheduled);

        // 6. Record analytics. Ignorable by contract.
        if let Some(sink) = &self.analytics {
            let event = InquiryEvent::from_inquiry(inquiry, Utc::now());
            if let Err(e) = sink.record(event).await {
                warn!(inquiry_id = %inquiry.id, error = %e, "Analytics recording failed");
            }
        }

        // 7. Aggregate.
        let degraded = !sent || !outcome.failed.is_empty();
        let status = if degraded { RunStatus::Degraded } else { RunStatus::Active };
        advance(
            inquiry.id,
            stage,
            if degraded { Stage::Degraded } else { Stage::Active },
        );

        let result = OrchestrationResult {
            inquiry_id: inquiry.id,
            success: true,
            reply_text: reply.body,
            triggered_workflows: outcome.triggered,
            failed_workflows: outcome.failed,
            scheduled_tasks,
            status,
            completed_at: Utc::now(),
        };

        info!(
            inquiry_id = %inquiry.id,
            status = %result.status,
            triggered = result.triggered_workflows.len(),
            failed = result.failed_workflows.len(),
            "Inquiry processed"
        );

        self.record_status(inquiry, &result).await;
        result
    }

    async fn record_status(&self, inquiry: &Inquiry, result: &OrchestrationResult) {
        if let Some(registry) = &self.registry {
            registry.record_run(&inquiry.customer_email, result).await;
        }
    }
}

/// Log a stage transition and return the new stage. Transitions are
/// validated in debug builds; the pipeline itself only issues legal ones.
fn advance(inquiry_id: Uuid, from: Stage, to: Stage) -> Stage {
    debug_assert!(from.can_transition_to(to), "{from} -> {to}");
    debug!(inquiry_id = %inquiry_id, from = %from, to = %to, "Stage transition");
    to
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Duration;

    use super::*;
    use crate::collaborators::SentReceipt;
    use crate::config::BrandProfile;
    use crate::error::{ActivateError, AnalyticsError, SendError};
    use crate::inquiry::{Category, Urgency};
    use crate::status::StatusRegistry;

    // ── Test doubles ────────────────────────────────────────────────

    struct MockSender {
        fail: bool,
        sent: Mutex<Vec<(String, String, String)>>,
    }

    impl MockSender {
        fn ok() -> Arc<Self> {
            Arc::new(Self { fail: false, sent: Mutex::new(Vec::new()) })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { fail: true, sent: Mutex::new(Vec::new()) })
        }
    }

    #[async_trait]
    impl EmailSender for MockSender {
        async fn send(
            &self,
            to: &str,
            subject: &str,
            body: &str,
        ) -> Result<SentReceipt, SendError> {
            if self.fail {
                return Err(SendError::Transport("induced transport failure".into()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(SentReceipt { message_id: "mock-1".into() })
        }
    }

    struct MockActivator {
        fail_names: HashSet<&'static str>,
        calls: AtomicUsize,
    }

    impl MockActivator {
        fn ok() -> Arc<Self> {
            Arc::new(Self { fail_names: HashSet::new(), calls: AtomicUsize::new(0) })
        }

        fn failing(names: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                fail_names: names.iter().copied().collect(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl WorkflowActivator for MockActivator {
        async fn activate(
            &self,
            _inquiry: &Inquiry,
            trigger_name: &str,
        ) -> Result<(), ActivateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_names.contains(trigger_name) {
                Err(ActivateError::Rejected {
                    trigger: trigger_name.to_string(),
                    reason: "induced".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    struct FailingSink;

    #[async_trait]
    impl AnalyticsSink for FailingSink {
        async fn record(&self, _event: InquiryEvent) -> Result<(), AnalyticsError> {
            Err(AnalyticsError::Delivery("induced".into()))
        }
    }

    fn make_inquiry(name: &str, category: Category, urgency: Urgency) -> Inquiry {
        Inquiry {
            id: Uuid::new_v4(),
            customer_name: name.into(),
            customer_email: "customer@example.com".into(),
            subject: "Project inquiry".into(),
            message: "Tell me more.".into(),
            category,
            urgency,
            budget: None,
            timeline: None,
            company: None,
            phone: None,
            received_at: Utc::now(),
        }
    }

    fn engine(sender: Arc<MockSender>, activator: Arc<MockActivator>) -> OrchestrationEngine {
        OrchestrationEngine::new(
            ReplyComposer::new(BrandProfile::default()),
            sender,
            activator,
        )
    }

    // ── End-to-end scenarios ────────────────────────────────────────

    #[tokio::test]
    async fn urgent_photography_inquiry_end_to_end() {
        let sender = MockSender::ok();
        let activator = MockActivator::ok();
        let inquiry = make_inquiry("Ana Ruiz", Category::Photography, Urgency::Urgent);

        let before = Utc::now();
        let result = engine(sender.clone(), activator).run(&inquiry).await;
        let after = Utc::now();

        assert!(result.success);
        assert_eq!(result.status, RunStatus::Active);
        assert!(result.reply_text.contains("Ana"));
        assert!(result.reply_text.contains("2 hours"));
        assert_eq!(
            result.triggered_workflows,
            vec![
                "portfolio_automation",
                "booking_automation",
                "instagram_automation"
            ]
        );
        assert!(result.failed_workflows.is_empty());

        // Tier 1 fires at now + 2h for urgent inquiries.
        let tier1 = &result.scheduled_tasks[0];
        assert!(tier1.scheduled_at >= before + Duration::hours(2));
        assert!(tier1.scheduled_at <= after + Duration::hours(2));

        // The acknowledgement actually reached the sender.
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "customer@example.com");
        assert!(sent[0].1.starts_with("Re: Project inquiry"));
    }

    #[tokio::test]
    async fn unknown_category_falls_back_to_consulting() {
        let sender = MockSender::ok();
        let activator = MockActivator::ok();
        let inquiry = make_inquiry("Bob Chen", Category::Other, Urgency::Low);

        let result = engine(sender, activator).run(&inquiry).await;

        assert!(result.success);
        assert_eq!(result.status, RunStatus::Active);
        assert_eq!(
            result.triggered_workflows,
            vec!["consulting_automation", "strategy_automation"]
        );
        assert!(result.reply_text.contains("Consulting Team"));
    }

    #[tokio::test]
    async fn single_trigger_failure_degrades_without_aborting() {
        let sender = MockSender::ok();
        let activator = MockActivator::failing(&["ai_automation"]);
        let inquiry = make_inquiry("Cara Díaz", Category::AiSystem, Urgency::High);

        let result = engine(sender, activator.clone()).run(&inquiry).await;

        assert!(result.success);
        assert_eq!(result.status, RunStatus::Degraded);
        assert_eq!(result.failed_workflows, vec!["ai_automation"]);
        assert_eq!(
            result.triggered_workflows,
            vec!["data_automation", "ml_automation"]
        );
        // Every trigger was still attempted.
        assert_eq!(activator.calls.load(Ordering::SeqCst), 3);
    }

    // ── Failure propagation ─────────────────────────────────────────

    #[tokio::test]
    async fn compose_failure_short_circuits_the_pipeline() {
        let sender = MockSender::ok();
        let activator = MockActivator::ok();
        let inquiry = make_inquiry("", Category::Photography, Urgency::Medium);

        let result = engine(sender.clone(), activator.clone()).run(&inquiry).await;

        assert!(!result.success);
        assert_eq!(result.status, RunStatus::Failed);
        assert!(result.reply_text.is_empty());
        assert!(result.triggered_workflows.is_empty());
        assert!(result.failed_workflows.is_empty());
        assert!(result.scheduled_tasks.is_empty());

        // Nothing downstream ran.
        assert!(sender.sent.lock().unwrap().is_empty());
        assert_eq!(activator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn send_failure_degrades_but_automation_continues() {
        let sender = MockSender::failing();
        let activator = MockActivator::ok();
        let inquiry = make_inquiry("Ana Ruiz", Category::Event, Urgency::Medium);

        let result = engine(sender, activator.clone()).run(&inquiry).await;

        assert!(result.success);
        assert_eq!(result.status, RunStatus::Degraded);
        // Triggers were still dispatched after the failed send.
        assert_eq!(activator.calls.load(Ordering::SeqCst), 3);
        assert_eq!(result.triggered_workflows.len(), 3);
        assert_eq!(result.scheduled_tasks.len(), 3);
    }

    #[tokio::test]
    async fn analytics_failure_never_touches_the_result() {
        let sender = MockSender::ok();
        let activator = MockActivator::ok();
        let inquiry = make_inquiry("Ana Ruiz", Category::Consulting, Urgency::Medium);

        let result = engine(sender, activator)
            .with_analytics(Arc::new(FailingSink))
            .run(&inquiry)
            .await;

        assert!(result.success);
        assert_eq!(result.status, RunStatus::Active);
    }

    // ── Status registry integration ─────────────────────────────────

    #[tokio::test]
    async fn registry_sees_every_run() {
        let registry = StatusRegistry::new();
        let sender = MockSender::ok();
        let activator = MockActivator::ok();
        let engine = engine(sender, activator).with_status_registry(registry.clone());

        let inquiry = make_inquiry("Ana Ruiz", Category::Photography, Urgency::Urgent);
        engine.run(&inquiry).await;

        let status = registry.status_for("customer@example.com").await.unwrap();
        assert_eq!(status.status, RunStatus::Active);
        assert_eq!(status.workflows_active.len(), 3);

        let metrics = registry.metrics().await;
        assert_eq!(metrics.total_inquiries, 1);
        assert_eq!(metrics.successful_runs, 1);
    }
}
