//! Follow-up schedule computation.
//!
//! The orchestrator only *computes* the schedule — three future-dated task
//! descriptors per run. Firing them at `scheduled_at` is the external
//! scheduler's responsibility; nothing here executes, persists, or retries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::inquiry::{Priority, Urgency};

/// What kind of follow-up a task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Email,
    Proposal,
    Consultation,
}

/// A scheduled-but-not-yet-executed future action. Ownership passes to the
/// external follow-up executor with the orchestration result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUpTask {
    pub description: String,
    /// Absolute firing time: `now + tier delay`.
    pub scheduled_at: DateTime<Utc>,
    pub priority: Priority,
    pub kind: TaskKind,
}

/// Delay before the first follow-up email, by urgency tier.
pub fn urgency_delay(urgency: Urgency) -> Duration {
    match urgency {
        Urgency::Urgent => Duration::hours(2),
        Urgency::High => Duration::hours(6),
        Urgency::Medium => Duration::hours(24),
        Urgency::Low => Duration::hours(72),
    }
}

/// Compute the three-tier follow-up schedule for one inquiry.
///
/// Only tier 1 varies with urgency; the proposal (24h) and consultation
/// (72h) tiers are fixed. Pure: the same `(urgency, now)` always yields
/// the same schedule.
pub fn schedule(urgency: Urgency, now: DateTime<Utc>) -> Vec<FollowUpTask> {
    vec![
        FollowUpTask {
            description: "Immediate follow-up email".into(),
            scheduled_at: now + urgency_delay(urgency),
            priority: Priority::High,
            kind: TaskKind::Email,
        },
        FollowUpTask {
            description: "Detailed proposal preparation".into(),
            scheduled_at: now + Duration::hours(24),
            priority: Priority::Medium,
            kind: TaskKind::Proposal,
        },
        FollowUpTask {
            description: "Project consultation scheduling".into(),
            scheduled_at: now + Duration::hours(72),
            priority: Priority::Low,
            kind: TaskKind::Consultation,
        },
    ]
}
