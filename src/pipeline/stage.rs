//! Per-inquiry pipeline stage machine.
//!
//! Strictly linear with one branch-and-rejoin at the send step: a failed
//! acknowledgement send routes through `DispatchFailed` and rejoins at
//! `TriggersResolved`. No transition re-enters an earlier stage.

use serde::{Deserialize, Serialize};

/// Where one inquiry currently is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Inquiry accepted at intake.
    Received,
    /// Strategy selected.
    Classified,
    /// Acknowledgement composed.
    Composed,
    /// Acknowledgement handed to the email sender.
    Dispatched,
    /// Acknowledgement send failed (non-fatal).
    DispatchFailed,
    /// Every trigger attempted and attributed.
    TriggersResolved,
    /// Follow-up schedule computed.
    Scheduled,
    /// Terminal: all sub-steps succeeded.
    Active,
    /// Terminal: completed with one or more non-fatal failures.
    Degraded,
    /// Terminal: the acknowledgement could not be composed.
    Failed,
}

impl Stage {
    /// Check whether the pipeline may move from this stage to `target`.
    pub fn can_transition_to(&self, target: Stage) -> bool {
        use Stage::*;

        matches!(
            (self, target),
            (Received, Classified)
                // Compose is the only fatal step.
                | (Classified, Composed)
                | (Classified, Failed)
                // Branch at the send step, rejoin after triggers.
                | (Composed, Dispatched)
                | (Composed, DispatchFailed)
                | (Dispatched, TriggersResolved)
                | (DispatchFailed, TriggersResolved)
                | (TriggersResolved, Scheduled)
                | (Scheduled, Active)
                | (Scheduled, Degraded)
        )
    }

    /// Check if this is a terminal stage.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Active | Self::Degraded | Self::Failed)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Received => "received",
            Self::Classified => "classified",
            Self::Composed => "composed",
            Self::Dispatched => "dispatched",
            Self::DispatchFailed => "dispatch_failed",
            Self::TriggersResolved => "triggers_resolved",
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Degraded => "degraded",
            Self::Failed => "failed",
        };
        write!(f, "{s}")
    }
}
