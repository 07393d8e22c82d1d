//! Response strategy selection.
//!
//! The catalog is the single declarative table mapping each inquiry
//! category to its handling policy; the classifier refines a catalog entry
//! by urgency. Adding a category is a data change in `catalog`, not a
//! control-flow change.

pub mod catalog;
pub mod classifier;

use std::time::Duration;

use crate::inquiry::Priority;

/// The policy selected for one inquiry: owning team, response-time
/// commitment, next steps in display order, and the downstream automation
/// triggers to activate.
///
/// Value object — produced by [`classifier::classify`], never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strategy {
    /// Handling priority after urgency refinement.
    pub priority: Priority,
    /// How quickly the owning team commits to a first response.
    pub response_time_target: Duration,
    /// Team label shown in the acknowledgement.
    pub owner_team: &'static str,
    /// Ordered next steps, rendered as a list in the reply.
    pub next_steps: &'static [&'static str],
    /// Trigger names in dispatch order (catalog-declared).
    pub trigger_names: &'static [&'static str],
}

/// Render a response-time target as reply text, e.g. "2 hours".
pub fn format_response_time(target: Duration) -> String {
    let hours = target.as_secs() / 3600;
    if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{hours} hours")
    }
}
