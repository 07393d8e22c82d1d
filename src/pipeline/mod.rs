//! The inquiry orchestration pipeline.
//!
//! One run per inquiry:
//! 1. `strategy::classifier` — select and refine the handling policy
//! 2. `composer` — render the acknowledgement (the only fatal step)
//! 3. engine sends the acknowledgement via the email collaborator
//! 4. `dispatcher` — activate downstream triggers, failures isolated
//! 5. `scheduler` — compute the follow-up schedule
//!
//! The engine aggregates everything into one `OrchestrationResult` and
//! never raises; `stage` tracks the strictly linear per-inquiry lifecycle.

pub mod composer;
pub mod dispatcher;
pub mod engine;
pub mod scheduler;
pub mod stage;
