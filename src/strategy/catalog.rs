//! Strategy catalog — the per-category handling policy table.
//!
//! One entry per named category. `Category::Other` (and any category the
//! table does not cover) resolves to the consulting entry, so lookup is
//! total and never fails. The table is built at compile time and read-only
//! thereafter; concurrent unsynchronized reads are safe.

use std::time::Duration;

use crate::inquiry::{Category, Priority};

const HOUR: Duration = Duration::from_secs(3600);

/// One row of the catalog: the base policy for a category, before urgency
/// refinement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub category: Category,
    /// Priority before urgency refinement.
    pub base_priority: Priority,
    /// Default first-response commitment.
    pub response_time_target: Duration,
    /// Reduced commitment applied when the inquiry is urgent. Categories
    /// without an urgent variant keep the default target at any urgency.
    pub urgent_response_time: Option<Duration>,
    pub owner_team: &'static str,
    /// Ordered, display-significant.
    pub next_steps: &'static [&'static str],
    /// Dispatch order is declaration order.
    pub trigger_names: &'static [&'static str],
}

static CATALOG: [CatalogEntry; 6] = [
    CatalogEntry {
        category: Category::Photography,
        base_priority: Priority::Medium,
        response_time_target: Duration::from_secs(24 * 3600),
        urgent_response_time: Some(Duration::from_secs(2 * 3600)),
        owner_team: "Photography Team",
        next_steps: &[
            "Portfolio review and project consultation",
            "Creative brief development",
            "Timeline and pricing proposal",
        ],
        trigger_names: &[
            "portfolio_automation",
            "booking_automation",
            "instagram_automation",
        ],
    },
    CatalogEntry {
        category: Category::Automation,
        base_priority: Priority::High,
        response_time_target: Duration::from_secs(12 * 3600),
        urgent_response_time: None,
        owner_team: "Automation Team",
        next_steps: &[
            "Business process analysis",
            "Automation strategy development",
            "Implementation roadmap",
        ],
        trigger_names: &[
            "workflow_automation",
            "email_automation",
            "analytics_automation",
        ],
    },
    CatalogEntry {
        category: Category::AiSystem,
        base_priority: Priority::High,
        response_time_target: Duration::from_secs(6 * 3600),
        urgent_response_time: None,
        owner_team: "AI Development Team",
        next_steps: &[
            "AI requirements analysis",
            "Technical consultation",
            "Development proposal",
        ],
        trigger_names: &["ai_automation", "data_automation", "ml_automation"],
    },
    CatalogEntry {
        category: Category::Consulting,
        base_priority: Priority::Medium,
        response_time_target: Duration::from_secs(48 * 3600),
        urgent_response_time: Some(Duration::from_secs(4 * 3600)),
        owner_team: "Consulting Team",
        next_steps: &[
            "Strategic assessment",
            "Consultation scheduling",
            "Action plan development",
        ],
        trigger_names: &["consulting_automation", "strategy_automation"],
    },
    CatalogEntry {
        category: Category::Partnership,
        base_priority: Priority::Medium,
        response_time_target: Duration::from_secs(24 * 3600),
        urgent_response_time: None,
        owner_team: "Business Development Team",
        next_steps: &[
            "Partnership opportunity analysis",
            "Strategic alignment review",
            "Collaboration proposal",
        ],
        trigger_names: &["partnership_automation", "business_automation"],
    },
    CatalogEntry {
        category: Category::Event,
        base_priority: Priority::Medium,
        response_time_target: Duration::from_secs(24 * 3600),
        urgent_response_time: Some(Duration::from_secs(4 * 3600)),
        owner_team: "Event Coordination Team",
        next_steps: &[
            "Event requirements analysis",
            "Creative proposal development",
            "Timeline and logistics planning",
        ],
        trigger_names: &[
            "event_automation",
            "booking_automation",
            "social_automation",
        ],
    },
];

/// Index of the consulting entry, which doubles as the default.
const DEFAULT_ENTRY: usize = 3;

/// Look up the catalog entry for a category. Total: unknown categories
/// (including `Category::Other`) resolve to the consulting entry.
pub fn lookup(category: Category) -> &'static CatalogEntry {
    CATALOG
        .iter()
        .find(|entry| entry.category == category)
        .unwrap_or(&CATALOG[DEFAULT_ENTRY])
}

/// All catalog entries, in declaration order.
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Human-readable description of a trigger name, for the reply checklist.
/// Unknown names get a generic description rather than an error.
pub fn describe_trigger(name: &str) -> &'static str {
    match name {
        "portfolio_automation" => "Portfolio review and creative consultation",
        "booking_automation" => "Smart booking and scheduling system",
        "instagram_automation" => "Social media content automation",
        "workflow_automation" => "Business process optimization",
        "email_automation" => "Intelligent email response system",
        "analytics_automation" => "Performance tracking and insights",
        "ai_automation" => "AI system development and integration",
        "data_automation" => "Data processing and analysis",
        "ml_automation" => "Machine learning model deployment",
        "consulting_automation" => "Strategic consulting workflow",
        "strategy_automation" => "Business strategy development",
        "partnership_automation" => "Partnership opportunity analysis",
        "business_automation" => "Business development automation",
        "event_automation" => "Event coordination and management",
        "social_automation" => "Social media management automation",
        _ => "General automation workflow",
    }
}
