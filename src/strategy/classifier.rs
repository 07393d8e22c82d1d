//! Urgency-based strategy refinement.
//!
//! Pure and total: every inquiry yields a strategy, unknown categories
//! fall back to the catalog default, and nothing here touches I/O.

use tracing::debug;

use crate::inquiry::{Inquiry, Priority, Urgency};
use crate::strategy::{Strategy, catalog};

/// Select and refine the strategy for an inquiry.
///
/// Base policy comes from the catalog entry for the inquiry's category.
/// An `urgent` inquiry is always handled at `High` priority, and the
/// response-time commitment drops to the category's urgent variant where
/// one exists; categories without an urgent variant keep their default
/// target at any urgency.
pub fn classify(inquiry: &Inquiry) -> Strategy {
    let entry = catalog::lookup(inquiry.category);

    let (priority, response_time_target) = if inquiry.urgency == Urgency::Urgent {
        (
            Priority::High,
            entry.urgent_response_time.unwrap_or(entry.response_time_target),
        )
    } else {
        (entry.base_priority, entry.response_time_target)
    };

    debug!(
        category = %inquiry.category,
        urgency = %inquiry.urgency,
        owner_team = entry.owner_team,
        priority = %priority,
        "Classified inquiry"
    );

    Strategy {
        priority,
        response_time_target,
        owner_team: entry.owner_team,
        next_steps: entry.next_steps,
        trigger_names: entry.trigger_names,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::inquiry::Category;

    fn make_inquiry(category: Category, urgency: Urgency) -> Inquiry {
        Inquiry {
            id: Uuid::new_v4(),
            customer_name: "Ana Ruiz".into(),
            customer_email: "ana@example.com".into(),
            subject: "Hello".into(),
            message: "Hi there".into(),
            category,
            urgency,
            budget: None,
            timeline: None,
            company: None,
            phone: None,
            received_at: Utc::now(),
        }
    }

    #[test]
    fn every_category_matches_catalog_entry() {
        for cat in [
            Category::Photography,
            Category::Automation,
            Category::AiSystem,
            Category::Consulting,
            Category::Partnership,
            Category::Event,
        ] {
            let strategy = classify(&make_inquiry(cat, Urgency::Medium));
            let entry = catalog::lookup(cat);
            assert_eq!(strategy.owner_team, entry.owner_team);
            assert_eq!(strategy.trigger_names, entry.trigger_names);
            assert_eq!(strategy.priority, entry.base_priority);
        }
    }

    #[test]
    fn unknown_category_gets_default_strategy() {
        let strategy = classify(&make_inquiry(Category::Other, Urgency::Low));
        assert_eq!(strategy.owner_team, "Consulting Team");
        assert_eq!(
            strategy.trigger_names,
            &["consulting_automation", "strategy_automation"]
        );
    }

    #[test]
    fn urgent_forces_high_priority_for_all_categories() {
        for cat in [
            Category::Photography,
            Category::Automation,
            Category::AiSystem,
            Category::Consulting,
            Category::Partnership,
            Category::Event,
            Category::Other,
        ] {
            let strategy = classify(&make_inquiry(cat, Urgency::Urgent));
            assert_eq!(strategy.priority, Priority::High, "{cat}");
        }
    }

    #[test]
    fn urgent_never_raises_the_response_target() {
        for cat in [
            Category::Photography,
            Category::Automation,
            Category::AiSystem,
            Category::Consulting,
            Category::Partnership,
            Category::Event,
        ] {
            let base = classify(&make_inquiry(cat, Urgency::Medium));
            let urgent = classify(&make_inquiry(cat, Urgency::Urgent));
            assert!(
                urgent.response_time_target <= base.response_time_target,
                "{cat}"
            );
        }
    }

    #[test]
    fn urgent_photography_drops_to_two_hours() {
        let strategy = classify(&make_inquiry(Category::Photography, Urgency::Urgent));
        assert_eq!(strategy.response_time_target, Duration::from_secs(2 * 3600));
    }

    #[test]
    fn urgent_consulting_drops_to_four_hours() {
        let strategy = classify(&make_inquiry(Category::Consulting, Urgency::Urgent));
        assert_eq!(strategy.response_time_target, Duration::from_secs(4 * 3600));
    }

    #[test]
    fn urgent_automation_keeps_fixed_target() {
        let strategy = classify(&make_inquiry(Category::Automation, Urgency::Urgent));
        assert_eq!(strategy.response_time_target, Duration::from_secs(12 * 3600));
    }

    #[test]
    fn non_urgent_photography_keeps_default_target() {
        for urgency in [Urgency::Low, Urgency::Medium, Urgency::High] {
            let strategy = classify(&make_inquiry(Category::Photography, urgency));
            assert_eq!(strategy.response_time_target, Duration::from_secs(24 * 3600));
            assert_eq!(strategy.priority, Priority::Medium);
        }
    }
}
