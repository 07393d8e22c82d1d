//! Inquiry record and its closed vocabulary.
//!
//! An `Inquiry` is one customer-submitted contact request. It is created
//! at the intake boundary, immutable once received, and consumed read-only
//! by the pipeline. Unknown category or urgency strings are absorbed at
//! the serde boundary (`Other` / `Medium`) so the pipeline never sees an
//! out-of-vocabulary value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Category ────────────────────────────────────────────────────────

/// Inquiry category, as submitted by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Photography,
    Automation,
    AiSystem,
    Consulting,
    Partnership,
    Event,
    /// Anything the catalog does not know. Unknown wire values land here.
    #[serde(other)]
    Other,
}

impl Category {
    /// Wire label, as it appears in intake payloads and reply text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Photography => "photography",
            Self::Automation => "automation",
            Self::AiSystem => "ai-system",
            Self::Consulting => "consulting",
            Self::Partnership => "partnership",
            Self::Event => "event",
            Self::Other => "other",
        }
    }

    /// Parse a wire label. Unknown strings map to `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "photography" => Self::Photography,
            "automation" => Self::Automation,
            "ai-system" => Self::AiSystem,
            "consulting" => Self::Consulting,
            "partnership" => Self::Partnership,
            "event" => Self::Event,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Urgency ─────────────────────────────────────────────────────────

/// Customer-declared urgency of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    High,
    Urgent,
    /// Default tier. Unknown wire values land here.
    #[serde(other)]
    Medium,
}

impl Urgency {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    /// Parse a wire label. Unknown strings map to `Medium`.
    pub fn parse(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Medium,
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Priority ────────────────────────────────────────────────────────

/// Handling priority assigned by classification (not customer-declared).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ── Inquiry ─────────────────────────────────────────────────────────

/// One customer contact request. Immutable once received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    /// Unique ID, assigned at intake.
    pub id: Uuid,
    /// Full customer name as typed into the form.
    pub customer_name: String,
    /// Reply-to address.
    pub customer_email: String,
    /// Subject line of the inquiry.
    pub subject: String,
    /// Free-text message body.
    pub message: String,
    /// Inquiry category.
    pub category: Category,
    /// Customer-declared urgency.
    pub urgency: Urgency,
    /// Optional qualification fields from the form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// When the inquiry was received at intake.
    pub received_at: DateTime<Utc>,
}

impl Inquiry {
    /// First whitespace-separated token of the customer name, if any.
    pub fn first_name(&self) -> Option<&str> {
        self.customer_name.split_whitespace().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_inquiry(name: &str) -> Inquiry {
        Inquiry {
            id: Uuid::new_v4(),
            customer_name: name.into(),
            customer_email: "ana@example.com".into(),
            subject: "Wedding shoot".into(),
            message: "Looking for a photographer in June.".into(),
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
    fn category_wire_labels_round_trip() {
        for cat in [
            Category::Photography,
            Category::Automation,
            Category::AiSystem,
            Category::Consulting,
            Category::Partnership,
            Category::Event,
            Category::Other,
        ] {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.label()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn unknown_category_deserializes_to_other() {
        let cat: Category = serde_json::from_str("\"unknown-type\"").unwrap();
        assert_eq!(cat, Category::Other);
    }

    #[test]
    fn unknown_urgency_deserializes_to_medium() {
        let urgency: Urgency = serde_json::from_str("\"whenever\"").unwrap();
        assert_eq!(urgency, Urgency::Medium);
    }

    #[test]
    fn category_parse_matches_serde() {
        assert_eq!(Category::parse("ai-system"), Category::AiSystem);
        assert_eq!(Category::parse("unknown-type"), Category::Other);
    }

    #[test]
    fn urgency_parse_fallback() {
        assert_eq!(Urgency::parse("urgent"), Urgency::Urgent);
        assert_eq!(Urgency::parse("asap!!"), Urgency::Medium);
    }

    #[test]
    fn first_name_takes_leading_token() {
        assert_eq!(make_inquiry("Ana Ruiz").first_name(), Some("Ana"));
        assert_eq!(make_inquiry("  Ana  ").first_name(), Some("Ana"));
        assert_eq!(make_inquiry("").first_name(), None);
        assert_eq!(make_inquiry("   ").first_name(), None);
    }

    #[test]
    fn inquiry_serde_omits_absent_optionals() {
        let json = serde_json::to_value(make_inquiry("Ana Ruiz")).unwrap();
        assert!(json.get("budget").is_none());
        assert_eq!(json["category"], "photography");
        assert_eq!(json["urgency"], "urgent");
    }

    #[test]
    fn inquiry_deserializes_without_optionals() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "customer_name": "Bob Chen",
            "customer_email": "bob@x.com",
            "subject": "Automation help",
            "message": "We need workflow automation.",
            "category": "automation",
            "urgency": "high",
            "received_at": Utc::now(),
        });
        let inquiry: Inquiry = serde_json::from_value(json).unwrap();
        assert_eq!(inquiry.category, Category::Automation);
        assert!(inquiry.budget.is_none());
    }
}
