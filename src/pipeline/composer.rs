//! Acknowledgement reply composition.
//!
//! Pure template substitution — no randomness, no locale formatting, no
//! I/O. Given the same inquiry, strategy, and brand profile, the output is
//! byte-identical. Composition is the only fatal step in the pipeline, so
//! the malformed-inquiry checks live here.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::BrandProfile;
use crate::error::ComposeError;
use crate::inquiry::Inquiry;
use crate::strategy::{Strategy, catalog, format_response_time};

/// Loose shape check — one `@`, something on both sides, a dot in the
/// domain. Deliverability is the transport's problem.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A composed acknowledgement, ready for the email sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedReply {
    pub subject: String,
    pub body: String,
}

/// Renders acknowledgement replies against a brand profile.
pub struct ReplyComposer {
    brand: BrandProfile,
}

impl ReplyComposer {
    pub fn new(brand: BrandProfile) -> Self {
        Self { brand }
    }

    /// Compose the acknowledgement for an inquiry under its strategy.
    ///
    /// Fails only on malformed inquiries: a blank customer name or an
    /// address that cannot be an email. The body always contains the
    /// customer's first name and the response-time target verbatim.
    pub fn compose(
        &self,
        inquiry: &Inquiry,
        strategy: &Strategy,
    ) -> Result<ComposedReply, ComposeError> {
        let first_name = inquiry
            .first_name()
            .ok_or(ComposeError::MissingCustomerName)?;

        if !EMAIL_SHAPE.is_match(inquiry.customer_email.trim()) {
            return Err(ComposeError::InvalidEmail {
                address: inquiry.customer_email.clone(),
            });
        }

        let response_time = format_response_time(strategy.response_time_target);

        let mut body = String::with_capacity(1024);
        let _ = writeln!(body, "Dear {first_name},");
        let _ = writeln!(body);
        let _ = writeln!(
            body,
            "Thank you for reaching out to {}! We've received your inquiry about {} \
             and are excited about the possibility of working together.",
            self.brand.name, inquiry.category
        );
        let _ = writeln!(body);

        let _ = writeln!(body, "WHAT HAPPENS NEXT:");
        let _ = writeln!(
            body,
            "- Our {} will review your inquiry within {}",
            strategy.owner_team, response_time
        );
        let _ = writeln!(body, "- We'll respond via your preferred contact method");
        let _ = writeln!(body, "- We'll prepare a customized proposal for your project");
        let _ = writeln!(body, "- We'll schedule a consultation to discuss your vision");
        let _ = writeln!(body);

        let _ = writeln!(body, "AUTOMATION FLOW ACTIVATED:");
        for name in strategy.trigger_names {
            let _ = writeln!(body, "- [x] {}", catalog::describe_trigger(name));
        }
        let _ = writeln!(body);

        let _ = writeln!(body, "NEXT STEPS:");
        for step in strategy.next_steps {
            let _ = writeln!(body, "- {step}");
        }
        let _ = writeln!(body);

        let _ = writeln!(body, "IMMEDIATE ASSISTANCE:");
        let _ = writeln!(body, "- Email: {}", self.brand.contact_email);
        let _ = writeln!(body, "- Phone: {}", self.brand.contact_phone);
        let _ = writeln!(body, "- Website: {}", self.brand.website);
        let _ = writeln!(body);

        let _ = writeln!(body, "Best regards,");
        let _ = writeln!(body, "The {} Team", self.brand.name);
        let _ = writeln!(body);
        let _ = writeln!(body, "---");
        let _ = write!(
            body,
            "This acknowledgement was generated automatically; \
             our automation workflows for your inquiry are now active."
        );

        let subject = format!(
            "Re: {} - Thank You for Contacting {}",
            inquiry.subject, self.brand.name
        );

        Ok(ComposedReply { subject, body })
    }
}
