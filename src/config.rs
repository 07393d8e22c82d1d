//! Configuration types.
//!
//! Everything is env-driven with working defaults, so the binary boots
//! with zero configuration (console collaborators, default brand) and
//! picks up SMTP / automation-hub settings when they are present.

use crate::error::ConfigError;

/// Studio identity rendered into acknowledgement replies.
#[derive(Debug, Clone)]
pub struct BrandProfile {
    /// Studio name used in greetings and the outbound subject line.
    pub name: String,
    /// Contact block shown in the reply footer.
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            name: "Aurora Studio".to_string(),
            contact_email: "hello@aurora.studio".to_string(),
            contact_phone: "(555) 010-4477".to_string(),
            website: "www.aurora.studio".to_string(),
        }
    }
}

impl BrandProfile {
    /// Build from `BRAND_*` environment variables, defaulting per field.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            name: std::env::var("BRAND_NAME").unwrap_or(defaults.name),
            contact_email: std::env::var("BRAND_CONTACT_EMAIL").unwrap_or(defaults.contact_email),
            contact_phone: std::env::var("BRAND_CONTACT_PHONE").unwrap_or(defaults.contact_phone),
            website: std::env::var("BRAND_WEBSITE").unwrap_or(defaults.website),
        }
    }
}

/// Intake HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

impl ServerConfig {
    /// Build from `INQUIRY_FLOW_PORT`. Absent means the default port; a
    /// present-but-unparseable value is a hard configuration error rather
    /// than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("INQUIRY_FLOW_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "INQUIRY_FLOW_PORT".into(),
                message: format!("not a port number: {raw}"),
            })?,
            Err(_) => Self::default().port,
        };
        Ok(Self { port })
    }
}
