//! Tagged results of domain and social-handle checks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one availability probe. Only [`CheckOutcome::Available`] counts as available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckOutcome {
    Available,
    Taken,
    /// Rejected locally by the rate limiter before any request was made.
    RateLimited,
    /// Transport error, timeout or an unexpected status.
    Unreachable,
}

impl CheckOutcome {
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    #[must_use]
    pub const fn from_available(available: bool) -> Self {
        if available { Self::Available } else { Self::Taken }
    }
}

/// Whether the outcome came from a real lookup or a random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckSource {
    Live,
    Simulated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrarLink {
    pub name: String,
    pub url: String,
    pub price_range: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainCheck {
    pub domain: String,
    pub outcome: CheckOutcome,
    pub source: CheckSource,
    pub registrars: Vec<RegistrarLink>,
}

impl DomainCheck {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.outcome.is_available()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Instagram,
    Twitter,
    Facebook,
}

impl SocialPlatform {
    pub const ALL: [Self; 4] = [Self::Github, Self::Instagram, Self::Twitter, Self::Facebook];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Facebook => "facebook",
        }
    }

    /// Public profile URL for `handle` (without the leading `@`).
    #[must_use]
    pub fn profile_url(self, handle: &str) -> String {
        match self {
            Self::Github => format!("https://github.com/{handle}"),
            Self::Instagram => format!("https://instagram.com/{handle}"),
            Self::Twitter => format!("https://twitter.com/{handle}"),
            Self::Facebook => format!("https://facebook.com/{handle}"),
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialCheck {
    pub platform: SocialPlatform,
    /// Display handle, `@` followed by the cleaned name.
    pub handle: String,
    pub outcome: CheckOutcome,
    pub source: CheckSource,
    pub url: String,
}

impl SocialCheck {
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.outcome.is_available()
    }
}
