use serde::{Deserialize, Serialize};
use std::fmt;

/// Trademark conflict tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered mark and the industry it is registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownMark {
    pub mark: &'static str,
    pub industry: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrademarkAssessment {
    pub risk_level: RiskLevel,
    pub similar_marks: Vec<String>,
    pub advice: String,
    /// `true` exactly when the name contains a registered mark.
    pub is_registered: bool,
}
