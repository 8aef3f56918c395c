use crate::similarity::similarity;
use ncraft_domain::config::TrademarkConfig;
use ncraft_domain::trademark::{KnownMark, RiskLevel, TrademarkAssessment};
use ncraft_kernel::text::clean_alphanumeric;

/// Registered marks, scanned in this order.
pub const KNOWN_MARKS: [KnownMark; 5] = [
    KnownMark { mark: "apple", industry: "technology" },
    KnownMark { mark: "nike", industry: "clothing" },
    KnownMark { mark: "amazon", industry: "retail" },
    KnownMark { mark: "google", industry: "technology" },
    KnownMark { mark: "microsoft", industry: "technology" },
];

const SAFE_ADVICE: &str = "This name appears to be safe to use.";

/// Stateless risk classifier over [`KNOWN_MARKS`].
///
/// A name containing a mark is a high risk and ends the scan. A name whose similarity to
/// a mark exceeds the threshold is a medium risk; the scan continues, so a later
/// containment still escalates to high.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrademarkClassifier {
    threshold: f64,
}

impl Default for TrademarkClassifier {
    fn default() -> Self {
        Self::from_config(&TrademarkConfig::default())
    }
}

impl TrademarkClassifier {
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub const fn from_config(config: &TrademarkConfig) -> Self {
        Self::new(config.similarity_threshold)
    }

    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn assess(&self, name: &str) -> TrademarkAssessment {
        let clean = clean_alphanumeric(name);

        let mut risk_level = RiskLevel::Low;
        let mut similar_marks = Vec::new();
        let mut advice = SAFE_ADVICE.to_owned();

        for KnownMark { mark, industry } in KNOWN_MARKS {
            if clean.contains(mark) {
                risk_level = RiskLevel::High;
                similar_marks.push(mark.to_owned());
                advice = format!(
                    "This name contains \"{mark}\" which is a registered trademark in the {industry} industry."
                );
                break;
            }

            if similarity(&clean, mark) > self.threshold {
                risk_level = RiskLevel::Medium;
                similar_marks.push(mark.to_owned());
                advice =
                    format!("This name is similar to existing trademark \"{mark}\". Consider modifications.");
            }
        }

        if risk_level != RiskLevel::Low {
            tracing::debug!(name, risk = %risk_level, marks = ?similar_marks, "Trademark conflict");
        }

        TrademarkAssessment {
            risk_level,
            similar_marks,
            advice,
            is_registered: risk_level == RiskLevel::High,
        }
    }
}
