//! # Trademark Screening
//!
//! Scores how close a candidate name is to a small table of registered marks and turns
//! that into a [`RiskLevel`] with human-readable advice.
//!
//! * [`similarity`] is a normalized, case-insensitive Levenshtein score in `0.0..=1.0`.
//! * [`TrademarkClassifier::assess`] is pure: the same name always yields the same
//!   [`TrademarkAssessment`].

mod classifier;
mod similarity;

pub use crate::classifier::{KNOWN_MARKS, TrademarkClassifier};
pub use crate::similarity::similarity;
pub use ncraft_domain::trademark::{KnownMark, RiskLevel, TrademarkAssessment};
