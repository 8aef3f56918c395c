use crate::availability::{DomainCheck, SocialCheck};
use crate::trademark::TrademarkAssessment;
use serde::{Deserialize, Serialize};

/// Everything known about one candidate name after ideation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedNameRecord {
    pub name: String,
    /// SVG markup.
    pub logo: String,
    pub domains: Vec<DomainCheck>,
    pub trademark: TrademarkAssessment,
    pub social: Vec<SocialCheck>,
}

impl GeneratedNameRecord {
    /// Domains whose check came back available.
    pub fn available_domains(&self) -> impl Iterator<Item = &DomainCheck> {
        self.domains.iter().filter(|d| d.is_available())
    }
}
