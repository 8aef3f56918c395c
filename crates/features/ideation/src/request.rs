use ncraft_domain::Industry;
use ncraft_domain::record::GeneratedNameRecord;
use ncraft_domain::suffix::SuffixSet;
use ncraft_naming::GenerationFlow;
use serde::{Deserialize, Serialize};

/// One ideation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdeationRequest {
    pub keywords: Vec<String>,
    pub industry: Option<Industry>,
    pub flow: GenerationFlow,
    /// Overrides the configured suffix set.
    pub suffixes: Option<SuffixSet>,
    /// Pins candidate selection.
    pub seed: Option<u64>,
}

impl IdeationRequest {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { keywords: keywords.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    #[must_use]
    pub const fn industry(mut self, industry: Option<Industry>) -> Self {
        self.industry = industry;
        self
    }

    #[must_use]
    pub const fn flow(mut self, flow: GenerationFlow) -> Self {
        self.flow = flow;
        self
    }

    #[must_use]
    pub const fn suffixes(mut self, suffixes: SuffixSet) -> Self {
        self.suffixes = Some(suffixes);
        self
    }

    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Records of one run, in candidate order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeationBatch {
    pub id: String,
    pub records: Vec<GeneratedNameRecord>,
}

impl IdeationBatch {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }
}
