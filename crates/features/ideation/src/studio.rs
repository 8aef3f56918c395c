use crate::error::IdeationError;
use crate::request::{IdeationBatch, IdeationRequest};
use futures::future::join_all;
use ncraft_availability::{AvailabilityChecks, Simulator};
use ncraft_branding::synthesize_for;
use ncraft_domain::Industry;
use ncraft_domain::config::StudioConfig;
use ncraft_domain::constants::DEFAULT_LOGO_INDUSTRY;
use ncraft_domain::record::GeneratedNameRecord;
use ncraft_domain::suffix::SuffixSet;
use ncraft_domain::trademark::TrademarkAssessment;
use ncraft_kernel::safe_nanoid;
use ncraft_naming::NameGenerator;
use ncraft_trademark::TrademarkClassifier;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{info, instrument};

/// Runs ideation requests against one configuration.
#[derive(Debug, Clone)]
pub struct Studio {
    generator: NameGenerator,
    classifier: TrademarkClassifier,
    trademark_latency: Duration,
    suffixes: SuffixSet,
    checks: AvailabilityChecks,
}

impl Studio {
    /// # Errors
    /// [`IdeationError::Availability`] when the availability checks cannot be set up.
    pub fn new(config: &StudioConfig) -> Result<Self, IdeationError> {
        Self::with_simulator(config, Simulator::default())
    }

    /// Like [`Studio::new`] with a caller-provided random source for the simulated checks.
    ///
    /// # Errors
    /// [`IdeationError::Availability`] when the availability checks cannot be set up.
    pub fn with_simulator(config: &StudioConfig, simulator: Simulator) -> Result<Self, IdeationError> {
        let checks = AvailabilityChecks::new(&config.availability, &config.affiliates, simulator)?;

        Ok(Self {
            generator: NameGenerator::new(config.generator.clone()),
            classifier: TrademarkClassifier::from_config(&config.trademark),
            trademark_latency: config.trademark.latency(),
            suffixes: config.availability.suffixes,
            checks,
        })
    }

    #[must_use]
    pub const fn generator(&self) -> &NameGenerator {
        &self.generator
    }

    #[must_use]
    pub const fn classifier(&self) -> &TrademarkClassifier {
        &self.classifier
    }

    #[must_use]
    pub const fn checks(&self) -> &AvailabilityChecks {
        &self.checks
    }

    /// Generates candidates, then screens every candidate concurrently. Individual checks
    /// never fail the batch.
    ///
    /// # Errors
    /// [`IdeationError::Naming`] when the request has no usable keywords. Nothing is
    /// checked in that case.
    #[instrument(skip_all, fields(flow = %request.flow, industry = ?request.industry))]
    pub async fn ideate(&self, request: IdeationRequest) -> Result<IdeationBatch, IdeationError> {
        let IdeationRequest { keywords, industry, flow, suffixes, seed } = request;

        let names = match seed {
            Some(seed) => {
                self.generator.generate(&keywords, industry, flow, &mut StdRng::seed_from_u64(seed))
            },
            None => self.generator.generate(&keywords, industry, flow, &mut rand::rng()),
        }?;

        let suffixes = suffixes.unwrap_or(self.suffixes);
        let logo_industry = industry.unwrap_or(DEFAULT_LOGO_INDUSTRY);

        let records =
            join_all(names.iter().map(|name| self.assemble(name, logo_industry, suffixes))).await;

        let batch = IdeationBatch { id: safe_nanoid!(), records };
        info!(batch = %batch.id, candidates = batch.records.len(), "Ideation batch ready");

        Ok(batch)
    }

    /// Screens one name: trademark, domains and social handles at once, plus its logo.
    pub async fn assemble(&self, name: &str, industry: Industry, suffixes: SuffixSet) -> GeneratedNameRecord {
        let (trademark, domains, social) = tokio::join!(
            self.assess(name),
            self.checks.domains.check(name, suffixes),
            self.checks.social.check(name),
        );

        GeneratedNameRecord {
            name: name.to_owned(),
            logo: synthesize_for(name, Some(industry)).into_svg(),
            domains,
            trademark,
            social,
        }
    }

    /// Trademark assessment behind the simulated registry latency.
    pub async fn assess(&self, name: &str) -> TrademarkAssessment {
        tokio::time::sleep(self.trademark_latency).await;
        self.classifier.assess(name)
    }
}
