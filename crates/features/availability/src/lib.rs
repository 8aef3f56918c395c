//! # Availability Checks
//!
//! Domain and social-handle lookups for candidate names. Checks never fail: every probe
//! ends in a [`CheckOutcome`], tagged with whether it was [`CheckSource::Live`] or
//! [`CheckSource::Simulated`].
//!
//! * [`DomainChecker`] draws availability per suffix after a fixed delay and attaches
//!   registrar purchase links.
//! * [`SocialChecker`] queries GitHub and Instagram over HTTP (Instagram behind the
//!   [`RateLimiter`]) and draws Twitter and Facebook.

mod domain;
mod error;
mod limiter;
mod simulator;
mod social;

pub use crate::domain::DomainChecker;
pub use crate::error::{AvailabilityError, AvailabilityErrorExt};
pub use crate::limiter::{RateLimited, RateLimiter};
pub use crate::simulator::Simulator;
pub use crate::social::SocialChecker;
pub use ncraft_domain::availability::{
    CheckOutcome, CheckSource, DomainCheck, RegistrarLink, SocialCheck, SocialPlatform,
};

use ncraft_domain::config::{AffiliateConfig, AvailabilityConfig};
use std::sync::Arc;

/// Both checkers wired to one random source and one rate limiter.
#[derive(Debug, Clone)]
pub struct AvailabilityChecks {
    pub domains: DomainChecker,
    pub social: SocialChecker,
    limiter: Arc<RateLimiter>,
}

impl AvailabilityChecks {
    /// # Errors
    /// [`AvailabilityError`] when the HTTP client or a registrar URL cannot be set up.
    pub fn new(
        config: &AvailabilityConfig,
        affiliates: &AffiliateConfig,
        simulator: Simulator,
    ) -> Result<Self, AvailabilityError> {
        let simulator = Arc::new(simulator);
        let limiter = Arc::new(RateLimiter::new(&config.rate_limit));

        let domains = DomainChecker::new(config, affiliates, Arc::clone(&simulator))?;
        let social = SocialChecker::new(config, Arc::clone(&limiter), simulator)?;

        tracing::debug!(live = config.live, suffixes = ?config.suffixes, "Availability checks ready");

        Ok(Self { domains, social, limiter })
    }

    #[must_use]
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}
