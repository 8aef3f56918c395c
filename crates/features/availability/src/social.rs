use crate::error::{AvailabilityError, AvailabilityErrorExt};
use crate::limiter::RateLimiter;
use crate::simulator::Simulator;
use ncraft_domain::availability::{CheckOutcome, CheckSource, SocialCheck, SocialPlatform};
use ncraft_domain::config::AvailabilityConfig;
use ncraft_kernel::text::clean_alphanumeric;
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;

/// Handle lookups across [`SocialPlatform::ALL`].
///
/// GitHub (user API, `GET`) and Instagram (profile page, `HEAD`, rate limited) are
/// queried live unless the checker is offline; Twitter and Facebook are always drawn.
/// A `404` means the handle is free.
#[derive(Debug, Clone)]
pub struct SocialChecker {
    client: Client,
    live: bool,
    github_api: String,
    instagram: String,
    timeout: Duration,
    probability: f64,
    limiter: Arc<RateLimiter>,
    simulator: Arc<Simulator>,
}

impl SocialChecker {
    /// # Errors
    /// [`AvailabilityError::Client`] if the HTTP client cannot be built.
    pub fn new(
        config: &AvailabilityConfig,
        limiter: Arc<RateLimiter>,
        simulator: Arc<Simulator>,
    ) -> Result<Self, AvailabilityError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Building the social lookup client")?;

        Ok(Self {
            client,
            live: config.live,
            github_api: config.github_api_url.trim_end_matches('/').to_owned(),
            instagram: config.instagram_url.trim_end_matches('/').to_owned(),
            timeout: config.check_timeout(),
            probability: config.social_available_probability,
            limiter,
            simulator,
        })
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live
    }

    /// Checks the cleaned form of `name` on every platform concurrently. Results follow
    /// [`SocialPlatform::ALL`] order.
    pub async fn check(&self, name: &str) -> Vec<SocialCheck> {
        let handle = clean_alphanumeric(name);

        let (github, instagram, twitter, facebook) = tokio::join!(
            self.check_platform(SocialPlatform::Github, &handle),
            self.check_platform(SocialPlatform::Instagram, &handle),
            self.check_platform(SocialPlatform::Twitter, &handle),
            self.check_platform(SocialPlatform::Facebook, &handle),
        );

        vec![github, instagram, twitter, facebook]
    }

    async fn check_platform(&self, platform: SocialPlatform, handle: &str) -> SocialCheck {
        let (outcome, source) = if handle.is_empty() {
            (CheckOutcome::Unreachable, self.source_for(platform))
        } else {
            match platform {
                SocialPlatform::Github if self.live => {
                    let url = format!("{}/users/{handle}", self.github_api);
                    (self.probe(platform, Method::GET, &url).await, CheckSource::Live)
                },
                SocialPlatform::Instagram if self.live => (self.instagram(handle).await, CheckSource::Live),
                _ => (self.simulate(), CheckSource::Simulated),
            }
        };

        SocialCheck {
            platform,
            handle: format!("@{handle}"),
            outcome,
            source,
            url: platform.profile_url(handle),
        }
    }

    const fn source_for(&self, platform: SocialPlatform) -> CheckSource {
        match platform {
            SocialPlatform::Github | SocialPlatform::Instagram if self.live => CheckSource::Live,
            _ => CheckSource::Simulated,
        }
    }

    async fn instagram(&self, handle: &str) -> CheckOutcome {
        if let Err(rejection) = self.limiter.try_acquire(handle) {
            tracing::debug!(handle, %rejection, "Instagram lookup rate limited");
            return CheckOutcome::RateLimited;
        }

        let url = format!("{}/{handle}/", self.instagram);
        self.probe(SocialPlatform::Instagram, Method::HEAD, &url).await
    }

    async fn probe(&self, platform: SocialPlatform, method: Method, url: &str) -> CheckOutcome {
        let request = self.client.request(method, url).send();

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => match response.status() {
                StatusCode::NOT_FOUND => CheckOutcome::Available,
                status if status.is_success() => CheckOutcome::Taken,
                status => {
                    tracing::warn!(%platform, url, %status, "Unexpected lookup status");
                    CheckOutcome::Unreachable
                },
            },
            Ok(Err(e)) => {
                tracing::warn!(%platform, url, error = %e, "Lookup failed");
                CheckOutcome::Unreachable
            },
            Err(_) => {
                tracing::warn!(%platform, url, timeout = ?self.timeout, "Lookup timed out");
                CheckOutcome::Unreachable
            },
        }
    }

    fn simulate(&self) -> CheckOutcome {
        CheckOutcome::from_available(self.simulator.draw(self.probability))
    }
}
