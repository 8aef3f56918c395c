use crate::error::{AvailabilityError, AvailabilityErrorExt};
use crate::simulator::Simulator;
use ncraft_domain::availability::{CheckOutcome, CheckSource, DomainCheck, RegistrarLink};
use ncraft_domain::config::{AffiliateConfig, AvailabilityConfig};
use ncraft_domain::suffix::SuffixSet;
use ncraft_kernel::text::clean_alphanumeric;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const GODADDY_SEARCH: &str = "https://www.godaddy.com/domains/domain-name-search";
const NAMECHEAP_SEARCH: &str = "https://www.namecheap.com/domains/registration/results/";

#[derive(Debug, Clone)]
struct Registrar {
    name: &'static str,
    search: Url,
    query_key: &'static str,
    affiliate_id: Option<String>,
    price_range: &'static str,
}

impl Registrar {
    fn link(&self, domain: &str) -> RegistrarLink {
        let mut url = self.search.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(self.query_key, domain);
            if let Some(id) = self.affiliate_id.as_deref().filter(|id| !id.is_empty()) {
                query.append_pair("aid", id);
            }
        }

        RegistrarLink {
            name: self.name.to_owned(),
            url: url.into(),
            price_range: self.price_range.to_owned(),
        }
    }
}

/// Simulated domain lookup: one delay per name, then an independent draw per suffix.
#[derive(Debug, Clone)]
pub struct DomainChecker {
    latency: Duration,
    probability: f64,
    registrars: Vec<Registrar>,
    simulator: Arc<Simulator>,
}

impl DomainChecker {
    /// # Errors
    /// [`AvailabilityError::Url`] if a registrar search URL does not parse.
    pub fn new(
        config: &AvailabilityConfig,
        affiliates: &AffiliateConfig,
        simulator: Arc<Simulator>,
    ) -> Result<Self, AvailabilityError> {
        let registrars = vec![
            Registrar {
                name: "GoDaddy",
                search: Url::parse(GODADDY_SEARCH).context("GoDaddy search URL")?,
                query_key: "domainToCheck",
                affiliate_id: affiliates.godaddy.clone(),
                price_range: "$11.99/yr",
            },
            Registrar {
                name: "Namecheap",
                search: Url::parse(NAMECHEAP_SEARCH).context("Namecheap search URL")?,
                query_key: "domain",
                affiliate_id: affiliates.namecheap.clone(),
                price_range: "$8.88/yr",
            },
        ];

        Ok(Self {
            latency: config.domain_latency(),
            probability: config.domain_available_probability,
            registrars,
            simulator,
        })
    }

    /// Checks `name` under every suffix in `suffixes`, in suffix order. A name with no
    /// ASCII letters or digits has no domains.
    pub async fn check(&self, name: &str, suffixes: SuffixSet) -> Vec<DomainCheck> {
        let label = clean_alphanumeric(name);
        if label.is_empty() {
            tracing::debug!(name, "No usable domain label");
            return Vec::new();
        }

        tokio::time::sleep(self.latency).await;

        suffixes
            .labels()
            .map(|suffix| {
                let domain = format!("{label}{suffix}");
                let outcome = CheckOutcome::from_available(self.simulator.draw(self.probability));
                let registrars = self.registrars.iter().map(|r| r.link(&domain)).collect();
                DomainCheck { domain, outcome, source: CheckSource::Simulated, registrars }
            })
            .collect()
    }

    /// Purchase links for a fully qualified domain.
    #[must_use]
    pub fn registrar_links(&self, domain: &str) -> Vec<RegistrarLink> {
        self.registrars.iter().map(|r| r.link(domain)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(affiliates: &AffiliateConfig, probability: f64) -> DomainChecker {
        let config = AvailabilityConfig {
            domain_latency_ms: 0,
            domain_available_probability: probability,
            ..AvailabilityConfig::default()
        };
        DomainChecker::new(&config, affiliates, Arc::new(Simulator::seeded(3))).unwrap()
    }

    #[test]
    fn links_without_affiliates() {
        let links = checker(&AffiliateConfig::default(), 1.0).registrar_links("acme.com");

        assert_eq!(links[0].name, "GoDaddy");
        assert_eq!(
            links[0].url,
            "https://www.godaddy.com/domains/domain-name-search?domainToCheck=acme.com"
        );
        assert_eq!(links[0].price_range, "$11.99/yr");
        assert_eq!(links[1].url, "https://www.namecheap.com/domains/registration/results/?domain=acme.com");
        assert_eq!(links[1].price_range, "$8.88/yr");
    }

    #[test]
    fn links_carry_affiliate_ids() {
        let affiliates =
            AffiliateConfig { godaddy: Some("gd-42".to_owned()), namecheap: Some(String::new()) };
        let links = checker(&affiliates, 1.0).registrar_links("acme.io");

        assert!(links[0].url.ends_with("?domainToCheck=acme.io&aid=gd-42"));
        assert!(!links[1].url.contains("aid="));
    }

    #[tokio::test]
    async fn checks_every_requested_suffix() {
        let checks = checker(&AffiliateConfig::default(), 1.0).check("Acme Labs!", SuffixSet::STANDARD).await;

        let domains: Vec<&str> = checks.iter().map(|c| c.domain.as_str()).collect();
        assert_eq!(domains, ["acmelabs.com", "acmelabs.io", "acmelabs.co", "acmelabs.app"]);
        assert!(checks.iter().all(DomainCheck::is_available));
        assert!(checks.iter().all(|c| c.source == CheckSource::Simulated && c.registrars.len() == 2));
    }

    #[tokio::test]
    async fn zero_probability_means_taken() {
        let checks = checker(&AffiliateConfig::default(), 0.0).check("acme", SuffixSet::AI).await;
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].outcome, CheckOutcome::Taken);
    }

    #[tokio::test]
    async fn unusable_names_have_no_domains() {
        let checks = checker(&AffiliateConfig::default(), 1.0).check("!!!", SuffixSet::STANDARD).await;
        assert!(checks.is_empty());
    }
}
