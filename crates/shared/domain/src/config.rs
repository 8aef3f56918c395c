use crate::suffix::SuffixSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level configuration of the ideation studio and its front-ends.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StudioConfigInner {
    pub generator: GeneratorConfig,
    pub trademark: TrademarkConfig,
    pub availability: AvailabilityConfig,
    pub affiliates: AffiliateConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct StudioConfig {
    #[serde(flatten, default)]
    inner: Arc<StudioConfigInner>,
}

impl Deref for StudioConfig {
    type Target = StudioConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for StudioConfig {
    fn deref_mut(&mut self) -> &mut StudioConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Candidate pool limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Names kept by the primary (affix) flow.
    pub primary_limit: usize,
    /// Names kept by the extended (pattern) flow.
    pub extended_limit: usize,
    /// Shortest name the extended flow accepts, in characters.
    pub min_len: usize,
    /// Longest name the extended flow accepts, in characters.
    pub max_len: usize,
    /// Length the extended flow ranks closest to.
    pub ideal_len: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrademarkConfig {
    /// Similarity above which a mark is reported as a medium risk.
    pub similarity_threshold: f64,
    /// Simulated lookup latency.
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// `false` replaces the GitHub and Instagram lookups with simulated draws.
    pub live: bool,
    pub suffixes: SuffixSet,
    pub domain_latency_ms: u64,
    pub domain_available_probability: f64,
    pub social_available_probability: f64,
    /// Upper bound for a single live lookup.
    pub check_timeout_ms: u64,
    pub github_api_url: String,
    pub instagram_url: String,
    pub user_agent: String,
    pub rate_limit: RateLimitConfig,
}

/// Per-handle limits for the Instagram lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub cooldown_secs: u64,
    pub window_secs: u64,
    pub max_requests: usize,
}

/// Registrar affiliate identifiers appended to purchase links.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AffiliateConfig {
    pub godaddy: Option<String>,
    pub namecheap: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Holds `favorites.json`.
    pub data_dir: PathBuf,
    /// Default target of logo exports.
    pub export_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub directory: Option<PathBuf>,
}

impl TrademarkConfig {
    #[must_use]
    pub const fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl AvailabilityConfig {
    #[must_use]
    pub const fn domain_latency(&self) -> Duration {
        Duration::from_millis(self.domain_latency_ms)
    }

    #[must_use]
    pub const fn check_timeout(&self) -> Duration {
        Duration::from_millis(self.check_timeout_ms)
    }
}

impl RateLimitConfig {
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        Duration::from_secs(self.cooldown_secs)
    }

    #[must_use]
    pub const fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

// --- Default ---

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { primary_limit: 8, extended_limit: 15, min_len: 4, max_len: 14, ideal_len: 8 }
    }
}

impl Default for TrademarkConfig {
    fn default() -> Self {
        Self { similarity_threshold: 0.8, latency_ms: 300 }
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            live: true,
            suffixes: SuffixSet::STANDARD,
            domain_latency_ms: 300,
            domain_available_probability: 0.7,
            social_available_probability: 0.5,
            check_timeout_ms: 5_000,
            github_api_url: "https://api.github.com".to_owned(),
            instagram_url: "https://www.instagram.com".to_owned(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_owned(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { cooldown_secs: 36, window_secs: 3_600, max_requests: 100 }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".ncraft"), export_dir: PathBuf::from(".") }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), json: false, directory: None }
    }
}
