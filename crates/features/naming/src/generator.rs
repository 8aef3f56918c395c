use crate::GenerationFlow;
use crate::affix::affix_pool;
use crate::error::NamingError;
use crate::pattern::pattern_pool;
use fxhash::FxHashSet;
use ncraft_domain::Industry;
use ncraft_domain::config::GeneratorConfig;
use ncraft_kernel::text::split_keywords;
use rand::Rng;
use rand::seq::SliceRandom;

/// Keyword-driven name generator. Holds only its limits, so one instance can serve any
/// number of requests.
#[derive(Debug, Clone, Default)]
pub struct NameGenerator {
    config: GeneratorConfig,
}

impl NameGenerator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Builds the whole candidate pool for `flow`, sorted so that the later shuffle is the
    /// only source of ordering.
    ///
    /// Each keyword may hold several whitespace-separated words; they are normalized and
    /// deduplicated first.
    ///
    /// # Errors
    /// [`NamingError::NoKeywords`] when nothing is left after normalization.
    pub fn pool<K, R>(
        &self,
        keywords: &[K],
        industry: Option<Industry>,
        flow: GenerationFlow,
        rng: &mut R,
    ) -> Result<Vec<String>, NamingError>
    where
        K: AsRef<str>,
        R: Rng,
    {
        let keywords = normalize(keywords)?;

        let pool = match flow {
            GenerationFlow::Primary => affix_pool(&keywords, industry),
            GenerationFlow::Extended => {
                let len = self.config.min_len..=self.config.max_len;
                pattern_pool(&keywords, industry, &len, rng)
            },
        };

        let mut pool: Vec<String> = pool.into_iter().collect();
        pool.sort_unstable();

        tracing::debug!(
            keywords = keywords.len(),
            industry = industry.map(Industry::id),
            %flow,
            pool = pool.len(),
            "Candidate pool built"
        );

        Ok(pool)
    }

    /// Draws the final candidates: the pool shuffled with `rng` and cut to the flow's
    /// limit. The extended flow ranks by distance to the ideal length first; ties keep
    /// their shuffled order.
    ///
    /// The extended flow only keeps names within `min_len..=max_len`, so a single long
    /// keyword without an industry can leave it with an empty list. That is `Ok`, not an
    /// error; the primary flow always returns at least the capitalized keywords.
    ///
    /// # Errors
    /// [`NamingError::NoKeywords`] when nothing is left after normalization.
    pub fn generate<K, R>(
        &self,
        keywords: &[K],
        industry: Option<Industry>,
        flow: GenerationFlow,
        rng: &mut R,
    ) -> Result<Vec<String>, NamingError>
    where
        K: AsRef<str>,
        R: Rng,
    {
        let mut names = self.pool(keywords, industry, flow, rng)?;
        names.shuffle(rng);

        let limit = match flow {
            GenerationFlow::Primary => self.config.primary_limit,
            GenerationFlow::Extended => {
                let ideal = self.config.ideal_len;
                names.sort_by_key(|name| name.chars().count().abs_diff(ideal));
                self.config.extended_limit
            },
        };
        names.truncate(limit);

        Ok(names)
    }
}

fn normalize<K: AsRef<str>>(keywords: &[K]) -> Result<Vec<String>, NamingError> {
    let mut seen = FxHashSet::default();
    let normalized: Vec<String> = keywords
        .iter()
        .flat_map(|keyword| split_keywords(keyword.as_ref()))
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect();

    if normalized.is_empty() {
        return Err(NamingError::NoKeywords {
            message: "no keywords provided".into(),
            context: None,
        });
    }

    Ok(normalized)
}
