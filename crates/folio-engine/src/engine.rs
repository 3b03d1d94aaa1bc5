//! Query orchestration: validate, normalize, dispatch to one strategy,
//! truncate and rank.

use tracing::{debug, info};

use folio_core::config::defaults;
use folio_core::errors::{ConfigError, RecommendError, RecommendResult};
use folio_core::models::{fold, Catalog, CatalogRecord, Corpus, RatingRecord};
use folio_core::{FolioConfig, RecommendConfig, Strategy};

use crate::collaborative::{association, correlation, AssociationOutcome, RuleThresholds};
use crate::content;
use crate::neighborhood::Neighborhood;
use crate::recommend_span;
use crate::recommendation::{ranked, Recommendation};

/// One recommendation query: the seed, the strategy, and its tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub seed_title: String,
    pub strategy: Strategy,
    pub top_n: usize,
    pub min_ratings: usize,
    pub min_support: f64,
    pub min_lift: f64,
}

impl RecommendRequest {
    /// A request carrying the compiled defaults.
    pub fn new(seed_title: impl Into<String>, strategy: Strategy) -> Self {
        Self::from_config(seed_title, strategy, &RecommendConfig::default())
    }

    /// A request carrying the effective values of `config`.
    pub fn from_config(
        seed_title: impl Into<String>,
        strategy: Strategy,
        config: &RecommendConfig,
    ) -> Self {
        Self {
            seed_title: seed_title.into(),
            strategy,
            top_n: config.effective_top_n(),
            min_ratings: config.effective_min_ratings(),
            min_support: config.effective_min_support(),
            min_lift: config.effective_min_lift(),
        }
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_min_ratings(mut self, min_ratings: usize) -> Self {
        self.min_ratings = min_ratings;
        self
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.min_lift = min_lift;
        self
    }

    /// Check the tunables against the same rules as the config file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seed_title.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "seed_title".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        FolioConfig::validate(&FolioConfig {
            recommend: RecommendConfig {
                top_n: Some(self.top_n),
                min_ratings: Some(self.min_ratings),
                min_support: Some(self.min_support),
                min_lift: Some(self.min_lift),
            },
        })
    }

    fn thresholds(&self) -> RuleThresholds {
        RuleThresholds {
            min_support: self.min_support,
            min_lift: self.min_lift,
        }
    }
}

/// Runs recommendation queries. Holds only configuration; every call
/// normalizes its own snapshot of the records.
#[derive(Debug, Clone, Default)]
pub struct RecommendEngine {
    config: FolioConfig,
}

impl RecommendEngine {
    pub fn new(config: FolioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    /// A request for `seed_title` carrying this engine's configured tunables.
    pub fn request(&self, seed_title: impl Into<String>, strategy: Strategy) -> RecommendRequest {
        RecommendRequest::from_config(seed_title, strategy, &self.config.recommend)
    }

    /// Rank up to `request.top_n` titles for the seed with the requested
    /// strategy.
    pub fn recommend(
        &self,
        ratings: &[RatingRecord],
        catalog: &[CatalogRecord],
        request: &RecommendRequest,
    ) -> RecommendResult<Vec<Recommendation>> {
        let _span = recommend_span!(request.seed_title, request.strategy).entered();
        request.validate()?;

        let catalog = Catalog::from_records(catalog)?;
        let recommendations = match request.strategy {
            Strategy::Correlation => {
                let corpus = rated_corpus(ratings, &catalog, &request.seed_title)?;
                let neighborhood = Neighborhood::build(&corpus, &request.seed_title, request.min_ratings)?;
                ranked(correlation::recommend(&neighborhood), request.top_n)
            }
            Strategy::Association => {
                let corpus = rated_corpus(ratings, &catalog, &request.seed_title)?;
                let neighborhood = Neighborhood::build(&corpus, &request.seed_title, request.min_ratings)?;
                let outcome = association::recommend(&neighborhood, request.thresholds());
                ranked(outcome.titles, request.top_n)
            }
            Strategy::Content => {
                if !catalog.contains_title(&request.seed_title) {
                    return Err(seed_not_found(&request.seed_title, "catalog"));
                }
                ranked(content::recommend(&catalog, &request.seed_title)?, request.top_n)
            }
        };

        info!(
            strategy = %request.strategy,
            returned = recommendations.len(),
            top_n = request.top_n,
            "recommendation complete"
        );
        Ok(recommendations)
    }

    /// Every rule behind an association query, with the untruncated title
    /// ranking. The request's strategy is ignored.
    pub fn association_rules(
        &self,
        ratings: &[RatingRecord],
        catalog: &[CatalogRecord],
        request: &RecommendRequest,
    ) -> RecommendResult<AssociationOutcome> {
        let _span = recommend_span!(request.seed_title, Strategy::Association).entered();
        request.validate()?;

        let catalog = Catalog::from_records(catalog)?;
        let corpus = rated_corpus(ratings, &catalog, &request.seed_title)?;
        let neighborhood = Neighborhood::build(&corpus, &request.seed_title, request.min_ratings)?;
        Ok(association::recommend(&neighborhood, request.thresholds()))
    }
}

/// Join ratings with the catalog and make sure someone rated the seed.
fn rated_corpus(
    ratings: &[RatingRecord],
    catalog: &Catalog,
    seed_title: &str,
) -> RecommendResult<Corpus> {
    let corpus = Corpus::build(ratings, catalog)?;
    if !corpus.contains_title(&fold(seed_title)) {
        return Err(seed_not_found(seed_title, "rated corpus"));
    }
    debug!(rows = corpus.len(), "seed present in rated corpus");
    Ok(corpus)
}

fn seed_not_found(seed_title: &str, scope: &'static str) -> RecommendError {
    RecommendError::SeedNotFound {
        title: fold(seed_title),
        scope,
    }
}

/// Flat entry point: parse the strategy tag and run one query with the
/// default minimum support.
pub fn recommend(
    ratings: &[RatingRecord],
    catalog: &[CatalogRecord],
    seed_title: &str,
    strategy: &str,
    top_n: usize,
    min_lift: f64,
    min_ratings: usize,
) -> RecommendResult<Vec<Recommendation>> {
    let strategy: Strategy = strategy.parse()?;
    let request = RecommendRequest::new(seed_title, strategy)
        .with_top_n(top_n)
        .with_min_lift(min_lift)
        .with_min_ratings(min_ratings)
        .with_min_support(defaults::DEFAULT_MIN_SUPPORT);
    RecommendEngine::default().recommend(ratings, catalog, &request)
}
