pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use models::*;

use services::catalog::Catalog;
use services::recommendation::RecommendationService;
use services::selection::SelectionStore;
use utils::metrics::{MetricsCalculator, RecommendationMetrics};

/// Host-owned state for one browsing session.
///
/// The catalog is fixed once loaded; the selection is mutated through
/// `&mut self`, so recommendation never observes a half-applied change.
pub struct Session {
    pub config: Config,
    catalog: Catalog,
    selection: SelectionStore,
    recommendation_service: RecommendationService,
}

impl Session {
    pub fn new(config: Config) -> CatalogResult<Self> {
        let catalog = Catalog::load(
            config.catalog.source.as_deref(),
            config.catalog.fallback_to_sample,
        )?;
        Ok(Self::with_catalog(config, catalog))
    }

    pub fn with_catalog(config: Config, catalog: Catalog) -> Self {
        let recommendation_service = RecommendationService::new(config.recommendation.clone());
        Self {
            config,
            catalog,
            selection: SelectionStore::new(),
            recommendation_service,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn toggle(&mut self, id: ItemId) -> bool {
        self.selection.toggle(id)
    }

    pub fn remove(&mut self, id: ItemId) {
        self.selection.remove(id)
    }

    /// `limit` falls back to the configured default when not given.
    pub fn recommend(&mut self, algorithm: Algorithm, limit: Option<usize>) -> RecommendationResponse {
        let mut selected: Vec<ItemId> = self.selection.as_set().iter().copied().collect();
        selected.sort_unstable();

        let request = RecommendationRequest::new(
            selected,
            limit.unwrap_or(self.config.recommendation.default_limit),
        )
        .with_algorithm(algorithm);

        self.recommendation_service
            .get_recommendations(&self.catalog, &request)
    }

    pub fn metrics(&self, response: &RecommendationResponse) -> RecommendationMetrics {
        MetricsCalculator::new(self.catalog.items()).calculate_all_metrics(&response.recommendations)
    }
}

pub fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
