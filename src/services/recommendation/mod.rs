use crate::algorithms::{Recommender, SimilarityRecommender, UniformJitter};
use crate::config::RecommendationConfig;
use crate::models::*;
use crate::services::catalog::Catalog;
use crate::utils::validation::clamp_limit;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tracing::info;

/// Client-side fallback used when no server-computed result is available.
///
/// Every algorithm label is answered with the genre-overlap ranking.
pub struct RecommendationService<R = SimilarityRecommender> {
    recommender: R,
    config: RecommendationConfig,
}

impl RecommendationService {
    pub fn new(config: RecommendationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let jitter = UniformJitter::new(rng, config.jitter_max);
        Self::with_recommender(SimilarityRecommender::with_jitter(jitter), config)
    }
}

impl<R: Recommender> RecommendationService<R> {
    pub fn with_recommender(recommender: R, config: RecommendationConfig) -> Self {
        Self {
            recommender,
            config,
        }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    pub fn get_recommendations(
        &mut self,
        catalog: &Catalog,
        request: &RecommendationRequest,
    ) -> RecommendationResponse {
        let selected_ids: HashSet<ItemId> = request.selected.iter().copied().collect();
        let limit = clamp_limit(request.num_recommendations, self.config.max_limit);

        let recommendations = self
            .recommender
            .recommend(catalog.items(), &selected_ids, limit);

        let mut selected: Vec<ItemId> = selected_ids
            .into_iter()
            .filter(|id| catalog.contains(*id))
            .collect();
        selected.sort_unstable();

        info!(
            "Generated {} {} recommendations from {} selected items",
            recommendations.len(),
            request.algorithm,
            selected.len()
        );

        RecommendationResponse {
            algorithm: request.algorithm,
            selected,
            recommendations,
            generated_at: Utc::now(),
        }
    }
}
