use crate::models::{CatalogItem, ScoredItem};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetrics {
    pub genre_diversity: f64,
    pub catalog_coverage: f64,
    pub mean_raw_score: f64,
    pub matched_ratio: f64,
}

/// Summaries of a result list relative to the catalog it was drawn from.
#[derive(Debug, Clone)]
pub struct MetricsCalculator<'a> {
    catalog: &'a [CatalogItem],
}

impl<'a> MetricsCalculator<'a> {
    pub fn new(catalog: &'a [CatalogItem]) -> Self {
        Self { catalog }
    }

    /// Distinct genres among the results over distinct genres in the catalog.
    pub fn calculate_genre_diversity(&self, recommended: &[ScoredItem]) -> f64 {
        if recommended.is_empty() {
            return 0.0;
        }

        let catalog_genres: HashSet<&str> = self
            .catalog
            .iter()
            .flat_map(|item| item.genres.iter().map(|g| g.as_str()))
            .collect();
        if catalog_genres.is_empty() {
            return 0.0;
        }

        let recommended_genres: HashSet<&str> = recommended
            .iter()
            .flat_map(|r| r.item.genres.iter().map(|g| g.as_str()))
            .collect();

        recommended_genres.len() as f64 / catalog_genres.len() as f64
    }

    pub fn calculate_coverage(&self, recommended: &[ScoredItem]) -> f64 {
        if self.catalog.is_empty() {
            return 0.0;
        }

        let recommended_ids: HashSet<_> = recommended.iter().map(|r| r.item.id).collect();
        let covered = self
            .catalog
            .iter()
            .filter(|item| recommended_ids.contains(&item.id))
            .count();

        covered as f64 / self.catalog.len() as f64
    }

    pub fn calculate_mean_raw_score(&self, recommended: &[ScoredItem]) -> f64 {
        if recommended.is_empty() {
            return 0.0;
        }
        recommended.iter().map(|r| r.raw_score).sum::<f64>() / recommended.len() as f64
    }

    /// Share of results that overlap the selection on at least one genre.
    pub fn calculate_matched_ratio(&self, recommended: &[ScoredItem]) -> f64 {
        if recommended.is_empty() {
            return 0.0;
        }
        let matched = recommended.iter().filter(|r| r.raw_score > 0.0).count();
        matched as f64 / recommended.len() as f64
    }

    pub fn calculate_all_metrics(&self, recommended: &[ScoredItem]) -> RecommendationMetrics {
        RecommendationMetrics {
            genre_diversity: self.calculate_genre_diversity(recommended),
            catalog_coverage: self.calculate_coverage(recommended),
            mean_raw_score: self.calculate_mean_raw_score(recommended),
            matched_ratio: self.calculate_matched_ratio(recommended),
        }
    }
}
