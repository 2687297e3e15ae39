use super::jitter::{JitterSource, UniformJitter};
use super::Recommender;
use crate::models::{CatalogItem, ItemId, ScoredItem};
use rand::rngs::StdRng;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Trimmed, non-empty genre tokens of one item. Matching is case-sensitive.
pub fn genre_set(genres: &[String]) -> HashSet<&str> {
    genres
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty())
        .collect()
}

/// Intersection size over the larger of the two set sizes, 0 when both are empty.
pub fn genre_overlap(selected: &HashSet<&str>, candidate: &HashSet<&str>) -> f64 {
    let denom = selected.len().max(candidate.len());
    if denom == 0 {
        return 0.0;
    }
    let overlap = selected.intersection(candidate).count();
    overlap as f64 / denom as f64
}

/// Ranks unselected catalog items by genre overlap with the selection.
#[derive(Debug, Clone)]
pub struct SimilarityRecommender<J = UniformJitter<StdRng>> {
    jitter: J,
}

impl SimilarityRecommender {
    pub fn new() -> Self {
        Self::with_jitter(UniformJitter::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_jitter(UniformJitter::seeded(seed))
    }
}

impl Default for SimilarityRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl<J: JitterSource> SimilarityRecommender<J> {
    pub fn with_jitter(jitter: J) -> Self {
        Self { jitter }
    }

    pub fn recommend(
        &mut self,
        catalog: &[CatalogItem],
        selected_ids: &HashSet<ItemId>,
        limit: usize,
    ) -> Vec<ScoredItem> {
        if limit == 0 {
            return Vec::new();
        }

        let resolved: HashSet<ItemId> = catalog
            .iter()
            .filter(|item| selected_ids.contains(&item.id))
            .map(|item| item.id)
            .collect();

        if resolved.is_empty() {
            debug!(
                "No selected ids resolved against a catalog of {} items",
                catalog.len()
            );
            return Vec::new();
        }

        let selected_genres: HashSet<&str> = catalog
            .iter()
            .filter(|item| resolved.contains(&item.id))
            .flat_map(|item| genre_set(&item.genres))
            .collect();

        let mut scored: Vec<ScoredItem> = catalog
            .iter()
            .filter(|item| !resolved.contains(&item.id))
            .map(|item| {
                let raw_score = genre_overlap(&selected_genres, &genre_set(&item.genres));
                ScoredItem::new(item.clone(), raw_score, self.jitter.next_jitter())
            })
            .collect();

        debug!(
            "Scored {} candidates against {} selected items ({} genres)",
            scored.len(),
            resolved.len(),
            selected_genres.len()
        );

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(limit);
        scored
    }
}

impl<J: JitterSource> Recommender for SimilarityRecommender<J> {
    fn recommend(
        &mut self,
        catalog: &[CatalogItem],
        selected_ids: &HashSet<ItemId>,
        limit: usize,
    ) -> Vec<ScoredItem> {
        SimilarityRecommender::recommend(self, catalog, selected_ids, limit)
    }
}
