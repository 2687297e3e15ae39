pub mod jitter;
pub mod similarity;

pub use jitter::{FixedJitter, JitterSource, NoJitter, UniformJitter, JITTER_MAX};
pub use similarity::{genre_overlap, genre_set, SimilarityRecommender};

use crate::models::{CatalogItem, ItemId, ScoredItem};
use std::collections::HashSet;

/// Produces a ranked list of unselected catalog items for a selection.
///
/// Implementations never fail: ids missing from the catalog are ignored and
/// an empty selection or a zero limit yields an empty list.
pub trait Recommender {
    fn recommend(
        &mut self,
        catalog: &[CatalogItem],
        selected_ids: &HashSet<ItemId>,
        limit: usize,
    ) -> Vec<ScoredItem>;
}

impl<R: Recommender + ?Sized> Recommender for Box<R> {
    fn recommend(
        &mut self,
        catalog: &[CatalogItem],
        selected_ids: &HashSet<ItemId>,
        limit: usize,
    ) -> Vec<ScoredItem> {
        (**self).recommend(catalog, selected_ids, limit)
    }
}
