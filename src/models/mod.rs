use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ItemId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub genres: Vec<String>,
    pub year: Option<i32>,
}

/// A catalog entry paired with its similarity to the current selection.
///
/// `raw_score` is the plain genre-overlap ratio; `score` adds the jitter term
/// and is what results are ordered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: f64,
    pub raw_score: f64,
}

/// Label chosen in the picker's algorithm selector.
///
/// Only genre overlap is ever computed; the variant is carried through to the
/// response and used for display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Content,
    Collaborative,
    Hybrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub selected: Vec<ItemId>,
    pub algorithm: Algorithm,
    pub num_recommendations: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub algorithm: Algorithm,
    pub selected: Vec<ItemId>,
    pub recommendations: Vec<ScoredItem>,
    pub generated_at: DateTime<Utc>,
}

impl CatalogItem {
    pub fn new(id: ItemId, title: impl Into<String>, genres: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genres,
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Genres joined back into the pipe-delimited listing form.
    pub fn genre_label(&self) -> String {
        self.genres.join("|")
    }
}

impl ScoredItem {
    pub fn new(item: CatalogItem, raw_score: f64, jitter: f64) -> Self {
        Self {
            item,
            score: raw_score + jitter,
            raw_score,
        }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Content,
        Algorithm::Collaborative,
        Algorithm::Hybrid,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Content => "Content-Based",
            Algorithm::Collaborative => "Collaborative Filtering",
            Algorithm::Hybrid => "Hybrid Approach",
        }
    }

    pub fn description(&self) -> &'static [&'static str] {
        match self {
            Algorithm::Content => &[
                "Analyzes movie genres and features",
                "Uses TF-IDF vectorization",
                "Calculates cosine similarity",
                "Recommends similar movies",
            ],
            Algorithm::Collaborative => &[
                "Uses user rating patterns",
                "Finds similar users/items",
                "K-Nearest Neighbors algorithm",
                "Community-based recommendations",
            ],
            Algorithm::Hybrid => &[
                "Combines both methods",
                "Weighted recommendation scores",
                "More robust predictions",
                "Best of both worlds",
            ],
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Algorithm::Content => "content",
            Algorithm::Collaborative => "collaborative",
            Algorithm::Hybrid => "hybrid",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "content" => Ok(Algorithm::Content),
            "collaborative" => Ok(Algorithm::Collaborative),
            "hybrid" => Ok(Algorithm::Hybrid),
            other => Err(anyhow::anyhow!("Invalid algorithm: {}", other)),
        }
    }
}

impl RecommendationRequest {
    pub fn new(selected: Vec<ItemId>, num_recommendations: usize) -> Self {
        Self {
            selected,
            algorithm: Algorithm::default(),
            num_recommendations,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_parse_and_display() {
        for algorithm in Algorithm::ALL {
            let parsed: Algorithm = algorithm.to_string().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert_eq!(" Hybrid ".parse::<Algorithm>().unwrap(), Algorithm::Hybrid);
        assert!("popularity".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_scored_item_serializes_flat() {
        let item = CatalogItem::new(2, "The Godfather", vec!["Crime".into(), "Drama".into()])
            .with_year(1972);
        let scored = ScoredItem::new(item, 0.5, 0.05);
        let value = serde_json::to_value(&scored).unwrap();

        assert_eq!(value["id"], 2);
        assert_eq!(value["title"], "The Godfather");
        assert_eq!(value["raw_score"], 0.5);
        assert!((scored.score - 0.55).abs() < 1e-12);
    }
}
