mod sample;

pub use sample::SAMPLE_MOVIES;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CatalogItem, ItemId};
use crate::utils::validation::{sanitize_string, validate_catalog_item, MAX_TITLE_LENGTH};
use crate::utils::{extract_year_from_title, genre_distribution, normalize_genres, parse_genres};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Read-only set of catalog items, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    index: HashMap<ItemId, usize>,
}

/// One record of the remote listing, before validation.
#[derive(Debug, Deserialize)]
struct CatalogRecord {
    #[serde(alias = "movieId")]
    id: ItemId,
    title: String,
    genres: GenreField,
    #[serde(default)]
    year: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenreField {
    Delimited(String),
    List(Vec<String>),
}

impl CatalogRecord {
    fn into_item(self) -> CatalogItem {
        let genres = match self.genres {
            GenreField::Delimited(raw) => parse_genres(&raw),
            GenreField::List(list) => normalize_genres(list),
        };
        let title = sanitize_string(self.title.trim(), MAX_TITLE_LENGTH);
        let year = self
            .year
            .as_ref()
            .and_then(year_from_value)
            .or_else(|| extract_year_from_title(&title));

        CatalogItem {
            id: self.id,
            title,
            genres,
            year,
        }
    }
}

fn year_from_value(value: &serde_json::Value) -> Option<i32> {
    if let Some(year) = value.as_i64() {
        return i32::try_from(year).ok();
    }
    // Dataframe exports sometimes write integral years as floats.
    value
        .as_f64()
        .filter(|year| year.fract() == 0.0)
        .and_then(|year| i32::try_from(year as i64).ok())
}

impl Catalog {
    /// Keeps valid items in order; invalid items and repeated ids are dropped
    /// with a warning, the first occurrence of an id wins.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut catalog = Self::default();

        for item in items {
            if let Err(e) = validate_catalog_item(&item) {
                warn!("Skipping catalog item: {}", e);
                continue;
            }
            if catalog.index.contains_key(&item.id) {
                warn!("Skipping duplicate catalog id {}", item.id);
                continue;
            }
            catalog.index.insert(item.id, catalog.items.len());
            catalog.items.push(item);
        }

        catalog
    }

    /// The built-in 30-movie fallback listing.
    pub fn sample() -> Self {
        let items = SAMPLE_MOVIES
            .iter()
            .map(|&(id, title, genres, year)| {
                CatalogItem::new(id, title, parse_genres(genres)).with_year(year)
            })
            .collect();
        Self::new(items)
    }

    /// Parses a JSON array of movie records.
    ///
    /// Records that are well-formed JSON but lack a required field, or fail
    /// validation, are excluded rather than rejecting the whole listing.
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let total = records.len();

        let items: Vec<CatalogItem> = records
            .into_iter()
            .enumerate()
            .filter_map(|(position, value)| {
                match serde_json::from_value::<CatalogRecord>(value) {
                    Ok(record) => Some(record.into_item()),
                    Err(e) => {
                        warn!("Skipping malformed catalog record {}: {}", position, e);
                        None
                    }
                }
            })
            .collect();

        let catalog = Self::new(items);
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }

        info!("Loaded {} of {} catalog records", catalog.len(), total);
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads `source` when given, otherwise the sample. A failed load falls
    /// back to the sample unless `fallback_to_sample` is off.
    pub fn load(source: Option<&Path>, fallback_to_sample: bool) -> CatalogResult<Self> {
        let Some(path) = source else {
            info!("No catalog source configured, using the built-in sample");
            return Ok(Self::sample());
        };

        match Self::from_path(path) {
            Ok(catalog) => Ok(catalog),
            Err(e) if fallback_to_sample => {
                warn!(
                    "Failed to load catalog from {}: {}. Falling back to the built-in sample",
                    path.display(),
                    e
                );
                Ok(Self::sample())
            }
            Err(e) => Err(e),
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn genre_distribution(&self) -> Vec<(String, usize)> {
        genre_distribution(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 30);

        let godfather = catalog.get(2).unwrap();
        assert_eq!(godfather.title, "The Godfather");
        assert_eq!(godfather.genres, vec!["Crime".to_string(), "Drama".to_string()]);
        assert_eq!(godfather.year, Some(1972));
        assert!(catalog.get(31).is_none());
    }

    #[test]
    fn test_from_json_accepts_both_listing_shapes() {
        let json = r#"[
            {"movieId": 1, "title": "Heat (1995)", "genres": "Action| Crime |Thriller"},
            {"id": 2, "title": "Up", "genres": ["Animation", "Comedy"], "year": 2009.0}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        let heat = catalog.get(1).unwrap();
        assert_eq!(heat.genres, vec!["Action", "Crime", "Thriller"]);
        assert_eq!(heat.year, Some(1995));
        assert_eq!(catalog.get(2).unwrap().year, Some(2009));
    }

    #[test]
    fn test_from_json_excludes_partial_records() {
        let json = r#"[
            {"movieId": 1, "title": "Drama only", "genres": "Drama"},
            {"movieId": 2, "genres": "Comedy"},
            {"movieId": 3, "title": "No genres", "genres": "||"},
            {"movieId": "four", "title": "Bad id", "genres": "Drama"},
            {"movieId": 1, "title": "Duplicate", "genres": "Horror"},
            42
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().title, "Drama only");
    }

    #[test]
    fn test_from_json_keeps_multibyte_titles() {
        let title = "映".repeat(120);
        let json = serde_json::json!([
            {"movieId": 1, "title": title, "genres": "Drama"}
        ])
        .to_string();
        let catalog = Catalog::from_json(&json).unwrap();

        assert!(catalog.contains(1));
        assert_eq!(catalog.get(1).unwrap().title.chars().count(), 120);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Catalog::from_json(r#"{"movies": []}"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_json(r#"[{"movieId": 1}]"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_load_falls_back_to_sample() {
        let missing = Path::new("/nonexistent/movierec/catalog.json");

        let catalog = Catalog::load(Some(missing), true).unwrap();
        assert_eq!(catalog.len(), SAMPLE_MOVIES.len());

        assert!(matches!(
            Catalog::load(Some(missing), false),
            Err(CatalogError::Io(_))
        ));
        assert_eq!(Catalog::load(None, false).unwrap().len(), 30);
    }

    #[test]
    fn test_genre_distribution_of_sample() {
        let distribution = Catalog::sample().genre_distribution();
        assert_eq!(distribution[0], ("Adventure".to_string(), 14));
        assert_eq!(distribution[1], ("Drama".to_string(), 14));
    }
}
