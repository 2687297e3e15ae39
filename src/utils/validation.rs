use crate::models::*;
use anyhow::{anyhow, Result};

pub const MAX_TITLE_LENGTH: usize = 300;
pub const MAX_GENRE_LENGTH: usize = 100;
pub const MIN_YEAR: i32 = 1888;
pub const MAX_YEAR: i32 = 2100;

pub fn validate_catalog_item(item: &CatalogItem) -> Result<()> {
    if item.title.trim().is_empty() {
        return Err(anyhow!("Item {} has an empty title", item.id));
    }

    if item.title.chars().count() > MAX_TITLE_LENGTH {
        return Err(anyhow!(
            "Item {} title too long (max {} characters)",
            item.id,
            MAX_TITLE_LENGTH
        ));
    }

    if item.genres.is_empty() {
        return Err(anyhow!("Item {} has no genres", item.id));
    }

    for genre in &item.genres {
        if genre.trim().is_empty() {
            return Err(anyhow!("Item {} has an empty genre token", item.id));
        }
        if genre.chars().count() > MAX_GENRE_LENGTH {
            return Err(anyhow!(
                "Item {} genre too long (max {} characters)",
                item.id,
                MAX_GENRE_LENGTH
            ));
        }
    }

    if let Some(year) = item.year {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(anyhow!(
                "Item {} year {} outside {}..={}",
                item.id,
                year,
                MIN_YEAR,
                MAX_YEAR
            ));
        }
    }

    Ok(())
}

/// Clamps a requested result count to the host's configured ceiling.
pub fn clamp_limit(requested: usize, max_limit: usize) -> usize {
    if requested > max_limit {
        tracing::warn!(
            "Requested {} recommendations, clamping to {}",
            requested,
            max_limit
        );
        max_limit
    } else {
        requested
    }
}

pub fn sanitize_string(input: &str, max_length: usize) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .take(max_length)
        .collect()
}
