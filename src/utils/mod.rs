use crate::models::CatalogItem;
use std::collections::{HashMap, HashSet};

pub mod metrics;
pub mod validation;

pub const GENRE_SEPARATOR: char = '|';

/// Splits a pipe-delimited genre field into trimmed tokens, dropping empty
/// tokens and repeats while keeping first-seen order.
pub fn parse_genres(raw: &str) -> Vec<String> {
    normalize_genres(raw.split(GENRE_SEPARATOR))
}

pub fn normalize_genres<I, S>(genres: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for genre in genres {
        let genre = genre.as_ref().trim();
        if genre.is_empty() || !seen.insert(genre.to_string()) {
            continue;
        }
        result.push(genre.to_string());
    }

    result
}

pub fn format_title(title: &str, max_length: usize) -> String {
    let title = title.trim();
    if title.is_empty() {
        return "Unknown Title".to_string();
    }

    if title.chars().count() <= max_length {
        return title.to_string();
    }

    let keep = max_length.saturating_sub(3);
    let mut truncated: String = title.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Year from a trailing `"Title (YYYY)"` suffix, within 1900..=2030.
pub fn extract_year_from_title(title: &str) -> Option<i32> {
    let open = title.rfind('(')?;
    let rest = &title[open + 1..];
    let close = rest.find(')')?;
    let year: i32 = rest[..close].trim().parse().ok()?;

    (1900..=2030).contains(&year).then_some(year)
}

/// Genre counts across the catalog, most common first, ties broken by name.
pub fn genre_distribution(items: &[CatalogItem]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in items {
        for genre in &item.genres {
            let genre = genre.trim();
            if !genre.is_empty() {
                *counts.entry(genre).or_insert(0) += 1;
            }
        }
    }

    let mut distribution: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(genre, count)| (genre.to_string(), count))
        .collect();
    distribution.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    distribution
}

pub fn similarity_explanation(first: &[String], second: &[String]) -> String {
    if first.is_empty() || second.is_empty() {
        return "Limited genre information available".to_string();
    }

    let other: HashSet<&str> = second.iter().map(|g| g.trim()).collect();
    let common: Vec<&str> = first
        .iter()
        .map(|g| g.trim())
        .filter(|g| !g.is_empty() && other.contains(g))
        .collect();

    if common.is_empty() {
        "Different genres - recommended for diversity".to_string()
    } else {
        format!("Similar genres: {}", common.join(", "))
    }
}
