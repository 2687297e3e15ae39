/// Failures while building a catalog from an external listing.
///
/// None of these reach the recommender: the host either falls back to the
/// built-in sample or reports the error and stops.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog listing contained no usable items")]
    Empty,
}

pub type CatalogResult<T> = Result<T, CatalogError>;
