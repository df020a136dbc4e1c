use serde::Deserialize;
use thiserror::Error;

pub mod fetcher;

pub use fetcher::SuggestionFetcher;

/// One entry of the remote catalog, taken verbatim from the service.
/// `name` is the display label, `value` the substitution text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub value: String,
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("suggestion service returned HTTP {0}")]
    Status(u16),

    #[error("malformed catalog response: {0}")]
    Contract(String),
}

/// Case-insensitive substring match of the query against each entry's name.
/// The service does no filtering of its own; this is the only ranking there is.
pub fn filter_catalog(catalog: &[Suggestion], query: &str) -> Vec<Suggestion> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
