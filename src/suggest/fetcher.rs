use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use super::{filter_catalog, FetchError, Suggestion};

pub const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:7878/catalog";
pub const CATALOG_URL_ENV: &str = "CHIPCALC_CATALOG_URL";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

struct FetchResponse {
    query: String,
    result: Result<Vec<Suggestion>, FetchError>,
}

/// Asynchronous suggestion lookup with a per-session cache.
///
/// Each request spawns a worker thread that fetches the whole catalog
/// (the service takes no query parameter), filters it client-side and sends
/// the tagged result back over a channel. The UI thread drains the channel
/// via `poll`; a response is applied only while its query tag still matches
/// the active query, so a stale response can never overwrite the suggestions
/// of a newer one.
pub struct SuggestionFetcher {
    catalog_url: String,
    cache: HashMap<String, Vec<Suggestion>>,
    active_query: String,
    tx: Sender<FetchResponse>,
    rx: Receiver<FetchResponse>,
}

impl SuggestionFetcher {
    pub fn new(catalog_url: String) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            catalog_url,
            cache: HashMap::new(),
            active_query: String::new(),
            tx,
            rx,
        }
    }

    pub fn from_env() -> Self {
        let url = std::env::var(CATALOG_URL_ENV).unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());
        Self::new(url)
    }

    /// Issue a lookup for the given query text.
    ///
    /// Returns `Some` when the answer is available synchronously (empty query
    /// or cache hit); otherwise a worker is started and the result arrives
    /// through `poll`.
    pub fn request(&mut self, query: &str) -> Option<Vec<Suggestion>> {
        self.active_query = query.to_string();

        if query.trim().is_empty() {
            return Some(Vec::new());
        }
        if let Some(hit) = self.cache.get(query) {
            return Some(hit.clone());
        }

        let tx = self.tx.clone();
        let url = self.catalog_url.clone();
        let query = query.to_string();
        thread::spawn(move || {
            let result = fetch_catalog(&url).map(|catalog| filter_catalog(&catalog, &query));
            // The receiver only drops on shutdown; a send failure is fine then.
            let _ = tx.send(FetchResponse { query, result });
        });
        None
    }

    /// Drain finished lookups. Returns the suggestion list to display when a
    /// response for the active query arrived, `None` otherwise.
    pub fn poll(&mut self) -> Option<Vec<Suggestion>> {
        let mut update = None;
        while let Ok(response) = self.rx.try_recv() {
            if let Some(applied) = self.apply(response) {
                update = Some(applied);
            }
        }
        update
    }

    fn apply(&mut self, response: FetchResponse) -> Option<Vec<Suggestion>> {
        if response.query != self.active_query {
            log::debug!("discarding stale suggestion response for {:?}", response.query);
            return None;
        }
        match response.result {
            Ok(suggestions) => {
                self.cache.insert(response.query, suggestions.clone());
                Some(suggestions)
            }
            Err(err) => {
                // Surfaces to the user only as "no suggestions shown".
                log::warn!("suggestion fetch failed: {}", err);
                Some(Vec::new())
            }
        }
    }
}

fn fetch_catalog(url: &str) -> Result<Vec<Suggestion>, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    // Anything that is not an array of {name, value} objects is a contract
    // violation and counts as a failed fetch.
    response
        .json::<Vec<Suggestion>>()
        .map_err(|e| FetchError::Contract(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> Suggestion {
        Suggestion {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn response(query: &str, result: Result<Vec<Suggestion>, FetchError>) -> FetchResponse {
        FetchResponse {
            query: query.to_string(),
            result,
        }
    }

    #[test]
    fn test_empty_query_resolves_without_network() {
        let mut fetcher = SuggestionFetcher::new("http://invalid.test/catalog".to_string());
        assert_eq!(fetcher.request(""), Some(Vec::new()));
        assert_eq!(fetcher.request("   "), Some(Vec::new()));
    }

    #[test]
    fn test_matching_response_is_applied_and_cached() {
        let mut fetcher = SuggestionFetcher::new("http://invalid.test/catalog".to_string());
        fetcher.active_query = "ap".to_string();

        let applied = fetcher.apply(response("ap", Ok(vec![entry("Apple", "1")])));
        assert_eq!(applied, Some(vec![entry("Apple", "1")]));

        // Second lookup for the same text hits the cache synchronously.
        assert_eq!(fetcher.request("ap"), Some(vec![entry("Apple", "1")]));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut fetcher = SuggestionFetcher::new("http://invalid.test/catalog".to_string());
        fetcher.active_query = "ban".to_string();

        let applied = fetcher.apply(response("ap", Ok(vec![entry("Apple", "1")])));
        assert_eq!(applied, None);
        assert!(fetcher.cache.is_empty());
    }

    #[test]
    fn test_failed_fetch_resolves_to_empty_list() {
        let mut fetcher = SuggestionFetcher::new("http://invalid.test/catalog".to_string());
        fetcher.active_query = "ap".to_string();

        let applied = fetcher.apply(response("ap", Err(FetchError::Status(500))));
        assert_eq!(applied, Some(Vec::new()));
        // Failures are not cached, so the next request may retry.
        assert!(fetcher.cache.is_empty());
    }

    #[test]
    fn test_poll_returns_latest_applicable_response() {
        let mut fetcher = SuggestionFetcher::new("http://invalid.test/catalog".to_string());
        fetcher.active_query = "ap".to_string();
        fetcher
            .tx
            .send(response("old", Ok(vec![entry("Old", "0")])))
            .unwrap();
        fetcher
            .tx
            .send(response("ap", Ok(vec![entry("Apple", "1")])))
            .unwrap();

        assert_eq!(fetcher.poll(), Some(vec![entry("Apple", "1")]));
        assert_eq!(fetcher.poll(), None);
    }
}
