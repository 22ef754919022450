//! OMDb (Open Movie Database) API client.
//!
//! Every request carries the configured access key as `apikey`. Searches
//! use the `s` parameter, lookups by identifier use `i`.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::OmdbConfig;
use crate::movie::Movie;
use crate::{Error, Result};

/// Result of a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response carried a results list.
    Found {
        movies: Vec<Movie>,
        /// Total hits across all pages, when the API reports it.
        total: Option<usize>,
    },
    /// The response had no results list ("Movie not found!", too many
    /// results, an empty query, or an unexpected shape).
    NoResults { reason: Option<String> },
}

/// Something that can search movies by title.
pub trait MovieSearch: Send {
    fn search(&self, query: &str) -> Result<SearchOutcome>;
}

/// Raw search payload. Every field is optional; only `Search` matters.
#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(rename = "Search")]
    search: Option<Vec<Movie>>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

/// Interpret a search response body.
///
/// Anything that is valid JSON but lacks a results list is
/// [`SearchOutcome::NoResults`]; only unparseable text is an error.
pub fn parse_search_body(body: &str) -> Result<SearchOutcome> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::Serialization(format!("Failed to parse search response: {e}")))?;

    let parsed = match serde_json::from_value::<SearchBody>(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("Search response has unexpected shape: {}", e);
            return Ok(SearchOutcome::NoResults { reason: None });
        }
    };

    match parsed.search {
        Some(movies) => Ok(SearchOutcome::Found {
            total: parsed.total_results.and_then(|t| t.trim().parse().ok()),
            movies,
        }),
        None => Ok(SearchOutcome::NoResults {
            reason: parsed.error,
        }),
    }
}

/// Interpret a lookup-by-identifier response body.
pub fn parse_lookup_body(body: &str) -> Result<Option<Movie>> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::Serialization(format!("Failed to parse lookup response: {e}")))?;

    if value.get("Response").and_then(|r| r.as_str()) == Some("False") {
        debug!("Lookup returned no title: {:?}", value.get("Error"));
        return Ok(None);
    }

    let movie = serde_json::from_value(value)
        .map_err(|e| Error::Serialization(format!("Unexpected lookup response: {e}")))?;
    Ok(Some(movie))
}

/// OMDb API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: &OmdbConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::NotConfigured(format!(
                "OMDb API key is required (set omdb.api_key or {})",
                crate::config::API_KEY_ENV
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.trim().to_string(),
        })
    }

    /// Search for titles. The query is sent exactly as given.
    pub fn search_titles(&self, query: &str) -> Result<SearchOutcome> {
        debug!("OMDb search: query='{}'", query);
        let body = self.get(&[("s", query)])?;
        parse_search_body(&body)
    }

    /// Fetch a single title by its IMDb identifier.
    pub fn lookup(&self, imdb_id: &str) -> Result<Option<Movie>> {
        debug!("OMDb lookup: id={}", imdb_id);
        let body = self.get(&[("i", imdb_id)])?;
        parse_lookup_body(&body)
    }

    fn get(&self, params: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .query(&[("apikey", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if status == 401 {
            return Err(Error::NotConfigured("Invalid OMDb API key".to_string()));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text()?)
    }
}

impl MovieSearch for OmdbClient {
    fn search(&self, query: &str) -> Result<SearchOutcome> {
        self.search_titles(query)
    }
}
