//! Minimal client for the TMDB v3 API.
//!
//! Only the pieces needed to run a multi search are implemented: client
//! construction from a static API key and the `search/multi` endpoint.

mod types;

use reqwest::StatusCode;
use tracing::debug;

pub use types::{MovieResult, MultiSearchResponse, MultiSearchResult, OtherResult, TvResult};

use types::ApiErrorBody;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("TMDB API key is empty")]
    MissingApiKey,
    #[error("TMDB request failed")]
    Http(#[from] reqwest::Error),
    #[error("TMDB returned {status}: {message}")]
    Api { status: StatusCode, message: String },
    #[error("failed to decode TMDB response")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    /// Build a client for the public TMDB endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search movies, TV shows and people in a single request.
    ///
    /// Only the first page is fetched and no optional parameters are sent.
    pub async fn search_multi(&self, query: &str) -> Result<MultiSearchResponse, Error> {
        let url = format!("{}/search/multi", self.base_url);
        debug!(url = %url, query, "TMDB multi search");

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("query", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_slice(&body).map_err(Error::Decode)
    }
}

fn api_error(status: StatusCode, body: &[u8]) -> Error {
    let message = match serde_json::from_slice::<ApiErrorBody>(body) {
        Ok(envelope) if !envelope.status_message.is_empty() => {
            debug!(
                status_code = envelope.status_code,
                "TMDB returned an error envelope"
            );
            envelope.status_message
        }
        _ => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };
    Error::Api { status, message }
}
