use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::StatusCode;
use tracing::debug;

/// Thumbnail size that gets inlined into the output.
pub const SMALL_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w154";
/// Full-size poster size that is only linked.
pub const LARGE_POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch image: {0}")]
    BadStatus(StatusCode),
    #[error("image request failed")]
    Transport(#[from] reqwest::Error),
}

/// Downloads an image and returns it as standard (padded) base64.
#[async_trait]
pub trait PosterFetcher: Send + Sync {
    async fn fetch_poster_base64(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PosterFetcher`] backed by a plain HTTP GET.
///
/// No retries and no caching; every call is one request.
#[derive(Debug, Clone)]
pub struct HttpPosterFetcher {
    client: reqwest::Client,
}

impl HttpPosterFetcher {
    /// `timeout` of `None` leaves the HTTP client default in place.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PosterFetcher for HttpPosterFetcher {
    async fn fetch_poster_base64(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus(status));
        }
        let bytes = response.bytes().await?;
        debug!(url, bytes = bytes.len(), "fetched poster");
        Ok(STANDARD.encode(&bytes))
    }
}
