use serde::Serialize;
use tmdb_client::MultiSearchResult;
use tracing::debug;

use crate::poster::{LARGE_POSTER_BASE, PosterFetcher, SMALL_POSTER_BASE};

/// Flat record printed for every multi search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedResult {
    pub id: i64,
    #[serde(rename = "type")]
    pub media_type: String,
    pub full_title: String,
    pub original_title: String,
    pub release_date: String,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_poster_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_poster_link: Option<String>,
}

/// Turns upstream hits into [`NormalizedResult`]s, inlining thumbnails
/// through a [`PosterFetcher`].
pub struct ResultMapper<F> {
    fetcher: F,
    small_poster_base: String,
}

impl<F: PosterFetcher> ResultMapper<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            small_poster_base: SMALL_POSTER_BASE.to_string(),
        }
    }

    /// Fetch thumbnails from somewhere other than the TMDB image host.
    pub fn with_small_poster_base(mut self, base: impl Into<String>) -> Self {
        self.small_poster_base = base.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn normalize(&self, item: MultiSearchResult) -> NormalizedResult {
        let (small_poster_base64, large_poster_link) = match item.poster_path() {
            "" => (None, None),
            poster_path => (
                self.small_poster(poster_path).await,
                Some(format!("{LARGE_POSTER_BASE}{poster_path}")),
            ),
        };

        let id = item.id();
        let media_type = item.media_type().to_string();
        let overview = item.overview().to_string();
        let (full_title, original_title, release_date) = titles(item);

        NormalizedResult {
            id,
            media_type,
            full_title,
            original_title,
            release_date,
            overview,
            small_poster_base64,
            large_poster_link,
        }
    }

    /// Best-effort enrichment: this is the one place a fetch failure is
    /// dropped. The record loses its thumbnail and nothing else.
    async fn small_poster(&self, poster_path: &str) -> Option<String> {
        let url = format!("{}{poster_path}", self.small_poster_base);
        match self.fetcher.fetch_poster_base64(&url).await {
            Ok(encoded) => Some(encoded),
            Err(err) => {
                debug!(url = %url, error = %err, "skipping small poster");
                None
            }
        }
    }
}

/// `(full_title, original_title, release_date)` for a hit.
///
/// Unknown media types use the movie field names.
fn titles(item: MultiSearchResult) -> (String, String, String) {
    match item {
        MultiSearchResult::Movie(movie) => (movie.title, movie.original_title, movie.release_date),
        MultiSearchResult::Tv(tv) => (tv.name, tv.original_name, tv.first_air_date),
        MultiSearchResult::Other(other) => {
            (other.title, other.original_title, other.release_date)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tmdb_client::{MovieResult, OtherResult, TvResult};

    use super::*;
    use crate::poster::FetchError;

    /// Records requested URLs and answers every fetch the same way.
    struct StubFetcher {
        answer: Option<&'static str>,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn succeeding(encoded: &'static str) -> Self {
            Self {
                answer: Some(encoded),
                requested: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                answer: None,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PosterFetcher for StubFetcher {
        async fn fetch_poster_base64(&self, url: &str) -> Result<String, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.answer
                .map(str::to_string)
                .ok_or(FetchError::BadStatus(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }

    fn movie(poster_path: &str) -> MultiSearchResult {
        MultiSearchResult::Movie(MovieResult {
            id: 603,
            title: "The Matrix".into(),
            original_title: "The Matrix (orig)".into(),
            release_date: "1999-03-31".into(),
            overview: "A hacker learns the truth.".into(),
            poster_path: poster_path.into(),
        })
    }

    #[tokio::test]
    async fn movie_uses_title_fields() {
        let mapper = ResultMapper::new(StubFetcher::failing());
        let result = mapper.normalize(movie("")).await;

        assert_eq!(result.id, 603);
        assert_eq!(result.media_type, "movie");
        assert_eq!(result.full_title, "The Matrix");
        assert_eq!(result.original_title, "The Matrix (orig)");
        assert_eq!(result.release_date, "1999-03-31");
        assert_eq!(result.overview, "A hacker learns the truth.");
    }

    #[tokio::test]
    async fn tv_uses_name_fields() {
        let mapper = ResultMapper::new(StubFetcher::failing());
        let result = mapper
            .normalize(MultiSearchResult::Tv(TvResult {
                id: 1396,
                name: "Breaking Bad".into(),
                original_name: "Breaking Bad (orig)".into(),
                first_air_date: "2008-01-20".into(),
                overview: "A chemistry teacher...".into(),
                poster_path: String::new(),
            }))
            .await;

        assert_eq!(result.media_type, "tv");
        assert_eq!(result.full_title, "Breaking Bad");
        assert_eq!(result.original_title, "Breaking Bad (orig)");
        assert_eq!(result.release_date, "2008-01-20");
    }

    #[tokio::test]
    async fn other_keeps_discriminant_and_movie_fields() {
        let mapper = ResultMapper::new(StubFetcher::failing());
        let result = mapper
            .normalize(MultiSearchResult::Other(OtherResult {
                media_type: "collection".into(),
                id: 2344,
                title: "The Matrix Collection".into(),
                original_title: "The Matrix Collection".into(),
                release_date: String::new(),
                overview: String::new(),
                poster_path: String::new(),
            }))
            .await;

        assert_eq!(result.media_type, "collection");
        assert_eq!(result.full_title, "The Matrix Collection");
        assert_eq!(result.release_date, "");
    }

    #[tokio::test]
    async fn empty_poster_path_skips_fetch_and_both_fields() {
        let fetcher = StubFetcher::succeeding("unused");
        let mapper = ResultMapper::new(fetcher);
        let result = mapper.normalize(movie("")).await;

        assert_eq!(result.small_poster_base64, None);
        assert_eq!(result.large_poster_link, None);
        assert!(mapper.fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn fetch_failure_keeps_large_link() {
        let mapper = ResultMapper::new(StubFetcher::failing());
        let result = mapper.normalize(movie("/abc.jpg")).await;

        assert_eq!(result.small_poster_base64, None);
        assert_eq!(
            result.large_poster_link.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
    }

    #[tokio::test]
    async fn fetch_success_inlines_thumbnail_from_w154() {
        let mapper = ResultMapper::new(StubFetcher::succeeding("aGVsbG8gcG9zdGVy"));
        let result = mapper.normalize(movie("/abc.jpg")).await;

        assert_eq!(result.small_poster_base64.as_deref(), Some("aGVsbG8gcG9zdGVy"));
        assert_eq!(
            mapper.fetcher.requested(),
            vec!["https://image.tmdb.org/t/p/w154/abc.jpg".to_string()]
        );
    }

    #[tokio::test]
    async fn custom_small_poster_base_is_used() {
        let mapper = ResultMapper::new(StubFetcher::succeeding("x"))
            .with_small_poster_base("http://127.0.0.1:9000/t/p/w154/");
        mapper.normalize(movie("/abc.jpg")).await;

        assert_eq!(
            mapper.fetcher.requested(),
            vec!["http://127.0.0.1:9000/t/p/w154/abc.jpg".to_string()]
        );
    }

    #[test]
    fn absent_optionals_are_omitted_from_json() {
        let record = NormalizedResult {
            id: 1,
            media_type: "movie".into(),
            full_title: "A".into(),
            original_title: "A".into(),
            release_date: "2000-01-01".into(),
            overview: String::new(),
            small_poster_base64: None,
            large_poster_link: Some("https://image.tmdb.org/t/p/w500/a.jpg".into()),
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["type"], "movie");
        assert!(!object.contains_key("small_poster_base64"));
        assert!(object.contains_key("large_poster_link"));
        assert!(!object.contains_key("media_type"));
    }
}
