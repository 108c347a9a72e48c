use futures::stream::{self, StreamExt};
use tmdb_client::TmdbClient;
use tracing::{debug, info};

use crate::cli::SearchArgs;
use crate::config::Config;
use crate::mapper::{NormalizedResult, ResultMapper};
use crate::poster::{HttpPosterFetcher, PosterFetcher};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("error initializing TMDB client")]
    ClientInit(#[source] tmdb_client::Error),
    #[error("error searching TMDB")]
    RequestFailed(#[source] tmdb_client::Error),
}

/// One `search` invocation.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query_terms: Vec<String>,
    pub concurrency: usize,
}

impl From<SearchArgs> for SearchRequest {
    fn from(args: SearchArgs) -> Self {
        Self {
            query_terms: args.query,
            concurrency: args.concurrency,
        }
    }
}

impl SearchRequest {
    pub fn query(&self) -> String {
        self.query_terms.join(" ")
    }
}

/// Run a multi search and normalize every hit, in upstream order.
pub async fn execute(
    config: &Config,
    request: SearchRequest,
) -> Result<Vec<NormalizedResult>, SearchError> {
    let client = TmdbClient::new(config.api_key.as_str())
        .map_err(SearchError::ClientInit)?
        .with_base_url(config.api_url.as_str());
    let fetcher = HttpPosterFetcher::new(config.timeout)
        .map_err(|err| SearchError::ClientInit(err.into()))?;
    let mapper =
        ResultMapper::new(fetcher).with_small_poster_base(config.small_poster_base.as_str());

    run(&client, &mapper, &request).await
}

/// Search with an already constructed client and mapper.
///
/// Poster downloads overlap up to `request.concurrency`, but results are
/// yielded in the order TMDB returned them.
pub async fn run<F: PosterFetcher>(
    client: &TmdbClient,
    mapper: &ResultMapper<F>,
    request: &SearchRequest,
) -> Result<Vec<NormalizedResult>, SearchError> {
    let query = request.query();
    let response = client
        .search_multi(&query)
        .await
        .map_err(SearchError::RequestFailed)?;
    info!(
        query = %query,
        results = response.results.len(),
        total_results = response.total_results,
        "multi search completed"
    );

    let concurrency = usize::max(1, request.concurrency);
    let results: Vec<NormalizedResult> = stream::iter(response.results)
        .map(|item| mapper.normalize(item))
        .buffered(concurrency)
        .collect()
        .await;

    debug!(
        inlined = results
            .iter()
            .filter(|r| r.small_poster_base64.is_some())
            .count(),
        "posters inlined"
    );
    Ok(results)
}
