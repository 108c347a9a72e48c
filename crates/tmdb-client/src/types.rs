use serde::Deserialize;

/// One page of `search/multi` results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MultiSearchResponse {
    pub page: i64,
    pub results: Vec<MultiSearchResult>,
    pub total_pages: i64,
    pub total_results: i64,
}

/// A single `search/multi` hit, split by its `media_type` discriminant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMultiResult")]
pub enum MultiSearchResult {
    Movie(MovieResult),
    Tv(TvResult),
    /// Anything that is neither a movie nor a TV show (people, collections,
    /// or a hit with no discriminant at all). Keeps the original tag.
    Other(OtherResult),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieResult {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub release_date: String,
    pub overview: String,
    pub poster_path: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvResult {
    pub id: i64,
    pub name: String,
    pub original_name: String,
    pub first_air_date: String,
    pub overview: String,
    pub poster_path: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OtherResult {
    pub media_type: String,
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub release_date: String,
    pub overview: String,
    pub poster_path: String,
}

impl MultiSearchResult {
    pub fn id(&self) -> i64 {
        match self {
            Self::Movie(movie) => movie.id,
            Self::Tv(tv) => tv.id,
            Self::Other(other) => other.id,
        }
    }

    /// The discriminant exactly as the API reported it.
    pub fn media_type(&self) -> &str {
        match self {
            Self::Movie(_) => "movie",
            Self::Tv(_) => "tv",
            Self::Other(other) => &other.media_type,
        }
    }

    pub fn overview(&self) -> &str {
        match self {
            Self::Movie(movie) => &movie.overview,
            Self::Tv(tv) => &tv.overview,
            Self::Other(other) => &other.overview,
        }
    }

    /// Relative poster path, empty when the API has no poster for the hit.
    pub fn poster_path(&self) -> &str {
        match self {
            Self::Movie(movie) => &movie.poster_path,
            Self::Tv(tv) => &tv.poster_path,
            Self::Other(other) => &other.poster_path,
        }
    }
}

/// Wire shape of a multi search hit: every field of every media type,
/// any of which may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMultiResult {
    id: i64,
    media_type: Option<String>,
    title: Option<String>,
    original_title: Option<String>,
    release_date: Option<String>,
    name: Option<String>,
    original_name: Option<String>,
    first_air_date: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
}

impl From<RawMultiResult> for MultiSearchResult {
    fn from(raw: RawMultiResult) -> Self {
        let overview = raw.overview.unwrap_or_default();
        let poster_path = raw.poster_path.unwrap_or_default();
        match raw.media_type.as_deref() {
            Some("movie") => Self::Movie(MovieResult {
                id: raw.id,
                title: raw.title.unwrap_or_default(),
                original_title: raw.original_title.unwrap_or_default(),
                release_date: raw.release_date.unwrap_or_default(),
                overview,
                poster_path,
            }),
            Some("tv") => Self::Tv(TvResult {
                id: raw.id,
                name: raw.name.unwrap_or_default(),
                original_name: raw.original_name.unwrap_or_default(),
                first_air_date: raw.first_air_date.unwrap_or_default(),
                overview,
                poster_path,
            }),
            _ => Self::Other(OtherResult {
                media_type: raw.media_type.unwrap_or_default(),
                id: raw.id,
                title: raw.title.unwrap_or_default(),
                original_title: raw.original_title.unwrap_or_default(),
                release_date: raw.release_date.unwrap_or_default(),
                overview,
                poster_path,
            }),
        }
    }
}

/// Error envelope TMDB returns alongside non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiErrorBody {
    pub status_code: i64,
    pub status_message: String,
}
