use clap::{Parser, Subcommand};

use crate::poster::SMALL_POSTER_BASE;

/// Top-level CLI definition for tmdbclientdataprovider.
#[derive(Parser, Debug)]
#[command(name = "tmdbclientdataprovider", version)]
#[command(about = "CLI app to fetch data from TMDB", long_about = None)]
pub struct Cli {
    /// TMDB API key; falls back to the TMDB_API_KEY environment variable.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Timeout applied to each poster download (seconds). Unbounded when unset.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Root of the TMDB v3 API.
    #[arg(long, global = true, hide = true, default_value = tmdb_client::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Base URL thumbnails are downloaded from.
    #[arg(long, global = true, hide = true, default_value = SMALL_POSTER_BASE)]
    pub image_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a movie or TV show on TMDB.
    Search(SearchArgs),
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Query terms; joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of poster downloads in flight at once.
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,
}
