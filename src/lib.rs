//! Query TMDB's multi search and flatten movies, TV shows and everything
//! else into one record shape, with inlined thumbnail posters.

pub mod cli;
pub mod config;
pub mod mapper;
pub mod poster;
pub mod search;
pub mod telemetry;
