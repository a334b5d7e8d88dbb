//! # QB League
//!
//! A fantasy league where teams own NFL franchises and score points for
//! their quarterbacks playing badly.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (franchises, teams, lineups, matchups, stats)
//! - **scoring**: Per-franchise weekly score from raw stats
//! - **source**: Weekly stats provider seam and per-pass cache
//! - **standings**: Team scores, results, records and the standings table
//! - **storage**: Filesystem data lake operations (JSONL)
//! - **ingest**: Weekly stats import
//! - **config**: Configuration loading and validation

pub mod config;
pub mod ingest;
pub mod models;
pub mod scoring;
pub mod source;
pub mod standings;
pub mod storage;

pub use models::*;

/// Parse a comma-separated franchise list (e.g., "CHI,Jets,New York Giants").
pub fn parse_franchise_list(s: &str) -> Result<Vec<Franchise>, UnknownFranchise> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}
