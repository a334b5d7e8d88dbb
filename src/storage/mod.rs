//! Filesystem league store.
//!
//! Handles reading and writing the local data directory:
//! - League records (teams, lineups, matchups) as JSONL
//! - Weekly stats, one JSONL file per week

mod jsonl;
mod league_store;
mod stats_store;

pub use jsonl::*;
pub use league_store::*;
pub use stats_store::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse line {line} in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn league_dir(&self) -> PathBuf {
        self.data_dir.join("league")
    }

    pub fn stats_dir(&self) -> PathBuf {
        self.data_dir.join("stats")
    }

    /// Stats file for a single week, e.g. `stats/week-03.jsonl`.
    pub fn week_stats_path(&self, week: u32) -> PathBuf {
        self.stats_dir().join(format!("week-{:02}.jsonl", week))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
