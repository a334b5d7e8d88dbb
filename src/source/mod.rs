//! Weekly stats sources.
//!
//! The standings engine never reads stats directly. It asks a `StatsSource`
//! for one week at a time through a `StatsCache`, so each distinct week is
//! fetched at most once per computation pass.

mod memory;

pub use memory::MemoryStatsSource;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::{Franchise, RawWeeklyStats};
use crate::storage::StorageError;

/// Errors a stats source can report. Missing data is not an error.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Stats source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only access to imported weekly stats.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Source identifier for logging.
    fn name(&self) -> &'static str;

    /// All rows imported for the week. Empty means the week is not scored yet.
    async fn week_stats(&self, week: u32) -> Result<Vec<RawWeeklyStats>, SourceError>;
}

/// One week's stats, indexed by franchise.
#[derive(Debug, Clone, Default)]
pub struct WeekStats {
    week: u32,
    by_franchise: HashMap<Franchise, RawWeeklyStats>,
}

impl WeekStats {
    /// Index rows for a week. Rows stamped with another week are dropped and
    /// a later row for the same franchise replaces an earlier one.
    pub fn from_rows(week: u32, rows: Vec<RawWeeklyStats>) -> Self {
        let mut by_franchise = HashMap::with_capacity(rows.len());
        for row in rows {
            if row.week != week {
                warn!(
                    "Dropping {} stats stamped week {} from week {} data",
                    row.franchise, row.week, week
                );
                continue;
            }
            if by_franchise.insert(row.franchise, row).is_some() {
                warn!("Duplicate stats row in week {}; keeping the last", week);
            }
        }
        Self { week, by_franchise }
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// A week counts only once at least one row has been imported.
    pub fn is_scored(&self) -> bool {
        !self.by_franchise.is_empty()
    }

    pub fn get(&self, franchise: Franchise) -> Option<&RawWeeklyStats> {
        self.by_franchise.get(&franchise)
    }

    pub fn len(&self) -> usize {
        self.by_franchise.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_franchise.is_empty()
    }
}

/// Read-through cache over a `StatsSource`, keyed by week.
pub struct StatsCache<'a> {
    source: &'a dyn StatsSource,
    weeks: Mutex<HashMap<u32, Arc<WeekStats>>>,
}

impl<'a> StatsCache<'a> {
    pub fn new(source: &'a dyn StatsSource) -> Self {
        Self {
            source,
            weeks: Mutex::new(HashMap::new()),
        }
    }

    /// Stats for the week, fetching from the source on first use.
    ///
    /// The lock is held across the fetch so concurrent callers asking for
    /// the same week wait for one fetch instead of issuing their own.
    pub async fn week(&self, week: u32) -> Result<Arc<WeekStats>, SourceError> {
        let mut weeks = self.weeks.lock().await;
        if let Some(stats) = weeks.get(&week) {
            return Ok(Arc::clone(stats));
        }

        let rows = self.source.week_stats(week).await?;
        let stats = Arc::new(WeekStats::from_rows(week, rows));
        debug!(
            "Fetched week {} from {}: {} franchises",
            week,
            self.source.name(),
            stats.len()
        );
        weeks.insert(week, Arc::clone(&stats));
        Ok(stats)
    }

    /// Number of weeks fetched so far.
    pub async fn cached_weeks(&self) -> usize {
        self.weeks.lock().await.len()
    }
}
