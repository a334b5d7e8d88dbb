//! In-memory stats source, for tests and for callers that already hold
//! a stats snapshot.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{SourceError, StatsSource};
use crate::models::RawWeeklyStats;

pub struct MemoryStatsSource {
    weeks: HashMap<u32, Vec<RawWeeklyStats>>,
    failing: HashSet<u32>,
    fetches: AtomicUsize,
}

impl MemoryStatsSource {
    /// Group rows by their week stamp.
    pub fn new(rows: Vec<RawWeeklyStats>) -> Self {
        let mut weeks: HashMap<u32, Vec<RawWeeklyStats>> = HashMap::new();
        for row in rows {
            weeks.entry(row.week).or_default().push(row);
        }
        Self {
            weeks,
            failing: HashSet::new(),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Make every fetch of `week` fail.
    pub fn failing_week(mut self, week: u32) -> Self {
        self.failing.insert(week);
        self
    }

    /// Replace everything held for the week.
    pub fn replace_week(&mut self, week: u32, rows: Vec<RawWeeklyStats>) {
        if rows.is_empty() {
            self.weeks.remove(&week);
        } else {
            self.weeks.insert(week, rows);
        }
    }

    /// How many times `week_stats` has been called.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StatsSource for MemoryStatsSource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn week_stats(&self, week: u32) -> Result<Vec<RawWeeklyStats>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&week) {
            return Err(SourceError::Unavailable(format!(
                "week {} is unreachable",
                week
            )));
        }
        Ok(self.weeks.get(&week).cloned().unwrap_or_default())
    }
}
