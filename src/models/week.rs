//! Season week range threaded into the standings engine.

use serde::{Deserialize, Serialize};

/// Default NFL regular season length.
pub const SEASON_WEEKS: u32 = 18;

/// Which weeks exist and which of them may count toward standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    /// Number of result slots per team
    pub season_weeks: u32,

    /// Last week that may count; later weeks are treated as unscored
    pub through: u32,
}

impl WeekRange {
    /// Every week of the season counts.
    pub fn full_season(season_weeks: u32) -> Self {
        Self {
            season_weeks,
            through: season_weeks,
        }
    }

    /// Count weeks up to `current_week`, clamped to the season.
    pub fn through_week(season_weeks: u32, current_week: u32) -> Self {
        Self {
            season_weeks,
            through: current_week.min(season_weeks),
        }
    }

    /// Whether a week may count toward standings.
    pub fn counts(&self, week: u32) -> bool {
        week >= 1 && week <= self.through
    }

    /// Weeks that may count, in order.
    pub fn counted_weeks(&self) -> impl Iterator<Item = u32> {
        1..=self.through
    }

    /// All season weeks, in order.
    pub fn season(&self) -> impl Iterator<Item = u32> {
        1..=self.season_weeks
    }
}

impl Default for WeekRange {
    fn default() -> Self {
        Self::full_season(SEASON_WEEKS)
    }
}
