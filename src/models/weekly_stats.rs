//! Raw per-franchise weekly statistics, as imported from the stats feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Franchise;

/// One franchise's quarterback line for one week.
///
/// Counters are signed so malformed negative input flows through the scoring
/// arithmetic unchanged instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWeeklyStats {
    pub franchise: Franchise,

    /// Week number (1-based); import files may leave it out
    #[serde(default)]
    pub week: u32,

    pub pass_yards: i32,

    /// Passing touchdowns
    pub touchdowns: i32,

    /// Completion percentage, 0-100
    pub completion_percent: f64,

    pub interceptions: i32,

    pub fumbles: i32,

    #[serde(default)]
    pub rush_yards: i32,

    /// Defensive touchdowns scored off this QB (pick-six, scoop-and-score)
    #[serde(default)]
    pub defensive_tds: i32,

    /// QB sacked or grounded in the end zone
    #[serde(default)]
    pub safeties: i32,

    /// Fumbles or picks that ended the game
    #[serde(default)]
    pub game_ending_fumbles: i32,

    /// QB pulled for performance
    #[serde(default)]
    pub benchings: i32,

    /// Game-winning drives finished with a touchdown
    #[serde(default)]
    pub game_winning_drives: i32,

    /// Game-winning drives finished with a field goal
    #[serde(default)]
    pub game_winning_fg_drives: i32,

    /// 1 when no completion went for 25+ yards
    #[serde(default)]
    pub no_long_pass: i32,

    /// Set by the importer
    #[serde(default)]
    pub imported_at: Option<DateTime<Utc>>,
}

impl RawWeeklyStats {
    /// An all-zero stat line.
    pub fn new(franchise: Franchise, week: u32) -> Self {
        Self {
            franchise,
            week,
            pass_yards: 0,
            touchdowns: 0,
            completion_percent: 0.0,
            interceptions: 0,
            fumbles: 0,
            rush_yards: 0,
            defensive_tds: 0,
            safeties: 0,
            game_ending_fumbles: 0,
            benchings: 0,
            game_winning_drives: 0,
            game_winning_fg_drives: 0,
            no_long_pass: 0,
            imported_at: None,
        }
    }

    /// Interceptions plus fumbles. Never supplied directly.
    pub fn turnovers(&self) -> i32 {
        self.interceptions.saturating_add(self.fumbles)
    }
}
