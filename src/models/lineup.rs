//! Weekly lineup model: the two franchises a team starts in a week.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Franchise, LineupId};

/// Number of franchises a team starts each week.
pub const LINEUP_SIZE: usize = 2;

/// A team's starters for one week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyLineup {
    /// Deterministic ID from (team, week)
    pub id: LineupId,

    /// Team that set this lineup
    pub team: String,

    /// Week number (1-based)
    pub week: u32,

    /// Active franchises
    pub franchises: Vec<Franchise>,

    /// Locked lineups can no longer be edited; scoring ignores this flag
    #[serde(default)]
    pub locked: bool,

    /// When this lineup was last set
    pub updated_at: DateTime<Utc>,
}

impl WeeklyLineup {
    /// Create a new unlocked lineup with auto-generated ID.
    pub fn new(team: impl Into<String>, week: u32, franchises: Vec<Franchise>) -> Self {
        let team = team.into();
        let id = EntityId::generate(&["lineup", &team, &week.to_string()]);

        Self {
            id,
            team,
            week,
            franchises,
            locked: false,
            updated_at: Utc::now(),
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}
