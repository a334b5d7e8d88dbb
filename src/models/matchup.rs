//! Matchup model: two league teams paired in a week.

use serde::{Deserialize, Serialize};

use super::{EntityId, MatchupId};

/// A weekly head-to-head pairing.
///
/// The stored scores and winner are a cache written back by `sync-scores`;
/// the standings engine always recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matchup {
    /// Deterministic ID from (week, team1, team2)
    pub id: MatchupId,

    /// Week number (1-based)
    pub week: u32,

    /// First team name
    pub team1: String,

    /// Second team name
    pub team2: String,

    /// Last persisted score for team1
    #[serde(default)]
    pub team1_score: Option<i32>,

    /// Last persisted score for team2
    #[serde(default)]
    pub team2_score: Option<i32>,

    /// Last persisted winner (None for ties or unscored)
    #[serde(default)]
    pub winner: Option<String>,
}

impl Matchup {
    /// Create a new unscored matchup with auto-generated ID.
    pub fn new(week: u32, team1: impl Into<String>, team2: impl Into<String>) -> Self {
        let team1 = team1.into();
        let team2 = team2.into();
        let id = EntityId::generate(&["matchup", &week.to_string(), &team1, &team2]);

        Self {
            id,
            week,
            team1,
            team2,
            team1_score: None,
            team2_score: None,
            winner: None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }

    /// The other side of the matchup, if `team` plays in it.
    pub fn opponent_of(&self, team: &str) -> Option<&str> {
        if self.team1 == team {
            Some(&self.team2)
        } else if self.team2 == team {
            Some(&self.team1)
        } else {
            None
        }
    }
}
