//! Derived standings and result models. Never stored as source data.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Franchise;

/// Outcome of one counted matchup, from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
    #[serde(rename = "T")]
    Tie,
}

impl WeekResult {
    /// Classify a score pair. Higher score wins; equal scores tie.
    pub fn from_scores(ours: i32, theirs: i32) -> Self {
        match ours.cmp(&theirs) {
            Ordering::Greater => WeekResult::Win,
            Ordering::Less => WeekResult::Loss,
            Ordering::Equal => WeekResult::Tie,
        }
    }

    /// The opponent's result for the same game.
    pub fn opposite(self) -> Self {
        match self {
            WeekResult::Win => WeekResult::Loss,
            WeekResult::Loss => WeekResult::Win,
            WeekResult::Tie => WeekResult::Tie,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            WeekResult::Win => "W",
            WeekResult::Loss => "L",
            WeekResult::Tie => "T",
        }
    }
}

impl fmt::Display for WeekResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Win/loss/tie tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Record {
    pub fn tally(&mut self, result: WeekResult) {
        match result {
            WeekResult::Win => self.wins += 1,
            WeekResult::Loss => self.losses += 1,
            WeekResult::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

/// "W-L", with "-T" appended only when there are ties.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ties > 0 {
            write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
        } else {
            write!(f, "{}-{}", self.wins, self.losses)
        }
    }
}

/// A team's line in the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team: String,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,

    /// Sum of counted weekly scores; may be negative
    pub total_points: i64,

    /// One slot per season week; None until the week counts
    pub results: Vec<Option<WeekResult>>,
}

impl TeamRecord {
    pub fn new(team: impl Into<String>, season_weeks: u32) -> Self {
        Self {
            team: team.into(),
            wins: 0,
            losses: 0,
            ties: 0,
            total_points: 0,
            results: vec![None; season_weeks as usize],
        }
    }

    /// Count one game: tally the result, add the points, fill the week slot.
    pub fn apply(&mut self, week: u32, result: WeekResult, points: i32) {
        match result {
            WeekResult::Win => self.wins += 1,
            WeekResult::Loss => self.losses += 1,
            WeekResult::Tie => self.ties += 1,
        }
        self.total_points += i64::from(points);
        if let Some(slot) = week
            .checked_sub(1)
            .and_then(|i| self.results.get_mut(i as usize))
        {
            *slot = Some(result);
        }
    }

    pub fn record(&self) -> Record {
        Record {
            wins: self.wins,
            losses: self.losses,
            ties: self.ties,
        }
    }
}

/// One started franchise's contribution to a team's week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseScore {
    pub franchise: Franchise,

    /// None while the franchise's stats are not yet imported
    pub score: Option<i32>,
}

impl FranchiseScore {
    pub fn is_pending(&self) -> bool {
        self.score.is_none()
    }
}

/// A team's score for one week.
///
/// An empty breakdown means the team set no lineup, which is how callers
/// tell "no lineup" apart from "lineup that scored 0".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamWeekScore {
    pub score: i32,
    pub breakdown: Vec<FranchiseScore>,
}

impl TeamWeekScore {
    pub fn has_lineup(&self) -> bool {
        !self.breakdown.is_empty()
    }
}

/// Both sides of a matchup, scored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupScore {
    pub team1_score: i32,
    pub team2_score: i32,
    pub team1_breakdown: Vec<FranchiseScore>,
    pub team2_breakdown: Vec<FranchiseScore>,
}

impl MatchupScore {
    pub fn team1_result(&self) -> WeekResult {
        WeekResult::from_scores(self.team1_score, self.team2_score)
    }
}

/// A counted matchup seen from one team's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchupDetails {
    pub week: u32,
    pub opponent: String,
    pub team_score: i32,
    pub opponent_score: i32,
    pub team_franchises: Vec<FranchiseScore>,
    pub opponent_franchises: Vec<FranchiseScore>,
    pub result: WeekResult,
}
