//! Discrete bonus/penalty events and how each is counted from a stat line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RawWeeklyStats;

/// Rush yards at or above this trigger the long-rush penalty once.
pub const LONG_RUSH_YARDS: i32 = 75;

/// Where an event's occurrence count comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Counter reported directly by the stats feed
    Reported,

    /// Fires once when the stat reaches the threshold; never scales
    Threshold { min: i32 },

    /// Already rewarded through the turnover tier; display only
    TurnoverTier,
}

/// A countable occurrence with a fixed point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringEvent {
    GameEndingFumble,
    Benching,
    DefensiveTouchdown,
    Safety,
    NoLongPass,
    Interception,
    Fumble,
    LongRush,
    GameWinningDrive,
    GameWinningFieldGoalDrive,
}

impl ScoringEvent {
    pub const ALL: [ScoringEvent; 10] = [
        ScoringEvent::GameEndingFumble,
        ScoringEvent::Benching,
        ScoringEvent::DefensiveTouchdown,
        ScoringEvent::Safety,
        ScoringEvent::NoLongPass,
        ScoringEvent::Interception,
        ScoringEvent::Fumble,
        ScoringEvent::LongRush,
        ScoringEvent::GameWinningDrive,
        ScoringEvent::GameWinningFieldGoalDrive,
    ];

    /// Points per occurrence.
    pub fn points(self) -> i32 {
        match self {
            ScoringEvent::GameEndingFumble => 50,
            ScoringEvent::Benching => 35,
            ScoringEvent::DefensiveTouchdown => 20,
            ScoringEvent::Safety => 15,
            ScoringEvent::NoLongPass => 10,
            ScoringEvent::Interception => 5,
            ScoringEvent::Fumble => 4,
            ScoringEvent::LongRush => -8,
            ScoringEvent::GameWinningDrive => -12,
            ScoringEvent::GameWinningFieldGoalDrive => -6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoringEvent::GameEndingFumble => "Game-ending F-up",
            ScoringEvent::Benching => "Benching",
            ScoringEvent::DefensiveTouchdown => "Defensive TD",
            ScoringEvent::Safety => "QB safety",
            ScoringEvent::NoLongPass => "No pass of 25+ yards",
            ScoringEvent::Interception => "Interception",
            ScoringEvent::Fumble => "Fumble",
            ScoringEvent::LongRush => "75+ rush yards",
            ScoringEvent::GameWinningDrive => "Game-winning drive",
            ScoringEvent::GameWinningFieldGoalDrive => "Game-winning drive (FG)",
        }
    }

    pub fn derivation(self) -> Derivation {
        match self {
            ScoringEvent::Interception | ScoringEvent::Fumble => Derivation::TurnoverTier,
            ScoringEvent::LongRush => Derivation::Threshold {
                min: LONG_RUSH_YARDS,
            },
            _ => Derivation::Reported,
        }
    }

    /// Whether the event adds to a franchise's total.
    ///
    /// Interceptions and fumbles only score through the turnover tier.
    pub fn scored(self) -> bool {
        self.derivation() != Derivation::TurnoverTier
    }

    /// How many times the event happened in this stat line.
    pub fn occurrences(self, stats: &RawWeeklyStats) -> i32 {
        match self {
            ScoringEvent::GameEndingFumble => stats.game_ending_fumbles,
            ScoringEvent::Benching => stats.benchings,
            ScoringEvent::DefensiveTouchdown => stats.defensive_tds,
            ScoringEvent::Safety => stats.safeties,
            ScoringEvent::NoLongPass => stats.no_long_pass,
            ScoringEvent::Interception => stats.interceptions,
            ScoringEvent::Fumble => stats.fumbles,
            ScoringEvent::LongRush => i32::from(stats.rush_yards >= LONG_RUSH_YARDS),
            ScoringEvent::GameWinningDrive => stats.game_winning_drives,
            ScoringEvent::GameWinningFieldGoalDrive => stats.game_winning_fg_drives,
        }
    }
}

impl fmt::Display for ScoringEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.label(), self.points())
    }
}
