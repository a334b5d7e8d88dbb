//! Weekly QB scoring.
//!
//! Converts one franchise's raw stat line into a signed point total. The
//! league rewards bad quarterback play, so low yardage, few touchdowns and
//! piles of turnovers score well. Five independent contributions are summed:
//! - Pass yards tier
//! - Touchdown tier
//! - Completion percentage tier
//! - Turnover tier (interceptions + fumbles)
//! - Discrete events (benchings, safeties, game-winning drives, ...)

mod events;

pub use events::*;

use serde::Serialize;

use crate::models::RawWeeklyStats;

/// Pass yards tier. Upper bounds are inclusive.
pub fn pass_yards_points(pass_yards: i32) -> i32 {
    if pass_yards <= 100 {
        25
    } else if pass_yards <= 150 {
        12
    } else if pass_yards <= 200 {
        6
    } else if pass_yards <= 299 {
        0
    } else if pass_yards <= 349 {
        -6
    } else if pass_yards <= 399 {
        -9
    } else {
        -12
    }
}

/// Passing touchdown tier.
pub fn touchdown_points(touchdowns: i32) -> i32 {
    match touchdowns {
        0 => 10,
        3 => -5,
        4 => -10,
        t if t >= 5 => -20,
        _ => 0,
    }
}

/// Completion percentage tier. Upper bounds are inclusive.
pub fn completion_points(completion_percent: f64) -> i32 {
    if completion_percent <= 30.0 {
        25
    } else if completion_percent <= 40.0 {
        15
    } else if completion_percent <= 50.0 {
        5
    } else {
        0
    }
}

/// Turnover tier. Fewer than three turnovers earn nothing.
pub fn turnover_points(turnovers: i32) -> i32 {
    match turnovers {
        3 => 12,
        4 => 16,
        5 => 24,
        t if t >= 6 => 50,
        _ => 0,
    }
}

/// Sum of every scored event's points times its occurrences.
///
/// Saturates instead of overflowing on absurd counters.
pub fn event_points(stats: &RawWeeklyStats) -> i32 {
    ScoringEvent::ALL
        .iter()
        .filter(|e| e.scored())
        .map(|e| e.points().saturating_mul(e.occurrences(stats)))
        .fold(0, i32::saturating_add)
}

/// Score one franchise's week.
pub fn calculate_score(stats: &RawWeeklyStats) -> i32 {
    let tiers = pass_yards_points(stats.pass_yards)
        + touchdown_points(stats.touchdowns)
        + completion_points(stats.completion_percent)
        + turnover_points(stats.turnovers());
    tiers.saturating_add(event_points(stats))
}

/// One event's share of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLine {
    pub event: ScoringEvent,
    pub occurrences: i32,
    pub points: i32,
}

/// Per-category view of a score, for detail screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub pass_yards: i32,
    pub touchdowns: i32,
    pub completion: i32,
    pub turnovers: i32,
    pub events: Vec<EventLine>,
}

impl ScoreBreakdown {
    /// Always equal to `calculate_score` for the same stat line.
    pub fn total(&self) -> i32 {
        let tiers = self.pass_yards + self.touchdowns + self.completion + self.turnovers;
        self.events
            .iter()
            .map(|e| e.points)
            .fold(tiers, i32::saturating_add)
    }
}

/// Break a score into its tier contributions and non-zero event lines.
pub fn score_breakdown(stats: &RawWeeklyStats) -> ScoreBreakdown {
    let events = ScoringEvent::ALL
        .iter()
        .filter(|e| e.scored())
        .filter_map(|&event| {
            let occurrences = event.occurrences(stats);
            (occurrences != 0).then(|| EventLine {
                event,
                occurrences,
                points: event.points().saturating_mul(occurrences),
            })
        })
        .collect();

    ScoreBreakdown {
        pass_yards: pass_yards_points(stats.pass_yards),
        touchdowns: touchdown_points(stats.touchdowns),
        completion: completion_points(stats.completion_percent),
        turnovers: turnover_points(stats.turnovers()),
        events,
    }
}
