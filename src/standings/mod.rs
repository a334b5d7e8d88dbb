//! Standings engine.
//!
//! Derives team scores, results and standings from a league snapshot and
//! weekly stats. A matchup counts only when its week is in range, stats
//! exist for the week, and both teams set a lineup. Anything else leaves
//! the week empty for both sides: no win, no loss, no points.

mod results;

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{
    FranchiseScore, LeagueSnapshot, Matchup, MatchupScore, TeamRecord, TeamWeekScore, WeekRange,
    WeekResult, WeeklyLineup,
};
use crate::scoring::calculate_score;
use crate::source::{SourceError, StatsCache, StatsSource, WeekStats};

/// Errors that can occur while deriving standings.
///
/// Missing lineups or stats are never errors; only a failing stats source is.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to load week {week} stats: {source}")]
    Stats {
        week: u32,
        #[source]
        source: SourceError,
    },
}

/// A matchup that passed the availability checks, with its scores.
#[derive(Debug, Clone)]
pub struct CountedGame<'a> {
    pub matchup: &'a Matchup,
    pub score: MatchupScore,
}

/// One computation pass over an immutable league snapshot.
///
/// Stats are cached per week for the lifetime of the engine, so build a new
/// engine when the underlying data changes.
pub struct StandingsEngine<'a> {
    league: &'a LeagueSnapshot,
    lineups: HashMap<u32, HashMap<&'a str, &'a WeeklyLineup>>,
    stats: StatsCache<'a>,
    weeks: WeekRange,
}

impl<'a> StandingsEngine<'a> {
    pub fn new(league: &'a LeagueSnapshot, source: &'a dyn StatsSource, weeks: WeekRange) -> Self {
        let mut lineups: HashMap<u32, HashMap<&'a str, &'a WeeklyLineup>> = HashMap::new();
        for lineup in &league.lineups {
            // Later records supersede earlier ones for the same (team, week).
            lineups
                .entry(lineup.week)
                .or_default()
                .insert(lineup.team.as_str(), lineup);
        }

        Self {
            league,
            lineups,
            stats: StatsCache::new(source),
            weeks,
        }
    }

    pub fn league(&self) -> &'a LeagueSnapshot {
        self.league
    }

    pub fn weeks(&self) -> WeekRange {
        self.weeks
    }

    fn lineup(&self, team: &str, week: u32) -> Option<&'a WeeklyLineup> {
        self.lineups
            .get(&week)
            .and_then(|teams| teams.get(team))
            .copied()
    }

    /// The week's stats, fetched through the engine's cache.
    pub async fn week_stats(&self, week: u32) -> Result<Arc<WeekStats>, EngineError> {
        self.stats
            .week(week)
            .await
            .map_err(|source| EngineError::Stats { week, source })
    }

    /// Whether any stats have been imported for the week.
    pub async fn is_week_scored(&self, week: u32) -> Result<bool, EngineError> {
        Ok(self.week_stats(week).await?.is_scored())
    }

    /// Score a team's week.
    ///
    /// No lineup gives score 0 and an empty breakdown. A started franchise
    /// without stats appears with `score: None` and adds nothing.
    pub async fn team_week_score(
        &self,
        team: &str,
        week: u32,
    ) -> Result<TeamWeekScore, EngineError> {
        let Some(lineup) = self.lineup(team, week) else {
            debug!("No week {} lineup for {}", week, team);
            return Ok(TeamWeekScore::default());
        };

        let stats = self.week_stats(week).await?;
        let mut score: i32 = 0;
        let breakdown = lineup
            .franchises
            .iter()
            .map(|&franchise| {
                let points = stats.get(franchise).map(calculate_score);
                score = points.map_or(score, |p| score.saturating_add(p));
                FranchiseScore {
                    franchise,
                    score: points,
                }
            })
            .collect();

        Ok(TeamWeekScore { score, breakdown })
    }

    /// Score both sides of a matchup independently.
    pub async fn matchup_score(&self, matchup: &Matchup) -> Result<MatchupScore, EngineError> {
        let team1 = self.team_week_score(&matchup.team1, matchup.week).await?;
        let team2 = self.team_week_score(&matchup.team2, matchup.week).await?;

        Ok(MatchupScore {
            team1_score: team1.score,
            team2_score: team2.score,
            team1_breakdown: team1.breakdown,
            team2_breakdown: team2.breakdown,
        })
    }

    /// Scores for the matchup if it counts, None otherwise.
    pub async fn counted_score(
        &self,
        matchup: &Matchup,
    ) -> Result<Option<MatchupScore>, EngineError> {
        let week = matchup.week;

        if !self.weeks.counts(week) {
            return Ok(None);
        }
        if matchup.team1 == matchup.team2 {
            warn!("Skipping week {} self-matchup for {}", week, matchup.team1);
            return Ok(None);
        }
        if self.lineup(&matchup.team1, week).is_none()
            || self.lineup(&matchup.team2, week).is_none()
        {
            debug!(
                "Week {} {} vs {} missing a lineup; not counted",
                week, matchup.team1, matchup.team2
            );
            return Ok(None);
        }
        if !self.week_stats(week).await?.is_scored() {
            return Ok(None);
        }

        self.matchup_score(matchup).await.map(Some)
    }

    /// Every matchup that counts, in snapshot order.
    pub async fn counted_games(&self) -> Result<Vec<CountedGame<'a>>, EngineError> {
        let mut games = Vec::new();
        for matchup in &self.league.matchups {
            if let Some(score) = self.counted_score(matchup).await? {
                games.push(CountedGame { matchup, score });
            }
        }
        Ok(games)
    }

    /// The standings table, best first.
    ///
    /// Ranked by wins, then total points. Teams level on both keep their
    /// snapshot order.
    pub async fn standings(&self) -> Result<Vec<TeamRecord>, EngineError> {
        let season_weeks = self.weeks.season_weeks;
        let mut records: Vec<TeamRecord> = self
            .league
            .teams
            .iter()
            .map(|t| TeamRecord::new(t.name.clone(), season_weeks))
            .collect();
        let index: HashMap<&str, usize> = self
            .league
            .teams
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.as_str(), i))
            .collect();

        let games = self.counted_games().await?;
        for game in &games {
            let m = game.matchup;
            let team1_result = game.score.team1_result();
            let sides = [
                (&m.team1, team1_result, game.score.team1_score),
                (&m.team2, team1_result.opposite(), game.score.team2_score),
            ];
            for (team, result, points) in sides {
                match index.get(team.as_str()) {
                    Some(&i) => records[i].apply(m.week, result, points),
                    None => debug!("Ignoring result for unlisted team {}", team),
                }
            }
        }

        records.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then_with(|| b.total_points.cmp(&a.total_points))
        });

        info!(
            "Computed standings for {} teams from {} counted matchups",
            records.len(),
            games.len()
        );
        Ok(records)
    }

    /// Copies of every matchup with the stored score fields recomputed.
    ///
    /// Counted matchups get both scores and the winner (None on a tie);
    /// matchups that do not count have those fields cleared.
    pub async fn rescored_matchups(&self) -> Result<Vec<Matchup>, EngineError> {
        let mut rescored = Vec::with_capacity(self.league.matchups.len());
        for matchup in &self.league.matchups {
            let mut m = matchup.clone();
            match self.counted_score(matchup).await? {
                Some(score) => {
                    m.team1_score = Some(score.team1_score);
                    m.team2_score = Some(score.team2_score);
                    m.winner = match score.team1_result() {
                        WeekResult::Win => Some(m.team1.clone()),
                        WeekResult::Loss => Some(m.team2.clone()),
                        WeekResult::Tie => None,
                    };
                }
                None => {
                    m.team1_score = None;
                    m.team2_score = None;
                    m.winner = None;
                }
            }
            rescored.push(m);
        }
        Ok(rescored)
    }
}
