//! Per-team, per-week results and matchup detail views.

use std::collections::BTreeMap;

use crate::models::{Matchup, MatchupDetails, MatchupScore, Record, WeekResult};

use super::{EngineError, StandingsEngine};

impl<'a> StandingsEngine<'a> {
    /// Each team's result codes, one slot per season week.
    ///
    /// A slot stays None unless the team played a counted matchup that week.
    pub async fn weekly_results(
        &self,
    ) -> Result<BTreeMap<String, Vec<Option<WeekResult>>>, EngineError> {
        let slots = self.weeks.season_weeks as usize;
        let mut results: BTreeMap<String, Vec<Option<WeekResult>>> = self
            .league
            .teams
            .iter()
            .map(|t| (t.name.clone(), vec![None; slots]))
            .collect();

        for game in self.counted_games().await? {
            let m = game.matchup;
            let team1_result = game.score.team1_result();
            let idx = (m.week - 1) as usize;

            for (team, result) in [
                (&m.team1, team1_result),
                (&m.team2, team1_result.opposite()),
            ] {
                if let Some(slot) = results.get_mut(team).and_then(|s| s.get_mut(idx)) {
                    *slot = Some(result);
                }
            }
        }

        Ok(results)
    }

    /// The team's counted matchup for the week with its scores. When a week
    /// lists the team more than once, the last counted listing wins,
    /// matching the slot `weekly_results` fills.
    async fn counted_matchup_for(
        &self,
        team: &str,
        week: u32,
    ) -> Result<Option<(&'a Matchup, MatchupScore)>, EngineError> {
        let league = self.league;
        for matchup in league.matchups_in_week(week).rev() {
            if !matchup.involves(team) {
                continue;
            }
            if let Some(score) = self.counted_score(matchup).await? {
                return Ok(Some((matchup, score)));
            }
        }
        Ok(None)
    }

    /// The team's result for the week, or None if it does not count.
    pub async fn team_week_result(
        &self,
        team: &str,
        week: u32,
    ) -> Result<Option<WeekResult>, EngineError> {
        Ok(self
            .team_week_matchup_details(team, week)
            .await?
            .map(|details| details.result))
    }

    /// Current "W-L" / "W-L-T" record, one tally per counted matchup.
    ///
    /// Agrees with the team's line in `standings`.
    pub async fn current_record(&self, team: &str) -> Result<Record, EngineError> {
        let mut record = Record::default();
        let league = self.league;
        for matchup in league.matchups.iter().filter(|m| m.involves(team)) {
            let Some(score) = self.counted_score(matchup).await? else {
                continue;
            };
            if let Some(details) = details_for(team, matchup, score) {
                record.tally(details.result);
            }
        }
        Ok(record)
    }

    /// The team's counted matchup for the week, seen from its side.
    pub async fn team_week_matchup_details(
        &self,
        team: &str,
        week: u32,
    ) -> Result<Option<MatchupDetails>, EngineError> {
        Ok(self
            .counted_matchup_for(team, week)
            .await?
            .and_then(|(matchup, score)| details_for(team, matchup, score)))
    }
}

fn details_for(team: &str, matchup: &Matchup, score: MatchupScore) -> Option<MatchupDetails> {
    let opponent = matchup.opponent_of(team)?.to_string();
    let team1_result = score.team1_result();
    let details = if matchup.team1 == team {
        MatchupDetails {
            week: matchup.week,
            opponent,
            team_score: score.team1_score,
            opponent_score: score.team2_score,
            team_franchises: score.team1_breakdown,
            opponent_franchises: score.team2_breakdown,
            result: team1_result,
        }
    } else {
        MatchupDetails {
            week: matchup.week,
            opponent,
            team_score: score.team2_score,
            opponent_score: score.team1_score,
            team_franchises: score.team2_breakdown,
            opponent_franchises: score.team1_breakdown,
            result: team1_result.opposite(),
        }
    };
    Some(details)
}
