//! League snapshot: teams, lineups and matchups as one immutable input.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

use super::{Franchise, Matchup, Team, WeeklyLineup, LINEUP_SIZE, ROSTER_SIZE};

/// A malformed record found while validating a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueIssue {
    #[error(
        "Team '{team}' has {count} franchises on its roster, expected {expected}",
        expected = ROSTER_SIZE
    )]
    RosterSize { team: String, count: usize },

    #[error("Team '{team}' lists {franchise} more than once")]
    DuplicateRosterFranchise { team: String, franchise: Franchise },

    #[error("Team name '{0}' is used more than once")]
    DuplicateTeam(String),

    #[error(
        "Week {week} lineup for '{team}' has {count} franchises, expected {expected}",
        expected = LINEUP_SIZE
    )]
    LineupSize { team: String, week: u32, count: usize },

    #[error("Week {week} lineup for '{team}' starts {franchise} twice")]
    DuplicateStarter {
        team: String,
        week: u32,
        franchise: Franchise,
    },

    #[error("Week {week} lineup for '{team}' starts {franchise}, which is not on its roster")]
    StarterNotOnRoster {
        team: String,
        week: u32,
        franchise: Franchise,
    },

    #[error("Team '{team}' has more than one lineup for week {week}")]
    DuplicateLineup { team: String, week: u32 },

    #[error("Unknown team '{team}' referenced by a week {week} {context}")]
    UnknownTeam {
        team: String,
        week: u32,
        context: &'static str,
    },

    #[error("Week {week} {context} is outside the {season_weeks}-week season")]
    WeekOutOfRange {
        week: u32,
        season_weeks: u32,
        context: &'static str,
    },

    #[error("Week {week} matchup pairs '{team}' against itself")]
    SelfMatchup { team: String, week: u32 },
}

/// Everything the standings engine reads besides weekly stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub teams: Vec<Team>,
    pub lineups: Vec<WeeklyLineup>,
    pub matchups: Vec<Matchup>,
}

impl LeagueSnapshot {
    pub fn new(teams: Vec<Team>, lineups: Vec<WeeklyLineup>, matchups: Vec<Matchup>) -> Self {
        Self {
            teams,
            lineups,
            matchups,
        }
    }

    pub fn team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    /// The team's lineup for the week. A later record supersedes an earlier one.
    pub fn lineup(&self, team: &str, week: u32) -> Option<&WeeklyLineup> {
        self.lineups
            .iter()
            .rev()
            .find(|l| l.team == team && l.week == week)
    }

    pub fn matchups_in_week(&self, week: u32) -> impl DoubleEndedIterator<Item = &Matchup> {
        self.matchups.iter().filter(move |m| m.week == week)
    }

    /// Check roster, lineup and matchup shapes. Returns every issue found.
    pub fn validate(&self, season_weeks: u32) -> Vec<LeagueIssue> {
        let mut issues = Vec::new();
        let in_season = |week: u32| (1..=season_weeks).contains(&week);

        let mut rosters: HashMap<&str, &Team> = HashMap::new();
        for team in &self.teams {
            if rosters.insert(team.name.as_str(), team).is_some() {
                issues.push(LeagueIssue::DuplicateTeam(team.name.clone()));
            }
            if team.roster.len() != ROSTER_SIZE {
                issues.push(LeagueIssue::RosterSize {
                    team: team.name.clone(),
                    count: team.roster.len(),
                });
            }
            let mut seen = HashSet::new();
            for &franchise in &team.roster {
                if !seen.insert(franchise) {
                    issues.push(LeagueIssue::DuplicateRosterFranchise {
                        team: team.name.clone(),
                        franchise,
                    });
                }
            }
        }

        let mut lineup_keys = HashSet::new();
        for lineup in &self.lineups {
            let week = lineup.week;
            if !in_season(week) {
                issues.push(LeagueIssue::WeekOutOfRange {
                    week,
                    season_weeks,
                    context: "lineup",
                });
            }
            if !lineup_keys.insert((lineup.team.as_str(), week)) {
                issues.push(LeagueIssue::DuplicateLineup {
                    team: lineup.team.clone(),
                    week,
                });
            }
            if lineup.franchises.len() != LINEUP_SIZE {
                issues.push(LeagueIssue::LineupSize {
                    team: lineup.team.clone(),
                    week,
                    count: lineup.franchises.len(),
                });
            }

            let team = rosters.get(lineup.team.as_str());
            if team.is_none() {
                issues.push(LeagueIssue::UnknownTeam {
                    team: lineup.team.clone(),
                    week,
                    context: "lineup",
                });
            }

            let mut seen = HashSet::new();
            for &franchise in &lineup.franchises {
                if !seen.insert(franchise) {
                    issues.push(LeagueIssue::DuplicateStarter {
                        team: lineup.team.clone(),
                        week,
                        franchise,
                    });
                }
                if team.is_some_and(|t| !t.owns(franchise)) {
                    issues.push(LeagueIssue::StarterNotOnRoster {
                        team: lineup.team.clone(),
                        week,
                        franchise,
                    });
                }
            }
        }

        for matchup in &self.matchups {
            let week = matchup.week;
            if !in_season(week) {
                issues.push(LeagueIssue::WeekOutOfRange {
                    week,
                    season_weeks,
                    context: "matchup",
                });
            }
            if matchup.team1 == matchup.team2 {
                issues.push(LeagueIssue::SelfMatchup {
                    team: matchup.team1.clone(),
                    week,
                });
            }
            for name in [&matchup.team1, &matchup.team2] {
                if !rosters.contains_key(name.as_str()) {
                    issues.push(LeagueIssue::UnknownTeam {
                        team: name.clone(),
                        week,
                        context: "matchup",
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Franchise::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new(
                "Alpha",
                vec![ChicagoBears, NewYorkJets, CarolinaPanthers, TennesseeTitans],
            ),
            Team::new(
                "Bravo",
                vec![ClevelandBrowns, NewYorkGiants, LasVegasRaiders, DenverBroncos],
            ),
        ]
    }

    #[test]
    fn test_valid_snapshot_has_no_issues() {
        let snapshot = LeagueSnapshot::new(
            teams(),
            vec![
                WeeklyLineup::new("Alpha", 1, vec![ChicagoBears, NewYorkJets]),
                WeeklyLineup::new("Bravo", 1, vec![ClevelandBrowns, DenverBroncos]),
            ],
            vec![Matchup::new(1, "Alpha", "Bravo")],
        );
        assert!(snapshot.validate(18).is_empty());
    }

    #[test]
    fn test_roster_issues() {
        let snapshot = LeagueSnapshot::new(
            vec![Team::new("Alpha", vec![ChicagoBears, ChicagoBears, NewYorkJets])],
            vec![],
            vec![],
        );
        let issues = snapshot.validate(18);
        assert!(issues.contains(&LeagueIssue::RosterSize {
            team: "Alpha".to_string(),
            count: 3
        }));
        assert!(issues.contains(&LeagueIssue::DuplicateRosterFranchise {
            team: "Alpha".to_string(),
            franchise: ChicagoBears
        }));
    }

    #[test]
    fn test_lineup_issues() {
        let snapshot = LeagueSnapshot::new(
            teams(),
            vec![
                WeeklyLineup::new("Alpha", 2, vec![ChicagoBears]),
                WeeklyLineup::new("Alpha", 2, vec![ChicagoBears, KansasCityChiefs]),
                WeeklyLineup::new("Alpha", 19, vec![NewYorkJets, NewYorkJets]),
                WeeklyLineup::new("Zulu", 3, vec![ChicagoBears, NewYorkJets]),
            ],
            vec![],
        );
        let issues = snapshot.validate(18);

        assert!(issues.contains(&LeagueIssue::LineupSize {
            team: "Alpha".to_string(),
            week: 2,
            count: 1
        }));
        assert!(issues.contains(&LeagueIssue::DuplicateLineup {
            team: "Alpha".to_string(),
            week: 2
        }));
        assert!(issues.contains(&LeagueIssue::StarterNotOnRoster {
            team: "Alpha".to_string(),
            week: 2,
            franchise: KansasCityChiefs
        }));
        assert!(issues.contains(&LeagueIssue::DuplicateStarter {
            team: "Alpha".to_string(),
            week: 19,
            franchise: NewYorkJets
        }));
        assert!(issues.contains(&LeagueIssue::WeekOutOfRange {
            week: 19,
            season_weeks: 18,
            context: "lineup"
        }));
        assert!(issues.contains(&LeagueIssue::UnknownTeam {
            team: "Zulu".to_string(),
            week: 3,
            context: "lineup"
        }));
    }

    #[test]
    fn test_matchup_issues() {
        let snapshot = LeagueSnapshot::new(
            teams(),
            vec![],
            vec![
                Matchup::new(1, "Alpha", "Alpha"),
                Matchup::new(0, "Bravo", "Zulu"),
            ],
        );
        let issues = snapshot.validate(18);

        assert!(issues.contains(&LeagueIssue::SelfMatchup {
            team: "Alpha".to_string(),
            week: 1
        }));
        assert!(issues.contains(&LeagueIssue::UnknownTeam {
            team: "Zulu".to_string(),
            week: 0,
            context: "matchup"
        }));
        assert!(issues.contains(&LeagueIssue::WeekOutOfRange {
            week: 0,
            season_weeks: 18,
            context: "matchup"
        }));
    }

    #[test]
    fn test_later_lineup_supersedes() {
        let snapshot = LeagueSnapshot::new(
            teams(),
            vec![
                WeeklyLineup::new("Alpha", 1, vec![ChicagoBears, NewYorkJets]),
                WeeklyLineup::new("Alpha", 1, vec![CarolinaPanthers, TennesseeTitans]),
            ],
            vec![],
        );
        let lineup = snapshot.lineup("Alpha", 1).unwrap();
        assert_eq!(lineup.franchises, vec![CarolinaPanthers, TennesseeTitans]);
        assert!(snapshot.lineup("Alpha", 2).is_none());
    }

    #[test]
    fn test_issue_messages() {
        let issue = LeagueIssue::RosterSize {
            team: "Alpha".to_string(),
            count: 5,
        };
        assert_eq!(
            issue.to_string(),
            "Team 'Alpha' has 5 franchises on its roster, expected 4"
        );
    }
}
