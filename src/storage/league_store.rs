//! League records on disk: teams, lineups and matchups.
//!
//! Reads are strict: a corrupt line fails the load instead of silently
//! dropping a record.

use thiserror::Error;
use tracing::{info, warn};

use super::{EntityType, JsonlReader, JsonlWriter, StorageConfig, StorageError};
use crate::config::LeagueConfig;
use crate::models::{LeagueIssue, LeagueSnapshot, Matchup, Team, WeeklyLineup};

/// Errors from loading or editing league records.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("League data failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<LeagueIssue>),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Week {0} is locked")]
    WeekLocked(u32),

    #[error("Week {week} lineup for '{team}' is locked")]
    LineupLocked { team: String, week: u32 },

    #[error("Invalid lineup: {0}")]
    InvalidLineup(LeagueIssue),
}

/// Reads and writes the league JSONL files.
#[derive(Debug, Clone)]
pub struct LeagueStore {
    config: StorageConfig,
}

impl LeagueStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Load the snapshot as stored, without shape validation.
    pub fn load(&self) -> Result<LeagueSnapshot, StorageError> {
        let teams =
            JsonlReader::<Team>::for_entity(&self.config, EntityType::Team).read_all_strict()?;
        let lineups = JsonlReader::<WeeklyLineup>::for_entity(&self.config, EntityType::Lineup)
            .read_all_strict()?;
        let matchups = JsonlReader::<Matchup>::for_entity(&self.config, EntityType::Matchup)
            .read_all_strict()?;

        info!(
            "Loaded {} teams, {} lineups, {} matchups",
            teams.len(),
            lineups.len(),
            matchups.len()
        );
        Ok(LeagueSnapshot::new(teams, lineups, matchups))
    }

    /// Load and validate the snapshot.
    ///
    /// In strict mode any issue fails the load; otherwise issues are logged
    /// and the data is used as-is.
    pub fn load_validated(&self, league: &LeagueConfig) -> Result<LeagueSnapshot, LeagueError> {
        let snapshot = self.load()?;
        let issues = snapshot.validate(league.season_weeks);

        if issues.is_empty() {
            return Ok(snapshot);
        }
        for issue in &issues {
            warn!("{}", issue);
        }
        if league.strict_validation {
            return Err(LeagueError::Invalid(issues));
        }
        Ok(snapshot)
    }

    pub fn save_teams(&self, teams: &[Team]) -> Result<usize, StorageError> {
        JsonlWriter::for_entity(&self.config, EntityType::Team).write_all(teams)
    }

    pub fn save_lineups(&self, lineups: &[WeeklyLineup]) -> Result<usize, StorageError> {
        JsonlWriter::for_entity(&self.config, EntityType::Lineup).write_all(lineups)
    }

    pub fn save_matchups(&self, matchups: &[Matchup]) -> Result<usize, StorageError> {
        JsonlWriter::for_entity(&self.config, EntityType::Matchup).write_all(matchups)
    }

    /// Set a team's lineup for a week, replacing any unlocked earlier one.
    pub fn set_lineup(
        &self,
        lineup: WeeklyLineup,
        league: &LeagueConfig,
    ) -> Result<WeeklyLineup, LeagueError> {
        let snapshot = self.load()?;
        let team = snapshot
            .team(&lineup.team)
            .ok_or_else(|| LeagueError::UnknownTeam(lineup.team.clone()))?;

        if league.is_week_locked(lineup.week) {
            return Err(LeagueError::WeekLocked(lineup.week));
        }
        if snapshot
            .lineup(&lineup.team, lineup.week)
            .is_some_and(|existing| existing.locked)
        {
            return Err(LeagueError::LineupLocked {
                team: lineup.team,
                week: lineup.week,
            });
        }

        let check = LeagueSnapshot::new(vec![team.clone()], vec![lineup.clone()], Vec::new());
        if let Some(issue) = check.validate(league.season_weeks).into_iter().next() {
            return Err(LeagueError::InvalidLineup(issue));
        }

        let mut lineups: Vec<WeeklyLineup> = snapshot
            .lineups
            .into_iter()
            .filter(|l| !(l.team == lineup.team && l.week == lineup.week))
            .collect();
        lineups.push(lineup.clone());
        self.save_lineups(&lineups)?;

        info!(
            "Set week {} lineup for {}: {}",
            lineup.week,
            lineup.team,
            lineup
                .franchises
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(lineup)
    }

    /// Lock every lineup set for the week. Returns how many changed.
    pub fn lock_week(&self, week: u32) -> Result<usize, StorageError> {
        let mut lineups = JsonlReader::<WeeklyLineup>::for_entity(&self.config, EntityType::Lineup)
            .read_all_strict()?;

        let mut changed = 0;
        for lineup in lineups.iter_mut().filter(|l| l.week == week && !l.locked) {
            lineup.locked = true;
            changed += 1;
        }

        if changed > 0 {
            self.save_lineups(&lineups)?;
        }
        info!("Locked {} week {} lineups", changed, week);
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Franchise::*;
    use tempfile::TempDir;

    fn store(temp_dir: &TempDir) -> LeagueStore {
        let store = LeagueStore::new(StorageConfig::new(temp_dir.path().to_path_buf()));
        store
            .save_teams(&[
                Team::new(
                    "Alpha",
                    vec![ChicagoBears, NewYorkJets, CarolinaPanthers, TennesseeTitans],
                ),
                Team::new(
                    "Bravo",
                    vec![ClevelandBrowns, NewYorkGiants, LasVegasRaiders, DenverBroncos],
                ),
            ])
            .unwrap();
        store
            .save_matchups(&[Matchup::new(1, "Alpha", "Bravo")])
            .unwrap();
        store
    }

    #[test]
    fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = LeagueStore::new(StorageConfig::new(temp_dir.path().to_path_buf()));
        let snapshot = store.load().unwrap();
        assert!(snapshot.teams.is_empty());
        assert!(snapshot.matchups.is_empty());
    }

    #[test]
    fn test_corrupt_lineup_line_fails_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let path = store.config.league_dir().join(EntityType::Lineup.filename());
        std::fs::write(&path, "{\"team\":\"Alpha\",\"week\":\"one\"}\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StorageError::Parse { line: 1, .. }));
        assert!(matches!(
            store.load_validated(&LeagueConfig::default()),
            Err(LeagueError::Storage(StorageError::Parse { .. }))
        ));
        assert!(store.lock_week(1).is_err());
    }

    #[test]
    fn test_set_lineup_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let league = LeagueConfig::default();

        store
            .set_lineup(
                WeeklyLineup::new("Alpha", 1, vec![ChicagoBears, NewYorkJets]),
                &league,
            )
            .unwrap();
        store
            .set_lineup(
                WeeklyLineup::new("Alpha", 1, vec![CarolinaPanthers, TennesseeTitans]),
                &league,
            )
            .unwrap();

        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.lineups.len(), 1);
        assert_eq!(
            snapshot.lineup("Alpha", 1).unwrap().franchises,
            vec![CarolinaPanthers, TennesseeTitans]
        );
    }

    #[test]
    fn test_set_lineup_rejects_bad_input() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let league = LeagueConfig::default();

        let err = store
            .set_lineup(WeeklyLineup::new("Zulu", 1, vec![ChicagoBears]), &league)
            .unwrap_err();
        assert!(matches!(err, LeagueError::UnknownTeam(_)));

        let err = store
            .set_lineup(
                WeeklyLineup::new("Alpha", 1, vec![ChicagoBears, DenverBroncos]),
                &league,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            LeagueError::InvalidLineup(LeagueIssue::StarterNotOnRoster { .. })
        ));

        let err = store
            .set_lineup(WeeklyLineup::new("Alpha", 1, vec![ChicagoBears]), &league)
            .unwrap_err();
        assert!(matches!(
            err,
            LeagueError::InvalidLineup(LeagueIssue::LineupSize { count: 1, .. })
        ));
    }

    #[test]
    fn test_locked_lineups_and_weeks_refuse_edits() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        let mut league = LeagueConfig::default();

        store
            .set_lineup(
                WeeklyLineup::new("Alpha", 2, vec![ChicagoBears, NewYorkJets]),
                &league,
            )
            .unwrap();
        assert_eq!(store.lock_week(2).unwrap(), 1);
        assert_eq!(store.lock_week(2).unwrap(), 0);

        let err = store
            .set_lineup(
                WeeklyLineup::new("Alpha", 2, vec![CarolinaPanthers, NewYorkJets]),
                &league,
            )
            .unwrap_err();
        assert!(matches!(err, LeagueError::LineupLocked { week: 2, .. }));

        league.locked_weeks = vec![3];
        let err = store
            .set_lineup(
                WeeklyLineup::new("Bravo", 3, vec![ClevelandBrowns, NewYorkGiants]),
                &league,
            )
            .unwrap_err();
        assert!(matches!(err, LeagueError::WeekLocked(3)));
    }

    #[test]
    fn test_load_validated_strict_and_lenient() {
        let temp_dir = TempDir::new().unwrap();
        let store = store(&temp_dir);
        store
            .save_lineups(&[WeeklyLineup::new("Alpha", 1, vec![ChicagoBears])])
            .unwrap();

        let mut league = LeagueConfig::default();
        let err = store.load_validated(&league).unwrap_err();
        assert!(matches!(err, LeagueError::Invalid(ref issues) if issues.len() == 1));

        league.strict_validation = false;
        let snapshot = store.load_validated(&league).unwrap();
        assert_eq!(snapshot.lineups.len(), 1);
    }
}
