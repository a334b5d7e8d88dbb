//! Weekly stats files as a `StatsSource`.
//!
//! Reads are strict: a line that fails to parse fails the whole week.

use async_trait::async_trait;

use super::{JsonlReader, StorageConfig};
use crate::models::RawWeeklyStats;
use crate::source::{SourceError, StatsSource};

/// Serves `stats/week-NN.jsonl` files. A missing file means the week is unscored.
#[derive(Debug, Clone)]
pub struct JsonlStatsStore {
    config: StorageConfig,
}

impl JsonlStatsStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl StatsSource for JsonlStatsStore {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn week_stats(&self, week: u32) -> Result<Vec<RawWeeklyStats>, SourceError> {
        let rows =
            JsonlReader::<RawWeeklyStats>::for_week(&self.config, week).read_all_strict()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Franchise::{self, *};
    use crate::models::{LeagueSnapshot, Matchup, Team, WeekRange, WeeklyLineup};
    use crate::standings::{EngineError, StandingsEngine};
    use crate::storage::{JsonlWriter, StorageError};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_week_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        JsonlWriter::for_week(&config, 4)
            .write_all(&[
                RawWeeklyStats::new(Franchise::ChicagoBears, 4),
                RawWeeklyStats::new(Franchise::NewYorkJets, 4),
            ])
            .unwrap();

        let store = JsonlStatsStore::new(config);
        assert_eq!(store.week_stats(4).await.unwrap().len(), 2);
        assert!(store.week_stats(5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_line_fails_the_week() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(config.stats_dir()).unwrap();
        std::fs::write(
            config.week_stats_path(1),
            concat!(
                r#"{"franchise":"CHI","week":1,"pass_yards":180,"touchdowns":1,"completion_percent":61.0,"interceptions":0,"fumbles":0}"#,
                "\n",
                r#"{"franchise":"NYJ","week":1,"pass_yards":"oops","touchdowns":0,"completion_percent":40.0,"interceptions":2,"fumbles":1}"#,
                "\n"
            ),
        )
        .unwrap();
        let store = JsonlStatsStore::new(config);

        let err = store.week_stats(1).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::Storage(StorageError::Parse { line: 2, .. })
        ));

        let league = LeagueSnapshot::new(
            vec![
                Team::new(
                    "Alpha",
                    vec![ChicagoBears, NewYorkJets, CarolinaPanthers, TennesseeTitans],
                ),
                Team::new(
                    "Bravo",
                    vec![ClevelandBrowns, NewYorkGiants, LasVegasRaiders, DenverBroncos],
                ),
            ],
            vec![
                WeeklyLineup::new("Alpha", 1, vec![ChicagoBears, NewYorkJets]),
                WeeklyLineup::new("Bravo", 1, vec![ClevelandBrowns, NewYorkGiants]),
            ],
            vec![Matchup::new(1, "Alpha", "Bravo")],
        );
        let engine = StandingsEngine::new(&league, &store, WeekRange::default());

        let err = engine.standings().await.unwrap_err();
        assert!(matches!(err, EngineError::Stats { week: 1, .. }));
    }
}
