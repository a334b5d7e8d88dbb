//! Weekly stats import.
//!
//! Importing a week always replaces everything previously stored for that
//! week. Rows are never merged with an earlier import.

use std::collections::HashSet;
use std::path::Path;

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use crate::models::{Franchise, RawWeeklyStats};
use crate::storage::{JsonlReader, JsonlWriter, StorageConfig, StorageError};

/// Errors that reject an import before anything is written.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Week {week} is outside the {season_weeks}-week season")]
    WeekOutOfRange { week: u32, season_weeks: u32 },

    #[error("{franchise} row is stamped week {found}, expected week {expected}")]
    WeekMismatch {
        franchise: Franchise,
        found: u32,
        expected: u32,
    },

    #[error("{0} appears more than once in the import")]
    DuplicateFranchise(Franchise),
}

/// Outcome of a week import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestResult {
    pub week: u32,
    pub rows_written: usize,
    pub rows_replaced: usize,
}

/// Read an import file. The file must exist and every line must parse.
pub fn read_stats_file(path: &Path) -> Result<Vec<RawWeeklyStats>, IngestError> {
    let reader = JsonlReader::<RawWeeklyStats>::new(path.to_path_buf());
    if !reader.exists() {
        return Err(StorageError::PathNotFound(path.to_path_buf()).into());
    }
    Ok(reader.read_all_strict()?)
}

/// Replace the stored stats for `week` with `rows`.
///
/// Rows without a week are stamped with `week`; rows stamped with another
/// week, or repeating a franchise, reject the whole import.
pub fn import_week_stats(
    config: &StorageConfig,
    week: u32,
    season_weeks: u32,
    mut rows: Vec<RawWeeklyStats>,
) -> Result<IngestResult, IngestError> {
    if week == 0 || week > season_weeks {
        return Err(IngestError::WeekOutOfRange { week, season_weeks });
    }

    let imported_at = Utc::now();
    let mut seen = HashSet::new();
    for row in &mut rows {
        if row.week == 0 {
            row.week = week;
        } else if row.week != week {
            return Err(IngestError::WeekMismatch {
                franchise: row.franchise,
                found: row.week,
                expected: week,
            });
        }
        if !seen.insert(row.franchise) {
            return Err(IngestError::DuplicateFranchise(row.franchise));
        }
        row.imported_at = Some(imported_at);
    }

    // Lenient so a corrupt week can be repaired by re-importing it.
    let rows_replaced = JsonlReader::<RawWeeklyStats>::for_week(config, week)
        .read_all()?
        .len();
    let rows_written = JsonlWriter::for_week(config, week).write_all(&rows)?;

    info!(
        "Imported week {} stats: {} rows written, {} replaced",
        week, rows_written, rows_replaced
    );
    Ok(IngestResult {
        week,
        rows_written,
        rows_replaced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StatsSource;
    use crate::storage::JsonlStatsStore;
    use tempfile::TempDir;

    fn row(franchise: Franchise, pass_yards: i32) -> RawWeeklyStats {
        RawWeeklyStats {
            pass_yards,
            ..RawWeeklyStats::new(franchise, 0)
        }
    }

    #[tokio::test]
    async fn test_reimport_replaces_week() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        let first = import_week_stats(
            &config,
            3,
            18,
            vec![
                row(Franchise::ChicagoBears, 120),
                row(Franchise::NewYorkJets, 310),
            ],
        )
        .unwrap();
        assert_eq!(first.rows_written, 2);
        assert_eq!(first.rows_replaced, 0);

        let second =
            import_week_stats(&config, 3, 18, vec![row(Franchise::ChicagoBears, 95)]).unwrap();
        assert_eq!(second.rows_replaced, 2);

        let stored = JsonlStatsStore::new(config).week_stats(3).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].pass_yards, 95);
        assert_eq!(stored[0].week, 3);
        assert!(stored[0].imported_at.is_some());
    }

    #[test]
    fn test_import_rejects_bad_rows() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());

        let err = import_week_stats(&config, 19, 18, vec![]).unwrap_err();
        assert!(matches!(err, IngestError::WeekOutOfRange { week: 19, .. }));

        let stamped = RawWeeklyStats::new(Franchise::DenverBroncos, 4);
        let err = import_week_stats(&config, 5, 18, vec![stamped]).unwrap_err();
        assert!(matches!(
            err,
            IngestError::WeekMismatch {
                found: 4,
                expected: 5,
                ..
            }
        ));

        let err = import_week_stats(
            &config,
            5,
            18,
            vec![
                row(Franchise::DenverBroncos, 100),
                row(Franchise::DenverBroncos, 200),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IngestError::DuplicateFranchise(Franchise::DenverBroncos)
        ));

        // Nothing was written by the rejected imports.
        assert!(!config.week_stats_path(5).exists());
    }

    #[test]
    fn test_read_stats_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("week7.jsonl");
        std::fs::write(
            &path,
            concat!(
                r#"{"franchise":"CLE","pass_yards":188,"touchdowns":0,"completion_percent":48.5,"interceptions":2,"fumbles":1,"benchings":1}"#,
                "\n",
                r#"{"franchise":"Jets","pass_yards":95,"touchdowns":0,"completion_percent":29.0,"interceptions":3,"fumbles":3}"#,
                "\n"
            ),
        )
        .unwrap();

        let rows = read_stats_file(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].franchise, Franchise::ClevelandBrowns);
        assert_eq!(rows[0].benchings, 1);
        assert_eq!(rows[1].week, 0);

        let err = read_stats_file(&temp_dir.path().join("missing.jsonl")).unwrap_err();
        assert!(matches!(
            err,
            IngestError::Storage(StorageError::PathNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_reimport_repairs_corrupt_week() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        std::fs::create_dir_all(config.stats_dir()).unwrap();
        std::fs::write(config.week_stats_path(2), "not json\n").unwrap();

        let store = JsonlStatsStore::new(config.clone());
        assert!(store.week_stats(2).await.is_err());

        import_week_stats(&config, 2, 18, vec![row(Franchise::ChicagoBears, 80)]).unwrap();
        assert_eq!(store.week_stats(2).await.unwrap().len(), 1);
    }
}
