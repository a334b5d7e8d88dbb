//! JSONL (JSON Lines) storage.
//!
//! JSONL is the source of truth for all league data.
//! Each line is a valid JSON object representing one entity.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use super::{StorageConfig, StorageError};

/// League entity types stored under the league directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Team,
    Lineup,
    Matchup,
}

impl EntityType {
    /// Get the filename for this entity type.
    pub fn filename(&self) -> &'static str {
        match self {
            EntityType::Team => "teams.jsonl",
            EntityType::Lineup => "lineups.jsonl",
            EntityType::Matchup => "matchups.jsonl",
        }
    }
}

/// JSONL file writer.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for a league entity file.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.league_dir().join(entity.filename()))
    }

    /// Create a writer for one week's stats file.
    pub fn for_week(config: &StorageConfig, week: u32) -> Self {
        Self::new(config.week_stats_path(week))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists.
    fn ensure_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Write entities, replacing the entire file.
    ///
    /// Writes to a sibling temp file first so readers never see a
    /// half-written file.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.ensure_dir()?;

        let tmp_path = self.path.with_extension("jsonl.tmp");
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for entity in entities {
            let json = serde_json::to_string(entity)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        drop(writer);
        fs::rename(&tmp_path, &self.path)?;
        info!("Wrote {} entities to {:?}", count, self.path);

        Ok(count)
    }
}

/// JSONL file reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a reader for a league entity file.
    pub fn for_entity(config: &StorageConfig, entity: EntityType) -> Self {
        Self::new(config.league_dir().join(entity.filename()))
    }

    /// Create a reader for one week's stats file.
    pub fn for_week(config: &StorageConfig, week: u32) -> Self {
        Self::new(config.week_stats_path(week))
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read all entities, skipping unparseable lines with a warning.
    ///
    /// A missing file reads as empty.
    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => {
                    warn!("Failed to parse line {} in {:?}: {}", idx + 1, self.path, e);
                }
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// Read every line, failing on the first one that does not parse.
    ///
    /// A missing file reads as empty.
    pub fn read_all_strict(&self) -> Result<Vec<T>, StorageError> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut entities = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entity = serde_json::from_str(&line).map_err(|source| StorageError::Parse {
                path: self.path.clone(),
                line: idx + 1,
                source,
            })?;
            entities.push(entity);
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }
}

/// Weeks that have a stats file, ascending.
pub fn list_stats_weeks(config: &StorageConfig) -> Result<Vec<u32>, StorageError> {
    let dir = config.stats_dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut weeks = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let week = name
            .to_str()
            .and_then(|n| n.strip_prefix("week-"))
            .and_then(|n| n.strip_suffix(".jsonl"))
            .and_then(|n| n.parse::<u32>().ok());
        if let Some(week) = week {
            weeks.push(week);
        }
    }

    weeks.sort_unstable();
    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestEntity {
        id: String,
        value: u32,
    }

    fn entity(id: &str, value: u32) -> TestEntity {
        TestEntity {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_jsonl_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.jsonl");

        let entities = vec![entity("1", 100), entity("2", 200)];

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        assert_eq!(writer.write_all(&entities).unwrap(), 2);

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert_eq!(reader.read_all().unwrap(), entities);
    }

    #[test]
    fn test_jsonl_write_all_replaces() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/replace.jsonl");

        let writer: JsonlWriter<TestEntity> = JsonlWriter::new(path.clone());
        writer
            .write_all(&[entity("1", 1), entity("2", 2), entity("3", 3)])
            .unwrap();
        writer.write_all(&[entity("9", 9)]).unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path.clone());
        assert_eq!(reader.read_all().unwrap(), vec![entity("9", 9)]);
        assert!(!path.with_extension("jsonl.tmp").exists());
    }

    #[test]
    fn test_jsonl_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader: JsonlReader<TestEntity> =
            JsonlReader::new(temp_dir.path().join("nonexistent.jsonl"));

        assert!(!reader.exists());
        assert!(reader.read_all().unwrap().is_empty());
        assert!(reader.read_all_strict().unwrap().is_empty());
    }

    #[test]
    fn test_jsonl_skips_bad_lines_unless_strict() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.jsonl");
        fs::write(
            &path,
            "{\"id\":\"1\",\"value\":1}\nnot json\n\n{\"id\":\"2\",\"value\":2}\n",
        )
        .unwrap();

        let reader: JsonlReader<TestEntity> = JsonlReader::new(path);
        assert_eq!(reader.read_all().unwrap().len(), 2);
        assert!(matches!(
            reader.read_all_strict(),
            Err(StorageError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_entity_paths() {
        let config = StorageConfig::new(PathBuf::from("/data"));
        let writer: JsonlWriter<TestEntity> = JsonlWriter::for_entity(&config, EntityType::Lineup);
        assert_eq!(writer.path(), Path::new("/data/league/lineups.jsonl"));

        let writer: JsonlWriter<TestEntity> = JsonlWriter::for_week(&config, 7);
        assert_eq!(writer.path(), Path::new("/data/stats/week-07.jsonl"));
    }

    #[test]
    fn test_list_stats_weeks() {
        let temp_dir = TempDir::new().unwrap();
        let config = StorageConfig::new(temp_dir.path().to_path_buf());
        assert!(list_stats_weeks(&config).unwrap().is_empty());

        for week in [10, 2, 1] {
            JsonlWriter::<TestEntity>::for_week(&config, week)
                .write_all(&[entity("x", week)])
                .unwrap();
        }
        fs::write(config.stats_dir().join("notes.txt"), "ignore me").unwrap();

        assert_eq!(list_stats_weeks(&config).unwrap(), vec![1, 2, 10]);
    }
}
