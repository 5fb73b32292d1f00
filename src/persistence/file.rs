//! JSON file backend for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BestScoreStore, STORAGE_KEY, StoreError};

/// On-disk shape: `{"binkRacingBest": 1234}`
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreRecord {
    #[serde(rename = "binkRacingBest")]
    best_score: u64,
}

/// Best score kept in a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$LANE_RACER_DATA/<key>.json`, or the working directory when unset
    pub fn default_path() -> PathBuf {
        let dir = std::env::var_os("LANE_RACER_DATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        dir.join(format!("{STORAGE_KEY}.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read; `Ok(None)` when the file does not exist yet
    pub fn read(&self) -> Result<Option<u64>, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: BestScoreRecord = serde_json::from_str(&json)?;
        Ok(Some(record.best_score))
    }

    /// Strict write, creating the parent directory if needed
    pub fn write(&self, score: u64) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string(&BestScoreRecord { best_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl BestScoreStore for FileStore {
    fn load_best_score(&self) -> u64 {
        match self.read() {
            Ok(Some(score)) => {
                log::info!("Loaded best score {} from {}", score, self.path.display());
                score
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Ignoring best score in {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save_best_score(&mut self, score: u64) {
        match self.write(score) {
            Ok(()) => log::info!("Best score {} saved", score),
            Err(e) => log::warn!("Could not save best score: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("lane-racer-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileStore::new(temp_path("missing.json"));
        assert_eq!(store.read().unwrap(), None);
        assert_eq!(store.load_best_score(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("saved.json");
        let mut store = FileStore::new(&path);
        store.save_best_score(1234);
        assert_eq!(FileStore::new(&path).load_best_score(), 1234);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let path = temp_path("nested").join("deeper").join("best.json");
        let _ = fs::remove_dir_all(temp_path("nested"));

        FileStore::new(&path).write(77).unwrap();
        assert_eq!(FileStore::new(&path).read().unwrap(), Some(77));
        let _ = fs::remove_dir_all(temp_path("nested"));
    }

    #[test]
    fn test_corrupt_file_loads_zero() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(store.read(), Err(StoreError::Json(_))));
        assert_eq!(store.load_best_score(), 0);
        let _ = fs::remove_file(path);
    }
}
