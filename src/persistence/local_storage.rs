//! Browser LocalStorage backend
//!
//! The value is stored as a bare integer string, e.g. `"1234"`.

use super::{BestScoreStore, STORAGE_KEY, StoreError};

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }

    /// Strict read; `Ok(None)` when the key is absent
    pub fn read(&self) -> Result<Option<u64>, StoreError> {
        let storage = Self::storage()?;
        let Some(raw) = storage
            .get_item(STORAGE_KEY)
            .map_err(|_| StoreError::Unavailable)?
        else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str::<u64>(raw.trim())?))
    }

    pub fn write(&self, score: u64) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(STORAGE_KEY, &score.to_string())
            .map_err(|_| StoreError::Unavailable)
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load_best_score(&self) -> u64 {
        match self.read() {
            Ok(Some(score)) => {
                log::info!("Loaded best score {}", score);
                score
            }
            Ok(None) => {
                log::info!("No best score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("Best score unavailable: {}", e);
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
