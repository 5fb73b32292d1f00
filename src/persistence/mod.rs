//! Best-score persistence
//!
//! The only thing the game remembers between runs is one integer. Storage is
//! best-effort everywhere:
//! - Missing or unreadable values load as 0
//! - Failed writes are logged and dropped
//!
//! Backends: in-memory (tests, headless), JSON file (native), LocalStorage
//! (web).

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

/// Key the best score is stored under
pub const STORAGE_KEY: &str = "binkRacingBest";

/// Why a backend could not read or write the best score
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed best score: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

/// Capability the session uses to read and write the best score
pub trait BestScoreStore {
    /// Stored best score, 0 when absent or unreadable
    fn load_best_score(&self) -> u64;

    /// Persist a new best score. Never fails loudly.
    fn save_best_score(&mut self, score: u64);
}

/// In-memory store. Clones share the same slot so tests can observe writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<Option<u64>>>,
    writes: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(score: u64) -> Self {
        let store = Self::default();
        store.value.set(Some(score));
        store
    }

    /// Current stored value
    pub fn stored(&self) -> Option<u64> {
        self.value.get()
    }

    /// Number of saves so far
    pub fn writes(&self) -> u32 {
        self.writes.get()
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best_score(&self) -> u64 {
        self.value.get().unwrap_or(0)
    }

    fn save_best_score(&mut self, score: u64) {
        self.value.set(Some(score));
        self.writes.set(self.writes.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(store.load_best_score(), 0);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn test_memory_store_clones_share_slot() {
        let observer = MemoryStore::with_best(10);
        let mut writer = observer.clone();
        writer.save_best_score(25);
        assert_eq!(observer.load_best_score(), 25);
        assert_eq!(observer.writes(), 1);
    }
}
