//! In-memory matrix repository for testing.
//!
//! Stores matrices in a shared map, so session and command logic can be
//! exercised without any file-system I/O.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{Result, error::Error, model::TransitionMatrix, ports::MatrixRepository};

/// Map-backed repository for tests.
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, TransitionMatrix>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matrices currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Remove every stored matrix.
    pub fn clear(&self) {
        self.storage.lock().unwrap().clear();
    }

    /// Whether a matrix is stored at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().contains_key(&key)
    }
}

impl MatrixRepository for InMemoryRepository {
    fn save(&self, matrix: &TransitionMatrix, path: &Path) -> Result<()> {
        let key = path.to_string_lossy().to_string();
        self.storage.lock().unwrap().insert(key, matrix.clone());
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<TransitionMatrix> {
        let key = path.to_string_lossy().to_string();
        self.storage
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::Io {
                operation: format!("load matrix from in-memory storage at {path:?}"),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChainState;

    #[test]
    fn test_in_memory_save_and_load() {
        let repo = InMemoryRepository::new();
        let path = Path::new("matrix");

        assert_eq!(repo.count(), 0);
        assert!(!repo.contains(path));

        let mut matrix = TransitionMatrix::uniform();
        matrix.update(ChainState::WonRock, ChainState::LostRock);

        repo.save(&matrix, path).expect("Failed to save");
        assert_eq!(repo.count(), 1);
        assert!(repo.contains(path));

        let loaded = repo.load(path).expect("Failed to load");
        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_load_nonexistent_returns_error() {
        let repo = InMemoryRepository::new();
        assert!(repo.load(Path::new("nonexistent")).is_err());
    }

    #[test]
    fn test_clone_shares_storage() {
        let repo1 = InMemoryRepository::new();
        let repo2 = repo1.clone();
        let path = Path::new("shared");

        repo1
            .save(&TransitionMatrix::uniform(), path)
            .expect("Failed to save");

        assert_eq!(repo2.load(path).expect("Failed to load"), TransitionMatrix::uniform());
        assert_eq!(repo1.count(), 1);
        assert_eq!(repo2.count(), 1);

        repo2.clear();
        assert_eq!(repo1.count(), 0);
    }
}
