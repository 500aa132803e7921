//! Repository port for transition-matrix persistence.
//!
//! This module defines the trait boundary between the model arithmetic and
//! the storage mechanics, so the update and prediction rules never touch
//! I/O and stay deterministic to test.

use std::path::Path;

use crate::{Result, model::TransitionMatrix};

/// Port for persisting and loading transition matrices.
///
/// Implementations choose the storage mechanism; callers only rely on
/// save-then-load reproducing a matrix within serialization precision.
pub trait MatrixRepository {
    /// Save a matrix, overwriting any previous contents at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be created or written to.
    fn save(&self, matrix: &TransitionMatrix, path: &Path) -> Result<()>;

    /// Load a matrix from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is absent or unreadable, or if the
    /// stored table is malformed: wrong shape, unparsable or negative
    /// cells, or rows not summing to 1.
    fn load(&self, path: &Path) -> Result<TransitionMatrix>;

    /// Load a matrix, falling back to the uniform prior when the stored
    /// table is absent or unusable.
    ///
    /// Malformed storage is treated the same as missing storage; this
    /// method never fails.
    fn load_or_uniform(&self, path: &Path) -> TransitionMatrix {
        self.load(path).unwrap_or_else(|_| TransitionMatrix::uniform())
    }
}
