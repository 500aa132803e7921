//! Plain-text implementation of the matrix repository.
//!
//! The stored table is six whitespace-delimited rows of six fixed-point
//! probabilities, the same layout the original console game kept on disk.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    Result,
    error::Error,
    model::{STATE_COUNT, TransitionMatrix},
    ports::MatrixRepository,
};

/// Decimal places written per cell
const CELL_PRECISION: usize = 6;

/// Text-file matrix repository.
///
/// # Examples
///
/// ```no_run
/// use roshambo::adapters::TextMatrixRepository;
/// use roshambo::ports::MatrixRepository;
/// use roshambo::TransitionMatrix;
/// use std::path::Path;
///
/// let repo = TextMatrixRepository::new();
/// let matrix = repo.load_or_uniform(Path::new("transition_matrix.txt"));
/// repo.save(&matrix, Path::new("transition_matrix.txt"))?;
/// # Ok::<(), roshambo::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextMatrixRepository;

impl TextMatrixRepository {
    /// Create a new text repository.
    pub fn new() -> Self {
        Self
    }
}

impl MatrixRepository for TextMatrixRepository {
    fn save(&self, matrix: &TransitionMatrix, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        for row in matrix.rows() {
            let line = row
                .iter()
                .map(|cell| format!("{cell:.precision$}", precision = CELL_PRECISION))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{line}").map_err(|source| Error::Io {
                operation: format!("write matrix row to {path:?}"),
                source,
            })?;
        }

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush matrix to {path:?}"),
            source,
        })
    }

    fn load(&self, path: &Path) -> Result<TransitionMatrix> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read matrix from {path:?}"),
            source,
        })?;

        let lines: Vec<&str> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        if lines.len() != STATE_COUNT {
            return Err(Error::RowCount {
                expected: STATE_COUNT,
                got: lines.len(),
            });
        }

        let mut rows = [[0.0; STATE_COUNT]; STATE_COUNT];
        for (i, line) in lines.iter().enumerate() {
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != STATE_COUNT {
                return Err(Error::ColumnCount {
                    row: i,
                    expected: STATE_COUNT,
                    got: cells.len(),
                });
            }
            for (j, cell) in cells.iter().enumerate() {
                rows[i][j] = cell.parse().map_err(|_| Error::ParseCell {
                    row: i,
                    column: j,
                    value: (*cell).to_string(),
                })?;
            }
        }

        TransitionMatrix::from_rows(rows)
    }
}
