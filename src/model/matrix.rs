//! Row-stochastic transition matrix and the update and prediction rules

use crate::{
    error::Error,
    game::Move,
    model::state::{CATEGORY_COUNT, CATEGORY_MOVES, ChainState, STATE_COUNT},
};

/// Default reinforcement added to an observed transition cell
pub const DEFAULT_REINFORCEMENT: f64 = 0.05;

/// Default decay subtracted from the unobserved cells of the row
pub const DEFAULT_DECAY: f64 = 0.01;

/// Tolerance for the row-stochastic invariant on live matrices
pub const ROW_SUM_TOLERANCE: f64 = 1e-9;

/// Looser tolerance for tables read back from storage, which are rounded to
/// six decimals per cell
pub const STORED_ROW_SUM_TOLERANCE: f64 = 1e-4;

/// Estimated next-state distribution per current state
///
/// `rows[i][j]` is the estimated probability that the chain moves from state
/// `i` to state `j`. Every row sums to 1 within [`ROW_SUM_TOLERANCE`] after
/// every update; no cell is ever negative.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    rows: [[f64; STATE_COUNT]; STATE_COUNT],
}

impl TransitionMatrix {
    /// The uninformed prior: every transition equally likely
    pub fn uniform() -> Self {
        Self {
            rows: [[1.0 / STATE_COUNT as f64; STATE_COUNT]; STATE_COUNT],
        }
    }

    /// Build a matrix from raw rows, validating cells and row sums
    ///
    /// # Errors
    ///
    /// Returns `Error::CellOutOfRange` for a negative or non-finite cell and
    /// `Error::RowSum` for a row that does not sum to 1 within
    /// [`STORED_ROW_SUM_TOLERANCE`].
    pub fn from_rows(rows: [[f64; STATE_COUNT]; STATE_COUNT]) -> crate::Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                if !cell.is_finite() || cell < 0.0 {
                    return Err(Error::CellOutOfRange {
                        row: i,
                        column: j,
                        value: cell,
                    });
                }
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > STORED_ROW_SUM_TOLERANCE {
                return Err(Error::RowSum { row: i, sum });
            }
        }
        Ok(Self { rows })
    }

    /// Probability of moving from `from` to `to`
    pub fn get(&self, from: ChainState, to: ChainState) -> f64 {
        self.rows[from.index()][to.index()]
    }

    /// The estimated next-state distribution conditioned on `from`
    pub fn row(&self, from: ChainState) -> &[f64; STATE_COUNT] {
        &self.rows[from.index()]
    }

    /// Raw rows in column order
    pub fn rows(&self) -> &[[f64; STATE_COUNT]; STATE_COUNT] {
        &self.rows
    }

    /// Record an observed transition using the default constants
    pub fn update(&mut self, prev: ChainState, next: ChainState) {
        self.update_with(prev, next, DEFAULT_REINFORCEMENT, DEFAULT_DECAY);
    }

    /// Record an observed transition
    ///
    /// Adds `reinforcement` to the observed cell of row `prev`, subtracts
    /// `decay` from every other cell of that row clamped at zero, then
    /// renormalizes the row by its new sum. Rows other than `prev` are
    /// untouched. A degenerate row sum leaves the row uniform instead of
    /// dividing by it.
    pub fn update_with(
        &mut self,
        prev: ChainState,
        next: ChainState,
        reinforcement: f64,
        decay: f64,
    ) {
        let row = &mut self.rows[prev.index()];
        for (column, cell) in row.iter_mut().enumerate() {
            if column == next.index() {
                *cell += reinforcement;
            } else {
                *cell = (*cell - decay).max(0.0);
            }
        }

        let sum: f64 = row.iter().sum();
        if sum <= f64::EPSILON {
            *row = [1.0 / STATE_COUNT as f64; STATE_COUNT];
        } else {
            for cell in row.iter_mut() {
                *cell /= sum;
            }
        }
    }

    /// Predicted opponent category for the next round
    ///
    /// Sums the three adjacent column pairs of the current row and returns
    /// the index of the heaviest pair. Ties break to the lowest index.
    pub fn predict(&self, current: ChainState) -> usize {
        let row = &self.rows[current.index()];
        let mut best = 0;
        let mut best_mass = row[0] + row[1];
        for category in 1..CATEGORY_COUNT {
            let mass = row[2 * category] + row[2 * category + 1];
            if mass > best_mass {
                best = category;
                best_mass = mass;
            }
        }
        best
    }

    /// Opponent throw predicted for the next round
    pub fn predicted_throw(&self, current: ChainState) -> Move {
        CATEGORY_MOVES[self.predict(current)]
    }

    /// Whether every row sums to 1 within [`ROW_SUM_TOLERANCE`]
    pub fn is_row_stochastic(&self) -> bool {
        self.rows
            .iter()
            .all(|row| (row.iter().sum::<f64>() - 1.0).abs() <= ROW_SUM_TOLERANCE)
    }
}

impl Default for TransitionMatrix {
    fn default() -> Self {
        Self::uniform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_with_first(first: [f64; STATE_COUNT]) -> [[f64; STATE_COUNT]; STATE_COUNT] {
        let mut rows = [[1.0 / STATE_COUNT as f64; STATE_COUNT]; STATE_COUNT];
        rows[0] = first;
        rows
    }

    #[test]
    fn test_uniform_cells_are_exactly_one_sixth() {
        let matrix = TransitionMatrix::uniform();
        for row in matrix.rows() {
            for &cell in row {
                assert_eq!(cell, 1.0 / 6.0);
            }
        }
    }

    #[test]
    fn test_update_keeps_row_stochastic() {
        let mut matrix = TransitionMatrix::uniform();
        matrix.update(ChainState::WonPaper, ChainState::LostRock);
        assert!(matrix.is_row_stochastic());
    }

    #[test]
    fn test_update_reinforces_observed_transition() {
        let mut matrix = TransitionMatrix::uniform();
        matrix.update(ChainState::WonPaper, ChainState::LostRock);
        assert!(matrix.get(ChainState::WonPaper, ChainState::LostRock) > 1.0 / 6.0);
    }

    #[test]
    fn test_update_touches_only_one_row() {
        let mut matrix = TransitionMatrix::uniform();
        matrix.update(ChainState::WonPaper, ChainState::LostRock);
        for state in ChainState::ALL.into_iter().skip(1) {
            for &cell in matrix.row(state) {
                assert_eq!(cell, 1.0 / 6.0);
            }
        }
    }

    #[test]
    fn test_repeated_updates_approach_one() {
        let mut matrix = TransitionMatrix::uniform();
        let mut last = matrix.get(ChainState::LostRock, ChainState::WonScissors);
        for _ in 0..500 {
            matrix.update(ChainState::LostRock, ChainState::WonScissors);
            let current = matrix.get(ChainState::LostRock, ChainState::WonScissors);
            assert!(current >= last);
            assert!(current <= 1.0);
            last = current;
        }
        assert!(last > 0.99);
    }

    #[test]
    fn test_unobserved_cells_decay_but_never_go_negative() {
        let mut matrix = TransitionMatrix::uniform();
        for _ in 0..500 {
            matrix.update(ChainState::LostRock, ChainState::WonScissors);
            for (column, &cell) in matrix.row(ChainState::LostRock).iter().enumerate() {
                assert!(cell >= 0.0);
                if column != ChainState::WonScissors.index() {
                    assert!(cell <= 1.0 / 6.0);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_row_resets_to_uniform() {
        let mut matrix = TransitionMatrix::uniform();
        // Concentrate the row on one cell, zeroing the others via the clamp.
        matrix.update_with(ChainState::WonRock, ChainState::WonRock, 10.0, 1.0);
        assert_eq!(matrix.get(ChainState::WonRock, ChainState::WonRock), 1.0);
        // Now reinforce a zeroed cell by nothing while decaying the rest away.
        matrix.update_with(ChainState::WonRock, ChainState::LostPaper, 0.0, 1.0);
        for &cell in matrix.row(ChainState::WonRock) {
            assert_eq!(cell, 1.0 / 6.0);
        }
    }

    #[test]
    fn test_predict_sums_adjacent_pairs() {
        let matrix =
            TransitionMatrix::from_rows(rows_with_first([0.5, 0.5, 0.0, 0.0, 0.0, 0.0])).unwrap();
        assert_eq!(matrix.predict(ChainState::WonPaper), 0);

        let matrix =
            TransitionMatrix::from_rows(rows_with_first([0.1, 0.1, 0.0, 0.1, 0.3, 0.4])).unwrap();
        assert_eq!(matrix.predict(ChainState::WonPaper), 2);
    }

    #[test]
    fn test_predict_ties_break_to_first_maximum() {
        let matrix = TransitionMatrix::uniform();
        for state in ChainState::ALL {
            assert_eq!(matrix.predict(state), 0);
        }

        // Pairs 1 and 2 share the maximum; the scan keeps the earlier one.
        let matrix =
            TransitionMatrix::from_rows(rows_with_first([0.0, 0.2, 0.2, 0.2, 0.2, 0.2])).unwrap();
        assert_eq!(matrix.predict(ChainState::WonPaper), 1);
    }

    #[test]
    fn test_predicted_throw_uses_category_table() {
        let matrix = TransitionMatrix::uniform();
        assert_eq!(
            matrix.predicted_throw(ChainState::WonPaper),
            CATEGORY_MOVES[0]
        );
    }

    #[test]
    fn test_from_rows_rejects_negative_cell() {
        let result =
            TransitionMatrix::from_rows(rows_with_first([-0.1, 0.3, 0.2, 0.2, 0.2, 0.2]));
        assert!(matches!(result, Err(Error::CellOutOfRange { .. })));
    }

    #[test]
    fn test_from_rows_rejects_bad_row_sum() {
        let result = TransitionMatrix::from_rows(rows_with_first([0.5; STATE_COUNT]));
        assert!(matches!(result, Err(Error::RowSum { row: 0, .. })));
    }
}
