//! Console rendering helpers for matrices and predictions

use crate::model::{ChainState, TransitionMatrix};

/// Render the matrix as a labeled table with row sums.
pub fn matrix_table(matrix: &TransitionMatrix) -> String {
    let mut table = String::new();

    table.push_str(&format!("{:>14}", ""));
    for state in ChainState::ALL {
        table.push_str(&format!(" {:>13}", state.label()));
    }
    table.push_str(&format!(" {:>10}\n", "row sum"));

    for from in ChainState::ALL {
        table.push_str(&format!("{:>14}", from.label()));
        let row = matrix.row(from);
        for cell in row {
            table.push_str(&format!(" {cell:>13.6}"));
        }
        table.push_str(&format!(" {:>10.6}\n", row.iter().sum::<f64>()));
    }

    table
}

/// Render the predicted opponent throw and the engine's reply per state.
pub fn prediction_table(matrix: &TransitionMatrix) -> String {
    let mut table = String::new();
    for state in ChainState::ALL {
        let predicted = matrix.predicted_throw(state);
        table.push_str(&format!(
            "{:>14}  expects {:<8}  replies {}\n",
            state.label(),
            predicted.label(),
            predicted.counter().label()
        ));
    }
    table
}
