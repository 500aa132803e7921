//! The transition model: state space, matrix, update and prediction rules

pub mod matrix;
pub mod state;

pub use matrix::{DEFAULT_DECAY, DEFAULT_REINFORCEMENT, ROW_SUM_TOLERANCE, TransitionMatrix};
pub use state::{CATEGORY_COUNT, CATEGORY_MOVES, ChainState, HandOutcome, STATE_COUNT};
