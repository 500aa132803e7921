//! The six-state space of the opponent chain
//!
//! A state pairs the opponent's previous throw with whether that throw won
//! or lost its round. Ties produce no transition and therefore no state.

use serde::{Deserialize, Serialize};

use crate::game::Move;

/// Number of chain states
pub const STATE_COUNT: usize = 6;

/// Number of column-pair categories used by prediction
pub const CATEGORY_COUNT: usize = 3;

/// Whether the tracked throw won or lost its round
///
/// Deliberately two-valued: a tied round leaves the chain where it is, so
/// there is nothing to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandOutcome {
    Won,
    Lost,
}

/// A state of the opponent chain: the previous throw plus its outcome
///
/// The discriminant order fixes the row and column layout of the transition
/// matrix: the three won states first, then the three lost states, with
/// paper, rock, scissors within each group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainState {
    WonPaper,
    WonRock,
    WonScissors,
    LostPaper,
    LostRock,
    LostScissors,
}

/// Opponent throw predicted by each column-pair category
///
/// Prediction reduces the six matrix columns to three adjacent pairs; this
/// table fixes which throw each pair stands for. The counter-throw policy
/// goes through this single constant, so encoding and move selection cannot
/// drift apart.
pub const CATEGORY_MOVES: [Move; CATEGORY_COUNT] = [Move::Rock, Move::Scissors, Move::Paper];

impl ChainState {
    /// All states in column order
    pub const ALL: [ChainState; STATE_COUNT] = [
        ChainState::WonPaper,
        ChainState::WonRock,
        ChainState::WonScissors,
        ChainState::LostPaper,
        ChainState::LostRock,
        ChainState::LostScissors,
    ];

    /// Map a throw and its outcome to the corresponding state
    ///
    /// Total over the six (throw, outcome) combinations; each combination
    /// maps to a distinct state.
    pub fn encode(throw: Move, outcome: HandOutcome) -> ChainState {
        match (outcome, throw) {
            (HandOutcome::Won, Move::Paper) => ChainState::WonPaper,
            (HandOutcome::Won, Move::Rock) => ChainState::WonRock,
            (HandOutcome::Won, Move::Scissors) => ChainState::WonScissors,
            (HandOutcome::Lost, Move::Paper) => ChainState::LostPaper,
            (HandOutcome::Lost, Move::Rock) => ChainState::LostRock,
            (HandOutcome::Lost, Move::Scissors) => ChainState::LostScissors,
        }
    }

    /// Row and column index of this state
    pub fn index(self) -> usize {
        self as usize
    }

    /// State at a given index
    pub fn from_index(index: usize) -> Option<ChainState> {
        Self::ALL.get(index).copied()
    }

    /// The throw this state records
    pub fn throw(self) -> Move {
        match self {
            ChainState::WonPaper | ChainState::LostPaper => Move::Paper,
            ChainState::WonRock | ChainState::LostRock => Move::Rock,
            ChainState::WonScissors | ChainState::LostScissors => Move::Scissors,
        }
    }

    /// The outcome this state records
    pub fn outcome(self) -> HandOutcome {
        match self {
            ChainState::WonPaper | ChainState::WonRock | ChainState::WonScissors => {
                HandOutcome::Won
            }
            ChainState::LostPaper | ChainState::LostRock | ChainState::LostScissors => {
                HandOutcome::Lost
            }
        }
    }

    /// Short label for tables and summaries
    pub fn label(self) -> &'static str {
        match self {
            ChainState::WonPaper => "won-paper",
            ChainState::WonRock => "won-rock",
            ChainState::WonScissors => "won-scissors",
            ChainState::LostPaper => "lost-paper",
            ChainState::LostRock => "lost-rock",
            ChainState::LostScissors => "lost-scissors",
        }
    }
}
