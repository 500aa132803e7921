//! Hand-game domain types: throws, round outcomes, and counter-throw logic

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the three throws of the hand game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All throws in a fixed order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Parse a console symbol
    ///
    /// Accepts the single letters `R`, `P`, `S` (either case) and the full
    /// throw names.
    ///
    /// # Errors
    ///
    /// Returns `Error::ParseMove` for any other input.
    pub fn parse(input: &str) -> crate::Result<Move> {
        match input.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Move::Rock),
            "p" | "paper" => Ok(Move::Paper),
            "s" | "scissors" => Ok(Move::Scissors),
            _ => Err(Error::ParseMove {
                input: input.trim().to_string(),
            }),
        }
    }

    /// Lowercase name of the throw
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The throw that defeats this one
    pub fn counter(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Whether this throw defeats `other`
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }

    /// Outcome of this throw against `other`, from this throw's perspective
    pub fn versus(self, other: Move) -> RoundOutcome {
        if self == other {
            RoundOutcome::Tie
        } else if self.beats(other) {
            RoundOutcome::Win
        } else {
            RoundOutcome::Loss
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a single round from one player's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
    Tie,
}

impl RoundOutcome {
    /// The same round seen from the other player's side
    pub fn flip(self) -> RoundOutcome {
        match self {
            RoundOutcome::Win => RoundOutcome::Loss,
            RoundOutcome::Loss => RoundOutcome::Win,
            RoundOutcome::Tie => RoundOutcome::Tie,
        }
    }
}
