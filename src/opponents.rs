//! Scripted opponents for batch simulation
//!
//! Each policy produces one throw per round. `Mirror` additionally watches
//! the engine's previous throw, so the session loop feeds every round's
//! engine move back through [`OpponentPolicy::observe`].

use rand::{Rng, rngs::StdRng};

use crate::{error::Error, game::Move};

/// A scripted opponent policy
pub trait OpponentPolicy: Send {
    /// Human-readable policy name
    fn name(&self) -> &str;

    /// Produce the throw for the next round
    fn next_throw(&mut self, rng: &mut StdRng) -> Move;

    /// Observe the engine's throw from the round just played
    fn observe(&mut self, _engine_move: Move) {}
}

/// Plays uniformly at random
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOpponent;

impl OpponentPolicy for RandomOpponent {
    fn name(&self) -> &str {
        "random"
    }

    fn next_throw(&mut self, rng: &mut StdRng) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }
}

/// Always plays the same throw
#[derive(Debug, Clone)]
pub struct FixedOpponent {
    throw: Move,
    name: String,
}

impl FixedOpponent {
    pub fn new(throw: Move) -> Self {
        Self {
            throw,
            name: format!("always-{throw}"),
        }
    }
}

impl OpponentPolicy for FixedOpponent {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_throw(&mut self, _rng: &mut StdRng) -> Move {
        self.throw
    }
}

/// Cycles rock, paper, scissors in order
#[derive(Debug, Clone, Default)]
pub struct CycleOpponent {
    cursor: usize,
}

impl CycleOpponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpponentPolicy for CycleOpponent {
    fn name(&self) -> &str {
        "cycle"
    }

    fn next_throw(&mut self, _rng: &mut StdRng) -> Move {
        let throw = Move::ALL[self.cursor % Move::ALL.len()];
        self.cursor += 1;
        throw
    }
}

/// Repeats the engine's previous throw
#[derive(Debug, Clone, Default)]
pub struct MirrorOpponent {
    last_seen: Option<Move>,
}

impl MirrorOpponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OpponentPolicy for MirrorOpponent {
    fn name(&self) -> &str {
        "mirror"
    }

    fn next_throw(&mut self, rng: &mut StdRng) -> Move {
        match self.last_seen {
            Some(throw) => throw,
            None => Move::ALL[rng.random_range(0..Move::ALL.len())],
        }
    }

    fn observe(&mut self, engine_move: Move) {
        self.last_seen = Some(engine_move);
    }
}

/// Selectable opponent kinds for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    Random,
    Rock,
    Paper,
    Scissors,
    Cycle,
    Mirror,
}

impl OpponentKind {
    /// CLI tokens accepted by [`OpponentKind::parse`]
    pub const EXPECTED: &'static str = "random, rock, paper, scissors, cycle, mirror";

    /// Parse a CLI token
    ///
    /// # Errors
    ///
    /// Returns `Error::ParseOpponent` for an unknown token.
    pub fn parse(input: &str) -> crate::Result<OpponentKind> {
        match input.trim().to_lowercase().as_str() {
            "random" => Ok(OpponentKind::Random),
            "rock" => Ok(OpponentKind::Rock),
            "paper" => Ok(OpponentKind::Paper),
            "scissors" => Ok(OpponentKind::Scissors),
            "cycle" => Ok(OpponentKind::Cycle),
            "mirror" => Ok(OpponentKind::Mirror),
            _ => Err(Error::ParseOpponent {
                input: input.trim().to_string(),
                expected: Self::EXPECTED.to_string(),
            }),
        }
    }

    /// Create the boxed policy this kind names
    pub fn into_policy(self) -> Box<dyn OpponentPolicy> {
        match self {
            OpponentKind::Random => Box::new(RandomOpponent),
            OpponentKind::Rock => Box::new(FixedOpponent::new(Move::Rock)),
            OpponentKind::Paper => Box::new(FixedOpponent::new(Move::Paper)),
            OpponentKind::Scissors => Box::new(FixedOpponent::new(Move::Scissors)),
            OpponentKind::Cycle => Box::new(CycleOpponent::new()),
            OpponentKind::Mirror => Box::new(MirrorOpponent::new()),
        }
    }
}
