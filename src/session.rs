//! Match sessions: the game-loop state around the transition model
//!
//! A session owns the transition matrix for its lifetime, advances the chain
//! position after every non-tie round, and tracks score and round limits.
//! Persistence stays outside: callers load a matrix before the match and
//! save the one handed back after it.

use std::cmp::Ordering;

use rand::{Rng, rngs::StdRng};

use crate::{
    error::Error,
    game::{Move, RoundOutcome},
    model::{
        matrix::{DEFAULT_DECAY, DEFAULT_REINFORCEMENT, TransitionMatrix},
        state::{ChainState, HandOutcome, STATE_COUNT},
    },
};

/// Tunable parameters of a match
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Rounds after which an undecided match ends
    pub max_rounds: usize,
    /// Score that ends the match immediately
    pub target_score: usize,
    /// Reinforcement added to an observed transition
    pub reinforcement: f64,
    /// Decay subtracted from unobserved transitions
    pub decay: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_rounds: 30,
            target_score: 10,
            reinforcement: DEFAULT_REINFORCEMENT,
            decay: DEFAULT_DECAY,
        }
    }
}

impl MatchConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfiguration` for a zero round limit or
    /// target score, a non-positive reinforcement, or a negative decay.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_rounds == 0 {
            return Err(Error::InvalidConfiguration {
                message: "max_rounds must be at least 1".to_string(),
            });
        }
        if self.target_score == 0 {
            return Err(Error::InvalidConfiguration {
                message: "target_score must be at least 1".to_string(),
            });
        }
        if !self.reinforcement.is_finite() || self.reinforcement <= 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("reinforcement {} must be positive", self.reinforcement),
            });
        }
        if !self.decay.is_finite() || self.decay < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!("decay {} must be non-negative", self.decay),
            });
        }
        Ok(())
    }
}

/// What happened in one round
#[derive(Debug, Clone, Copy)]
pub struct RoundReport {
    pub engine_move: Move,
    pub opponent_move: Move,
    /// Outcome from the engine's perspective
    pub outcome: RoundOutcome,
    /// Chain transition recorded for this round; ties record none
    pub transition: Option<(ChainState, ChainState)>,
}

/// Final standing of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    EngineWin,
    OpponentWin,
    /// Scores level when the round limit expired
    Drawn,
}

/// Score line of a finished (or running) match
#[derive(Debug, Clone, Copy)]
pub struct MatchSummary {
    pub engine_score: usize,
    pub opponent_score: usize,
    pub rounds_played: usize,
    pub verdict: MatchVerdict,
}

/// A running match between the engine and one opponent
#[derive(Debug, Clone)]
pub struct MatchSession {
    matrix: TransitionMatrix,
    position: ChainState,
    config: MatchConfig,
    engine_score: usize,
    opponent_score: usize,
    rounds_played: usize,
}

impl MatchSession {
    /// Start a match from an explicit chain position
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(
        matrix: TransitionMatrix,
        config: MatchConfig,
        position: ChainState,
    ) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            matrix,
            position,
            config,
            engine_score: 0,
            opponent_score: 0,
            rounds_played: 0,
        })
    }

    /// Start a match from a uniformly random chain position
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_random_start(
        matrix: TransitionMatrix,
        config: MatchConfig,
        rng: &mut StdRng,
    ) -> crate::Result<Self> {
        let position = ChainState::ALL[rng.random_range(0..STATE_COUNT)];
        Self::new(matrix, config, position)
    }

    /// Opponent throw the model predicts for the next round
    pub fn predicted_throw(&self) -> Move {
        self.matrix.predicted_throw(self.position)
    }

    /// The engine's reply: the throw that beats the prediction
    pub fn engine_throw(&self) -> Move {
        self.predicted_throw().counter()
    }

    /// Play one round against `opponent_move`
    ///
    /// Scores the round, and on a non-tie records the observed transition
    /// and advances the chain position to the state encoding the opponent's
    /// throw and its actual outcome. Ties count toward the round limit but
    /// change neither score nor position.
    pub fn play_round(&mut self, opponent_move: Move) -> RoundReport {
        let engine_move = self.engine_throw();
        let outcome = engine_move.versus(opponent_move);

        match outcome {
            RoundOutcome::Win => self.engine_score += 1,
            RoundOutcome::Loss => self.opponent_score += 1,
            RoundOutcome::Tie => {}
        }

        let transition = match outcome.flip() {
            RoundOutcome::Tie => None,
            opponent_outcome => {
                let result = if opponent_outcome == RoundOutcome::Win {
                    HandOutcome::Won
                } else {
                    HandOutcome::Lost
                };
                let next = ChainState::encode(opponent_move, result);
                self.matrix.update_with(
                    self.position,
                    next,
                    self.config.reinforcement,
                    self.config.decay,
                );
                let prev = self.position;
                self.position = next;
                Some((prev, next))
            }
        };

        self.rounds_played += 1;

        RoundReport {
            engine_move,
            opponent_move,
            outcome,
            transition,
        }
    }

    /// Whether the match has ended
    pub fn is_finished(&self) -> bool {
        self.engine_score >= self.config.target_score
            || self.opponent_score >= self.config.target_score
            || self.rounds_played >= self.config.max_rounds
    }

    /// Current standing
    pub fn summary(&self) -> MatchSummary {
        let verdict = match self.engine_score.cmp(&self.opponent_score) {
            Ordering::Greater => MatchVerdict::EngineWin,
            Ordering::Less => MatchVerdict::OpponentWin,
            Ordering::Equal => MatchVerdict::Drawn,
        };
        MatchSummary {
            engine_score: self.engine_score,
            opponent_score: self.opponent_score,
            rounds_played: self.rounds_played,
            verdict,
        }
    }

    pub fn engine_score(&self) -> usize {
        self.engine_score
    }

    pub fn opponent_score(&self) -> usize {
        self.opponent_score
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Current chain position
    pub fn position(&self) -> ChainState {
        self.position
    }

    /// The learned matrix, for inspection mid-match
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Hand the matrix back when the match is over
    pub fn into_matrix(self) -> TransitionMatrix {
        self.matrix
    }
}
