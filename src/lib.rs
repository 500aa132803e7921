//! Adaptive opponent model for the rock/paper/scissors hand game
//!
//! This crate provides:
//! - A six-state Markov chain over (previous throw, won/lost) opponent states
//! - A heuristic reinforcement rule that sharpens transition estimates online
//! - A counter-throw policy derived from the learned transition matrix
//! - Plain-text persistence of the matrix across sessions
//! - A CLI for interactive play, batch simulation, and model inspection

pub mod adapters;
pub mod cli;
pub mod error;
pub mod game;
pub mod model;
pub mod opponents;
pub mod ports;
pub mod session;

pub use error::{Error, Result};
pub use game::{Move, RoundOutcome};
pub use model::{CATEGORY_MOVES, ChainState, HandOutcome, TransitionMatrix};
pub use session::{MatchConfig, MatchSession, MatchSummary, MatchVerdict, RoundReport};
