//! Common test utilities for the roshambo test suite.
//!
//! This module provides seeded helpers for driving the transition matrix
//! through random update streams.

use rand::{Rng, rngs::StdRng};
use roshambo::{ChainState, TransitionMatrix};

/// Draw a uniformly random chain state.
pub fn random_state(rng: &mut StdRng) -> ChainState {
    ChainState::ALL[rng.random_range(0..ChainState::ALL.len())]
}

/// Apply `count` random transitions to `matrix`, chaining each next state
/// into the following update the way a session does.
///
/// # Returns
///
/// The visited (prev, next) pairs, in order.
pub fn drive_random_updates(
    matrix: &mut TransitionMatrix,
    rng: &mut StdRng,
    count: usize,
) -> Vec<(ChainState, ChainState)> {
    let mut transitions = Vec::with_capacity(count);
    let mut position = random_state(rng);
    for _ in 0..count {
        let next = random_state(rng);
        matrix.update(position, next);
        transitions.push((position, next));
        position = next;
    }
    transitions
}
