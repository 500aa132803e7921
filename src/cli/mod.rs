//! CLI infrastructure for the hand-game engine
//!
//! This module provides the command-line interface for playing against the
//! learned model, training it against scripted opponents, and inspecting or
//! resetting the stored matrix.

pub mod commands;
pub mod output;
