//! roshambo CLI - Adaptive rock/paper/scissors engine
//!
//! This CLI provides a unified interface for:
//! - Playing interactive matches against the learned model
//! - Training the model against scripted opponents
//! - Inspecting the stored transition matrix
//! - Resetting the model to its uniform prior

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roshambo")]
#[command(version, about = "Adaptive rock/paper/scissors opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive match against the engine
    Play(roshambo::cli::commands::play::PlayArgs),

    /// Play scripted matches to train the model
    Simulate(roshambo::cli::commands::simulate::SimulateArgs),

    /// Print the stored matrix and per-state predictions
    Show(roshambo::cli::commands::show::ShowArgs),

    /// Overwrite the stored matrix with the uniform prior
    Reset(roshambo::cli::commands::reset::ResetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => roshambo::cli::commands::play::execute(args),
        Commands::Simulate(args) => roshambo::cli::commands::simulate::execute(args),
        Commands::Show(args) => roshambo::cli::commands::show::execute(args),
        Commands::Reset(args) => roshambo::cli::commands::reset::execute(args),
    }
}
