//! Simulate command - Train the model against scripted opponents

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    adapters::TextMatrixRepository,
    opponents::{OpponentKind, OpponentPolicy},
    ports::MatrixRepository,
    session::{MatchConfig, MatchSession, MatchVerdict},
};

#[derive(Parser, Debug)]
#[command(about = "Play scripted matches to train the model")]
pub struct SimulateArgs {
    /// Path to the stored transition matrix
    #[arg(long, short = 'm', default_value = "transition_matrix.txt")]
    pub matrix: PathBuf,

    /// Opponent policy to play against
    #[arg(long, short = 'o', default_value = "random")]
    pub opponent: String,

    /// Number of matches to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub matches: usize,

    /// Rounds after which an undecided match ends
    #[arg(long, default_value_t = 30)]
    pub rounds: usize,

    /// Score that ends a match immediately
    #[arg(long, default_value_t = 10)]
    pub target: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the summary to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let kind = OpponentKind::parse(&args.opponent)?;

    let repository = TextMatrixRepository::new();
    let mut matrix = repository.load_or_uniform(&args.matrix);

    let config = MatchConfig {
        max_rounds: args.rounds,
        target_score: args.target,
        ..MatchConfig::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut opponent = kind.into_policy();

    println!("=== Simulation Configuration ===");
    println!("Opponent: {}", opponent.name());
    println!("Matches: {}", args.matches);
    println!(
        "Rounds per match: {} (target score {})",
        args.rounds, args.target
    );
    if let Some(seed) = args.seed {
        println!("Seed: {seed}");
    }

    let progress = ProgressBar::new(args.matches as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} matches (W:{msg})")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?
            .progress_chars("=>-"),
    );

    let mut engine_wins = 0usize;
    let mut opponent_wins = 0usize;
    let mut draws = 0usize;

    for played in 0..args.matches {
        let mut session = MatchSession::with_random_start(matrix, config, &mut rng)?;
        while !session.is_finished() {
            let throw = opponent.next_throw(&mut rng);
            let report = session.play_round(throw);
            opponent.observe(report.engine_move);
        }

        match session.summary().verdict {
            MatchVerdict::EngineWin => engine_wins += 1,
            MatchVerdict::OpponentWin => opponent_wins += 1,
            MatchVerdict::Drawn => draws += 1,
        }
        matrix = session.into_matrix();

        progress.set_position((played + 1) as u64);
        progress.set_message(format!("{engine_wins} L:{opponent_wins} D:{draws}"));
    }
    progress.finish_with_message(format!("{engine_wins} L:{opponent_wins} D:{draws}"));

    let total = args.matches.max(1) as f64;
    println!("\n=== Simulation Results ===");
    println!(
        "Engine wins: {engine_wins} ({:.1}%)",
        engine_wins as f64 / total * 100.0
    );
    println!(
        "Opponent wins: {opponent_wins} ({:.1}%)",
        opponent_wins as f64 / total * 100.0
    );
    println!("Draws: {draws} ({:.1}%)", draws as f64 / total * 100.0);

    repository.save(&matrix, &args.matrix)?;
    println!("Model saved to {}", args.matrix.display());

    if let Some(export_path) = &args.export {
        export_summary(
            export_path,
            &args,
            opponent.name(),
            engine_wins,
            opponent_wins,
            draws,
        )?;
        println!("\u{2713} Results exported to: {}", export_path.display());
    }

    Ok(())
}

/// Export the simulation summary to JSON
fn export_summary(
    path: &Path,
    args: &SimulateArgs,
    opponent_name: &str,
    engine_wins: usize,
    opponent_wins: usize,
    draws: usize,
) -> Result<()> {
    #[derive(Serialize)]
    struct SimulationExport {
        simulation: SimulationSection,
    }

    #[derive(Serialize)]
    struct SimulationSection {
        matrix_file: String,
        opponent: String,
        matches: usize,
        rounds_per_match: usize,
        target_score: usize,
        engine_wins: usize,
        opponent_wins: usize,
        draws: usize,
        engine_win_rate: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    }

    let export = SimulationExport {
        simulation: SimulationSection {
            matrix_file: args.matrix.display().to_string(),
            opponent: opponent_name.to_string(),
            matches: args.matches,
            rounds_per_match: args.rounds,
            target_score: args.target,
            engine_wins,
            opponent_wins,
            draws,
            engine_win_rate: engine_wins as f64 / args.matches.max(1) as f64,
            seed: args.seed,
        },
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
