//! Play command - Interactive match against the adaptive engine

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    adapters::TextMatrixRepository,
    game::{Move, RoundOutcome},
    ports::MatrixRepository,
    session::{MatchConfig, MatchSession, MatchVerdict},
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive match against the engine")]
pub struct PlayArgs {
    /// Path to the stored transition matrix
    #[arg(long, short = 'm', default_value = "transition_matrix.txt")]
    pub matrix: PathBuf,

    /// Rounds after which an undecided match ends
    #[arg(long, default_value_t = 30)]
    pub rounds: usize,

    /// Score that ends the match immediately
    #[arg(long, default_value_t = 10)]
    pub target: usize,

    /// Random seed for the initial chain position
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let repository = TextMatrixRepository::new();
    let matrix = repository.load_or_uniform(&args.matrix);

    let config = MatchConfig {
        max_rounds: args.rounds,
        target_score: args.target,
        ..MatchConfig::default()
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = MatchSession::with_random_start(matrix, config, &mut rng)?;

    println!(
        "First to {} points wins; {} rounds maximum.",
        args.target, args.rounds
    );

    let stdin = io::stdin();
    while !session.is_finished() {
        print!("Your throw (R for rock, P for paper, S for scissors): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nInput closed; ending the match early.");
            break;
        }

        let opponent_move = match Move::parse(&line) {
            Ok(throw) => throw,
            Err(error) => {
                println!("{error}");
                continue;
            }
        };

        let report = session.play_round(opponent_move);
        println!("Engine throws {}.", report.engine_move);
        match report.outcome {
            RoundOutcome::Win => println!("Engine takes the round."),
            RoundOutcome::Loss => println!("You take the round."),
            RoundOutcome::Tie => println!("Round tied."),
        }
        println!(
            "Score: you {} - engine {} ({} rounds played)",
            session.opponent_score(),
            session.engine_score(),
            session.rounds_played()
        );
    }

    let summary = session.summary();
    println!("\n=== Match Result ===");
    match summary.verdict {
        MatchVerdict::EngineWin => println!("Engine wins the match."),
        MatchVerdict::OpponentWin => println!("You win the match."),
        MatchVerdict::Drawn => println!("Match drawn at the round limit."),
    }
    println!(
        "Final score: you {} - engine {}",
        summary.opponent_score, summary.engine_score
    );

    repository.save(session.matrix(), &args.matrix)?;
    println!("Model saved to {}", args.matrix.display());

    Ok(())
}
