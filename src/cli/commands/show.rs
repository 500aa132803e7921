//! Show command - Inspect the stored transition matrix

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::TextMatrixRepository,
    cli::output,
    model::TransitionMatrix,
    ports::MatrixRepository,
};

#[derive(Parser, Debug)]
#[command(about = "Print the stored matrix and per-state predictions")]
pub struct ShowArgs {
    /// Path to the stored transition matrix
    #[arg(long, short = 'm', default_value = "transition_matrix.txt")]
    pub matrix: PathBuf,
}

pub fn execute(args: ShowArgs) -> Result<()> {
    let repository = TextMatrixRepository::new();
    let matrix = match repository.load(&args.matrix) {
        Ok(matrix) => {
            println!("Matrix loaded from {}", args.matrix.display());
            matrix
        }
        Err(error) => {
            println!(
                "No usable matrix at {} ({error}); showing the uniform prior.",
                args.matrix.display()
            );
            TransitionMatrix::uniform()
        }
    };

    println!("\n=== Transition Matrix ===");
    print!("{}", output::matrix_table(&matrix));

    println!("\n=== Predictions ===");
    print!("{}", output::prediction_table(&matrix));

    Ok(())
}
