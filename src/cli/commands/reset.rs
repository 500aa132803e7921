//! Reset command - Overwrite the stored matrix with the uniform prior

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::TextMatrixRepository, model::TransitionMatrix, ports::MatrixRepository,
};

#[derive(Parser, Debug)]
#[command(about = "Overwrite the stored matrix with the uniform prior")]
pub struct ResetArgs {
    /// Path to the stored transition matrix
    #[arg(long, short = 'm', default_value = "transition_matrix.txt")]
    pub matrix: PathBuf,
}

pub fn execute(args: ResetArgs) -> Result<()> {
    let repository = TextMatrixRepository::new();
    repository.save(&TransitionMatrix::uniform(), &args.matrix)?;
    println!(
        "Matrix at {} reset to the uniform prior.",
        args.matrix.display()
    );
    Ok(())
}
