//! CLI entry point for Markov-chain image synthesis

use clap::Parser;
use markovtile::io::cli::{Cli, Pipeline};

fn main() -> markovtile::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut pipeline = Pipeline::new(cli);
    pipeline.run()
}
