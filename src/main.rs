//! Interactive table binary.
//!
//! Prompts for a move, answers it with whichever strategy the round's roll
//! lands on, and keeps score until you quit. Pass --seed to replay a session
//! move for move.

use clap::Parser;
use roboshambo::play::Table;

/// Rock-Paper-Scissors against a computer that studies your habits.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed the session for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    roboshambo::log();
    let args = Args::parse();
    let mut table = match args.seed {
        Some(seed) => Table::seeded(seed),
        None => Table::new(),
    };
    table.play();
}
