/// The terminal seat across from the computer. Owns the session and runs the
/// prompt loop: map a menu pick to a move, play the round, print the result
/// line and the running totals, leave on Quit.
pub struct Table {
    session: Session<SmallRng>,
}

impl Table {
    pub fn new() -> Self {
        Table {
            session: Session::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Table {
            session: Session::seeded(seed),
        }
    }

    /// Prompt, play, report, repeat.
    pub fn play(&mut self) {
        log::info!("table open, Quit leaves the table");
        while let Some(played) = self.prompt() {
            let round = self.session.play(played);
            self.report(&round);
        }
        log::info!(
            "table closed after {} rounds. {}",
            self.session.score().total(),
            self.session.score()
        );
    }

    fn prompt(&self) -> Option<Move> {
        let choices = ["Rock", "Paper", "Scissors", "Quit"];
        let selection = Select::new()
            .with_prompt("Choose your move")
            .report(false)
            .items(choices.as_slice())
            .default(0)
            .interact()
            .unwrap();
        match choices[selection] {
            "Quit" => None,
            word => Some(Move::from(word)),
        }
    }

    fn report(&self, round: &Round) {
        let line = match round.outcome {
            Outcome::Player => round.to_string().green(),
            Outcome::Computer => round.to_string().red(),
            Outcome::Tie => round.to_string().yellow(),
        };
        println!("{}", line);
        println!("{}", format!("   {}", round.score).white());
    }
}

use colored::*;
use crate::game::outcome::Outcome;
use crate::game::round::Round;
use crate::game::symbol::Move;
use dialoguer::Select;
use rand::rngs::SmallRng;
use super::session::Session;
