use super::outcome::Outcome;
use crate::Count;

/// Running session totals. Each round bumps exactly one tally; nothing ever
/// decrements, and nothing survives the process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    player: Count,
    computer: Count,
    ties: Count,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit the round to whoever took it.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Player => self.player += 1,
            Outcome::Computer => self.computer += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub const fn player(&self) -> Count {
        self.player
    }
    pub const fn computer(&self) -> Count {
        self.computer
    }
    pub const fn ties(&self) -> Count {
        self.ties
    }
    /// Rounds played so far.
    pub const fn total(&self) -> Count {
        self.player + self.computer + self.ties
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Player: {:>3}  Computer: {:>3}  Ties: {:>3}",
            self.player, self.computer, self.ties
        )
    }
}
