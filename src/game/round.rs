use super::outcome::Outcome;
use super::score::Score;
use super::symbol::Move;
use crate::strategy::Strategy;

/// Everything the table needs to report one completed round: both moves, the
/// strategy the computer rolled, the adjudicated outcome, and the score as it
/// stood once the round was tallied. Built by the session, consumed by the
/// display, never retained.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub player: Move,
    pub computer: Move,
    pub strategy: Strategy,
    pub outcome: Outcome,
    pub score: Score,
}

/// The classic result line. Wins name the beating move first with its verb
/// ("Rock breaks Scissors", "Paper covers Rock", "Scissors cuts Paper")
/// regardless of which side threw it; the parenthetical names the winner and
/// the strategy the computer used.
impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.outcome {
            Outcome::Tie => write!(
                f,
                "{} ties {}. ({}! Computer: {})",
                self.player, self.computer, self.outcome, self.strategy
            ),
            Outcome::Player => write!(
                f,
                "{} {} {}. ({}! Computer: {})",
                self.player,
                self.player.verb(),
                self.computer,
                self.outcome,
                self.strategy
            ),
            Outcome::Computer => write!(
                f,
                "{} {} {}. ({}! Computer: {})",
                self.computer,
                self.computer.verb(),
                self.player,
                self.outcome,
                self.strategy
            ),
        }
    }
}
