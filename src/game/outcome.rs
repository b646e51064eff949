use super::symbol::Move;

/// Who took the round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

/// Adjudication of a (player, computer) pair of moves. Equal moves tie;
/// otherwise exactly one side holds the beating move and wins.
impl From<(Move, Move)> for Outcome {
    fn from((player, computer): (Move, Move)) -> Self {
        if player == computer {
            Outcome::Tie
        } else if player.beats(computer) {
            Outcome::Player
        } else {
            Outcome::Computer
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::Player => "Player wins",
                Outcome::Computer => "Computer wins",
                Outcome::Tie => "Tie",
            }
        )
    }
}
