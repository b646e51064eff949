//! The five policies the computer can answer with, and how one is drawn.
//!
//! Every round the dispatcher rolls 1..=100 and maps the roll through fixed
//! disjoint bands, so a cheat stays rare while an honestly random answer is
//! the single most likely draw. Each policy decides from the player's
//! recorded history; only Cheat peeks at the raw in-flight move instead, an
//! asymmetry kept faithful to the classic ruleset.

use crate::game::Move;
use crate::game::Recall;
use rand::Rng;

/// A policy answering the player's move. The variants form a closed set and
/// the dispatcher only ever produces them through the roll bands below.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// Defeats whatever the player just threw. The unfair branch.
    Cheat,
    /// Counters the player's least-thrown symbol.
    LeastUsed,
    /// Counters the player's most-thrown symbol.
    MostUsed,
    /// Repeats the player's previous throw verbatim.
    LastUsed,
    /// Uniformly random, history-blind.
    Random,
}

impl Strategy {
    /// Answer the player. `played` is the raw move of the round in flight,
    /// already recorded into `recall`; only Cheat consults it directly.
    /// LastUsed without a previous throw delegates to Random, so the decision
    /// is total even on a fresh recall.
    pub fn decide<R: Rng>(&self, played: Move, recall: &Recall, rng: &mut R) -> Move {
        match self {
            Self::Cheat => played.counter(),
            Self::LeastUsed => recall.scarcest().counter(),
            Self::MostUsed => recall.favorite().counter(),
            Self::LastUsed => match recall.last() {
                Some(last) => last,
                None => Self::Random.decide(played, recall, rng),
            },
            Self::Random => Move::from(rng.random_range(0..3u8)),
        }
    }
}

/// Roll bands. The bands partition 1..=100 exactly: no overlap, no gap.
/// Anything outside that domain is a caller bug, not a runtime condition.
impl From<u8> for Strategy {
    fn from(roll: u8) -> Self {
        match roll {
            001..=010 => Self::Cheat,
            011..=030 => Self::LeastUsed,
            031..=050 => Self::MostUsed,
            051..=070 => Self::LastUsed,
            071..=100 => Self::Random,
            _ => panic!("Invalid roll: {}", roll),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Strategy::Cheat => "Cheat",
                Strategy::LeastUsed => "Least Used",
                Strategy::MostUsed => "Most Used",
                Strategy::LastUsed => "Last Used",
                Strategy::Random => "Random",
            }
        )
    }
}
