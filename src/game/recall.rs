use super::symbol::Move;
use crate::Count;
use std::cmp::Reverse;

/// What the computer remembers about the player's throws this session:
/// usage counts per symbol and the most recent throw.
///
/// Counts only ever grow, and the dispatcher records each throw exactly once,
/// before any strategy is consulted. A fresh session remembers nothing: all
/// counts zero, no last throw.
#[derive(Debug, Default, Clone)]
pub struct Recall {
    counts: [Count; 3],
    last: Option<Move>,
}

impl Recall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the count for this throw and remember it as the latest.
    pub fn record(&mut self, played: Move) {
        self.counts[u8::from(played) as usize] += 1;
        self.last = Some(played);
    }

    /// How many times the player has thrown this symbol.
    pub fn count(&self, m: Move) -> Count {
        self.counts[u8::from(m) as usize]
    }

    /// The player's most recent throw, absent before the first round.
    pub fn last(&self) -> Option<Move> {
        self.last
    }

    /// Total throws recorded this session.
    pub fn total(&self) -> Count {
        self.counts.iter().sum()
    }

    /// The player's least-thrown symbol. Ties resolve to the earliest symbol
    /// in [Move::all] order, so Rock wins a three-way tie.
    pub fn scarcest(&self) -> Move {
        Move::all()
            .into_iter()
            .min_by_key(|m| self.count(*m))
            .expect("three moves")
    }

    /// The player's most-thrown symbol, with the same fixed tie-break order
    /// as [Self::scarcest]. Taken as a Reverse minimum because max_by_key
    /// keeps the last maximal element rather than the first.
    pub fn favorite(&self) -> Move {
        Move::all()
            .into_iter()
            .min_by_key(|m| Reverse(self.count(*m)))
            .expect("three moves")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thrown(throws: &[Move]) -> Recall {
        let mut recall = Recall::new();
        for m in throws {
            recall.record(*m);
        }
        recall
    }

    #[test]
    fn starts_empty() {
        let recall = Recall::new();
        assert!(recall.last().is_none());
        assert!(recall.total() == 0);
        for m in Move::all() {
            assert!(recall.count(m) == 0);
        }
    }

    #[test]
    fn records_counts_and_last() {
        let recall = thrown(&[Move::Rock, Move::Rock, Move::Paper]);
        assert!(recall.count(Move::Rock) == 2);
        assert!(recall.count(Move::Paper) == 1);
        assert!(recall.count(Move::Scissors) == 0);
        assert!(recall.last() == Some(Move::Paper));
        assert!(recall.total() == 3);
    }

    #[test]
    fn scarcest_strict_minimum() {
        let recall = thrown(&[Move::Rock, Move::Rock, Move::Paper]);
        assert!(recall.scarcest() == Move::Scissors);
    }

    #[test]
    fn favorite_strict_maximum() {
        let recall = thrown(&[Move::Rock, Move::Scissors, Move::Scissors]);
        assert!(recall.favorite() == Move::Scissors);
    }

    #[test]
    fn three_way_ties_prefer_rock() {
        let recall = thrown(&[Move::Rock, Move::Paper, Move::Scissors]);
        assert!(recall.scarcest() == Move::Rock);
        assert!(recall.favorite() == Move::Rock);
    }

    #[test]
    fn partial_ties_prefer_declaration_order() {
        // Rock and Paper tied on top, Scissors strictly least.
        let recall = thrown(&[Move::Paper, Move::Rock, Move::Paper, Move::Rock]);
        assert!(recall.scarcest() == Move::Scissors);
        assert!(recall.favorite() == Move::Rock);
        // Paper and Scissors tied at zero behind Rock.
        let recall = thrown(&[Move::Rock]);
        assert!(recall.scarcest() == Move::Paper);
        assert!(recall.favorite() == Move::Rock);
    }
}
