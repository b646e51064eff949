/// One of the three symbols a hand can throw.
///
/// Declaration order doubles as the tie-break order for the count-based
/// strategies: Rock is preferred over Paper is preferred over Scissors
/// whenever usage counts are equal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves in declaration (tie-break) order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// Whether this move defeats the other. False on equality; the relation
    /// is the strict 3-cycle Rock > Scissors > Paper > Rock.
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }
    /// The unique move that defeats this one.
    pub const fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }
    /// Single-letter token, as keyed in the classic R/P/S notation.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Rock => "R",
            Self::Paper => "P",
            Self::Scissors => "S",
        }
    }
    /// How this move disposes of the one it beats.
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Rock => "breaks",
            Self::Paper => "covers",
            Self::Scissors => "cuts",
        }
    }
}

/// u8 isomorphism
impl From<u8> for Move {
    fn from(n: u8) -> Move {
        match n {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            _ => panic!("Invalid move u8: {}", n),
        }
    }
}
impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

/// str isomorphism, accepting the one-letter token or the full word
impl From<&str> for Move {
    fn from(s: &str) -> Self {
        match s {
            "R" | "Rock" => Move::Rock,
            "P" | "Paper" => Move::Paper,
            "S" | "Scissors" => Move::Scissors,
            _ => panic!("Invalid move str: {}", s),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Move::Rock => "Rock",
                Move::Paper => "Paper",
                Move::Scissors => "Scissors",
            }
        )
    }
}
