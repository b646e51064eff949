//! The move/outcome model and per-session bookkeeping.
//!
//! Everything here is small, total, and synchronous: three symbols in a fixed
//! beats-cycle, a three-way round outcome, the opponent's memory of what the
//! player has thrown so far, and the running score. Strategy selection and
//! the round loop live elsewhere and drive these types exactly once per round.

pub mod outcome;
pub use outcome::*;

pub mod recall;
pub use recall::*;

pub mod round;
pub use round::*;

pub mod score;
pub use score::*;

pub mod symbol;
pub use symbol::*;
