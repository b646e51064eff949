//! Turn-based play: the round dispatcher and the interactive table.

pub mod session;
pub use session::*;

pub mod table;
pub use table::*;
