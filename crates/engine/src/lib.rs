//! Score keeper for game loops.
//!
//! The score engine in `tetris-score-core` is a set of pure functions. A game loop still needs
//! one place that holds "the current record" and swaps it on every event; [`ScoreKeeper`] is
//! that slot.

pub mod keeper;

pub use keeper::{ScoreKeeper, ZeroClearPolicy};
