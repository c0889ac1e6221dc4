//! Score engine - pure, deterministic, and testable
//!
//! This crate contains the scoring rules of the game: turning line clears and manual drops into
//! new score records. It has **zero dependencies** on the board, pieces, UI or I/O, making it:
//!
//! - **Deterministic**: The same record and event always produce the same record
//! - **Immutable**: Transitions return a fresh [`ScoreRecord`](types::ScoreRecord); inputs are `Copy`
//! - **Exact**: Points add exactly; invalid line counts and `u64` overflow are rejected before any
//!   result exists
//!
//! # Module Structure
//!
//! - [`scoring`]: Line clear, back-to-back, level and drop scoring transitions
//! - [`snapshot`]: Serializable view of a record for observers
//! - [`error`]: Invalid-argument errors
//!
//! # Scoring Rules
//!
//! - **Line clears**: 100 / 300 / 500 / 800 points for 1-4 rows, times the current level
//! - **Back-to-back**: A tetris right after a tetris scores 1200 instead of 800
//! - **Level**: `lines / 10 + 1`, taken from the record *before* the clear
//! - **Drops**: Flat points supplied by the game loop (1 per soft-drop cell, 2 per hard-drop cell)
//!
//! # Example
//!
//! ```
//! use tetris_score_core::{add_points, cleared_lines, level, new_score};
//!
//! let score = new_score();
//! let score = cleared_lines(4, score).unwrap();
//! let score = cleared_lines(4, score).unwrap(); // back-to-back
//! let score = add_points(3, score).unwrap();
//!
//! assert_eq!(score.score, 800 + 1200 + 3);
//! assert_eq!(score.lines_cleared, 8);
//! assert_eq!(level(score), 1);
//! ```

pub mod error;
pub mod scoring;
pub mod snapshot;

pub use tetris_score_types as types;

// Re-export commonly used items for convenience
pub use error::{Result, ScoreError};
pub use scoring::{
    add_points, apply_event, cleared_lines, drop_points, level, line_clear_points, new_score,
    score_line_clear, ClearAward,
};
pub use snapshot::ScoreSnapshot;
