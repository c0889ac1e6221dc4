//! Score types module - shared data structures and scoring constants
//!
//! This module defines the fundamental types used by the score engine and the game loops that
//! drive it. All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, keeper, replay tooling, rendering collaborators).
//!
//! # Line Clear Scoring
//!
//! Base points for a single clearing event, before the level multiplier:
//!
//! | Rows | Points | Back-to-back |
//! |------|--------|--------------|
//! | 0 | 0 | - |
//! | 1 | 100 | - |
//! | 2 | 300 | - |
//! | 3 | 500 | - |
//! | 4 | 800 | 1200 |
//!
//! Points are multiplied by the level the player was on *before* the clear was counted.
//!
//! # Leveling
//!
//! Level starts at 1 and increases every 10 cleared lines: `lines / 10 + 1`.
//!
//! # Drop Scoring
//!
//! - Soft drop: 1 point per cell descended
//! - Hard drop: 2 points per cell descended
//!
//! # Examples
//!
//! ```
//! use tetris_score_types::{DropKind, ScoreRecord, LINE_CLEAR_POINTS, LINES_PER_LEVEL};
//!
//! // Fresh record at game start
//! let record = ScoreRecord::new();
//! assert_eq!(record.score, 0);
//! assert_eq!(record.lines_cleared, 0);
//! assert!(!record.last_cleared_tetris);
//!
//! // Parse a drop kind (case-insensitive)
//! assert_eq!(DropKind::from_str("Hard"), Some(DropKind::Hard));
//!
//! // Rule constants
//! assert_eq!(LINE_CLEAR_POINTS[4], 800);
//! assert_eq!(LINES_PER_LEVEL, 10);
//! ```

/// Line clear scoring table
///
/// Index is the number of rows cleared in one placement (0-4).
/// A 4-row clear uses [`BACK_TO_BACK_TETRIS_POINTS`] instead when the previous clear was
/// also a tetris.
pub const LINE_CLEAR_POINTS: [u32; 5] = [0, 100, 300, 500, 800];

/// Base points for a tetris directly following another tetris
pub const BACK_TO_BACK_TETRIS_POINTS: u32 = 1200;

/// Rows cleared by a tetris
pub const TETRIS_LINES: u32 = 4;

/// Most rows a single placement can clear
pub const MAX_LINES_PER_CLEAR: u32 = 4;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u64 = 10;

/// Level of a new game
pub const STARTING_LEVEL: u64 = 1;

/// Points per cell for a soft drop
pub const SOFT_DROP_POINTS_PER_CELL: u32 = 1;

/// Points per cell for a hard drop
pub const HARD_DROP_POINTS_PER_CELL: u32 = 2;

/// Cumulative score for one game session
///
/// Records are plain values: every score transition returns a fresh record and the caller
/// replaces the one it holds. Nothing in this workspace mutates a record in place.
///
/// # Examples
///
/// ```
/// use tetris_score_types::ScoreRecord;
///
/// let record = ScoreRecord::default();
/// assert_eq!(record, ScoreRecord::new());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreRecord {
    /// Cumulative points
    pub score: u64,
    /// Cumulative rows cleared across the game
    pub lines_cleared: u64,
    /// Whether the most recent line-clearing event was a tetris
    pub last_cleared_tetris: bool,
}

impl ScoreRecord {
    /// Zero-value record for the start of a game
    pub const fn new() -> Self {
        Self {
            score: 0,
            lines_cleared: 0,
            last_cleared_tetris: false,
        }
    }

    /// Current level, derived from cleared lines (starts at 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_score_types::ScoreRecord;
    ///
    /// let mut record = ScoreRecord::new();
    /// assert_eq!(record.level(), 1);
    ///
    /// record.lines_cleared = 19;
    /// assert_eq!(record.level(), 2);
    /// ```
    pub const fn level(&self) -> u64 {
        self.lines_cleared / LINES_PER_LEVEL + STARTING_LEVEL
    }
}

/// Player-initiated descent kinds
///
/// Gravity is not a drop kind: automatic descent scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropKind {
    /// Accelerated descent while the key is held
    Soft,
    /// Instant descent to the landing row
    Hard,
}

impl DropKind {
    /// Parse drop kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_score_types::DropKind;
    ///
    /// assert_eq!(DropKind::from_str("soft"), Some(DropKind::Soft));
    /// assert_eq!(DropKind::from_str("HARD"), Some(DropKind::Hard));
    /// assert_eq!(DropKind::from_str("gravity"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "soft" | "softdrop" => Some(DropKind::Soft),
            "hard" | "harddrop" => Some(DropKind::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            DropKind::Soft => "soft",
            DropKind::Hard => "hard",
        }
    }

    /// Points awarded per cell descended
    pub fn points_per_cell(&self) -> u32 {
        match self {
            DropKind::Soft => SOFT_DROP_POINTS_PER_CELL,
            DropKind::Hard => HARD_DROP_POINTS_PER_CELL,
        }
    }
}

/// Scoring-relevant events reported by the game loop
///
/// The game loop decides *when* these happen; the score engine only turns them into records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// A placement cleared `lines` rows at once
    LinesCleared { lines: u32 },
    /// The player dropped the active piece `cells` rows
    Drop { kind: DropKind, cells: u32 },
    /// Flat, unleveled points already scaled by the caller
    Points { points: u32 },
}

impl ScoreEvent {
    /// Short event name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreEvent::LinesCleared { .. } => "linesCleared",
            ScoreEvent::Drop { .. } => "drop",
            ScoreEvent::Points { .. } => "points",
        }
    }
}
