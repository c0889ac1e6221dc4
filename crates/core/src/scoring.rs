//! Scoring module - line clear, back-to-back and drop scoring rules
//!
//! Every function here is pure: it reads the record it is given and returns a new one.
//! Records are `Copy`, so the caller's record is never touched.
//!
//! Rules:
//! - Line clears score `LINE_CLEAR_POINTS[lines] * level`.
//! - A tetris directly after a tetris scores `BACK_TO_BACK_TETRIS_POINTS * level` instead.
//! - The multiplier is the level *before* the cleared lines are counted.
//! - Drop points are flat and never leveled.

use crate::error::{Result, ScoreError};
use crate::types::{
    DropKind, ScoreEvent, ScoreRecord, BACK_TO_BACK_TETRIS_POINTS, LINE_CLEAR_POINTS,
    MAX_LINES_PER_CLEAR, TETRIS_LINES,
};

/// Breakdown of one line-clearing event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearAward {
    /// Table points before the level multiplier (includes the back-to-back bonus).
    pub base_points: u32,
    /// Level the clear was scored at.
    pub level: u64,
    /// Points added to the score.
    pub points: u64,
    pub is_tetris: bool,
    /// Whether the back-to-back tetris table entry was used.
    pub back_to_back_applied: bool,
}

/// Record for a new game
pub fn new_score() -> ScoreRecord {
    ScoreRecord::new()
}

/// Level for a record: `lines_cleared / 10 + 1`, never below 1
pub fn level(score: ScoreRecord) -> u64 {
    score.level()
}

/// Base points for clearing `lines` rows at once
///
/// `back_to_back` only matters for a tetris.
pub fn line_clear_points(lines: u32, back_to_back: bool) -> Result<u32> {
    if lines > MAX_LINES_PER_CLEAR {
        return Err(ScoreError::InvalidLineCount { lines });
    }
    if lines == TETRIS_LINES && back_to_back {
        return Ok(BACK_TO_BACK_TETRIS_POINTS);
    }
    Ok(LINE_CLEAR_POINTS[lines as usize])
}

/// Score a clearing event against the record it happened on
pub fn score_line_clear(lines: u32, score: ScoreRecord) -> Result<ClearAward> {
    let is_tetris = lines == TETRIS_LINES;
    let back_to_back_applied = is_tetris && score.last_cleared_tetris;
    let base_points = line_clear_points(lines, score.last_cleared_tetris)?;
    let level = level(score);
    let points = u64::from(base_points)
        .checked_mul(level)
        .ok_or(ScoreError::Overflow)?;

    Ok(ClearAward {
        base_points,
        level,
        points,
        is_tetris,
        back_to_back_applied,
    })
}

/// Apply a placement that cleared `num_lines` rows
///
/// The back-to-back flag is overwritten with `num_lines == 4`, so calling this with 0 ends a
/// tetris streak. Game loops that want streaks to survive non-clearing placements should not
/// report them here.
pub fn cleared_lines(num_lines: u32, score: ScoreRecord) -> Result<ScoreRecord> {
    let award = score_line_clear(num_lines, score)?;

    Ok(ScoreRecord {
        score: score
            .score
            .checked_add(award.points)
            .ok_or(ScoreError::Overflow)?,
        lines_cleared: score
            .lines_cleared
            .checked_add(u64::from(num_lines))
            .ok_or(ScoreError::Overflow)?,
        last_cleared_tetris: award.is_tetris,
    })
}

/// Add flat points (manual descent); lines and the back-to-back flag are kept
pub fn add_points(points: u64, score: ScoreRecord) -> Result<ScoreRecord> {
    Ok(ScoreRecord {
        score: score.score.checked_add(points).ok_or(ScoreError::Overflow)?,
        ..score
    })
}

/// Calculate drop score
/// soft drop: +1 per cell
/// hard drop: +2 per cell
pub fn drop_points(kind: DropKind, cells: u32) -> u64 {
    u64::from(cells) * u64::from(kind.points_per_cell())
}

/// Apply one game-loop event
pub fn apply_event(event: ScoreEvent, score: ScoreRecord) -> Result<ScoreRecord> {
    match event {
        ScoreEvent::LinesCleared { lines } => cleared_lines(lines, score),
        ScoreEvent::Drop { kind, cells } => add_points(drop_points(kind, cells), score),
        ScoreEvent::Points { points } => add_points(u64::from(points), score),
    }
}
