use serde::Serialize;

use crate::types::ScoreRecord;

/// Observer-facing view of a score record, with the derived level filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ScoreSnapshot {
    pub score: u64,
    pub lines: u64,
    pub level: u64,
    pub back_to_back: bool,
}

impl From<ScoreRecord> for ScoreSnapshot {
    fn from(value: ScoreRecord) -> Self {
        Self {
            score: value.score,
            lines: value.lines_cleared,
            level: value.level(),
            back_to_back: value.last_cleared_tetris,
        }
    }
}
