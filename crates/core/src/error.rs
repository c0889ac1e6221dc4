use thiserror::Error;

/// Rejected score transitions
///
/// A failing transition produces no record; the caller's current record stays valid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("a single placement clears 0 to 4 lines, got {lines}")]
    InvalidLineCount { lines: u32 },
    #[error("score arithmetic overflowed")]
    Overflow,
}

impl ScoreError {
    /// Stable machine-readable error code
    pub fn code(self) -> &'static str {
        match self {
            ScoreError::InvalidLineCount { .. } => "invalid_argument",
            ScoreError::Overflow => "overflow",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;
