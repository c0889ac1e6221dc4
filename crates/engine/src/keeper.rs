use tetris_score_core::{apply_event, new_score, Result, ScoreSnapshot};
use tetris_score_types::{DropKind, ScoreEvent, ScoreRecord};
use tracing::{debug, trace, warn};

/// What a placement that cleared no rows does to the back-to-back streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroClearPolicy {
    /// Not a clear event: the record is left as is and a tetris streak survives.
    #[default]
    Skip,
    /// Forward to `cleared_lines(0, ..)`, which ends a tetris streak.
    ResetStreak,
}

impl ZeroClearPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ZeroClearPolicy::Skip => "skip",
            ZeroClearPolicy::ResetStreak => "resetStreak",
        }
    }
}

/// The game loop's current score
///
/// Each event computes the next record with the pure engine and then replaces the held
/// record in one assignment. A rejected event leaves the held record untouched.
#[derive(Debug, Clone, Default)]
pub struct ScoreKeeper {
    current: ScoreRecord,
    policy: ZeroClearPolicy,
    events_applied: u32,
}

impl ScoreKeeper {
    /// Keeper for a new game with the default [`ZeroClearPolicy::Skip`]
    pub fn new() -> Self {
        Self::with_policy(ZeroClearPolicy::default())
    }

    pub fn with_policy(policy: ZeroClearPolicy) -> Self {
        Self {
            current: new_score(),
            policy,
            events_applied: 0,
        }
    }

    pub fn current(&self) -> ScoreRecord {
        self.current
    }

    pub fn policy(&self) -> ZeroClearPolicy {
        self.policy
    }

    pub fn level(&self) -> u64 {
        self.current.level()
    }

    /// Events that changed or were forwarded to the record since the last reset
    pub fn events_applied(&self) -> u32 {
        self.events_applied
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot::from(self.current)
    }

    /// Restart: the held record goes back to the new-game record
    pub fn reset(&mut self) {
        debug!(previous_score = self.current.score, "score reset");
        self.current = new_score();
        self.events_applied = 0;
    }

    pub fn on_lines_cleared(&mut self, lines: u32) -> Result<ScoreRecord> {
        self.apply(ScoreEvent::LinesCleared { lines })
    }

    pub fn on_drop(&mut self, kind: DropKind, cells: u32) -> Result<ScoreRecord> {
        self.apply(ScoreEvent::Drop { kind, cells })
    }

    pub fn on_points(&mut self, points: u32) -> Result<ScoreRecord> {
        self.apply(ScoreEvent::Points { points })
    }

    /// Apply one event and return the new current record
    pub fn apply(&mut self, event: ScoreEvent) -> Result<ScoreRecord> {
        let empty_clear = matches!(event, ScoreEvent::LinesCleared { lines: 0 });
        if empty_clear && self.policy == ZeroClearPolicy::Skip {
            trace!("empty placement skipped");
            return Ok(self.current);
        }

        match apply_event(event, self.current) {
            Ok(next) => Ok(self.commit(event, next)),
            Err(err) => {
                warn!(event = event.as_str(), code = err.code(), %err, "score event rejected");
                Err(err)
            }
        }
    }

    fn commit(&mut self, event: ScoreEvent, next: ScoreRecord) -> ScoreRecord {
        debug!(
            event = event.as_str(),
            gained = next.score - self.current.score,
            score = next.score,
            lines = next.lines_cleared,
            level = next.level(),
            back_to_back = next.last_cleared_tetris,
            "score event applied"
        );
        self.current = next;
        self.events_applied = self.events_applied.saturating_add(1);
        next
    }
}
