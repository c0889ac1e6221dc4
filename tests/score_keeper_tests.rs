//! Score keeper tests - the game loop's current-record slot

use std::sync::{Arc, Mutex};

use serde::Deserialize;
use tetris_score::core::ScoreError;
use tetris_score::engine::{ScoreKeeper, ZeroClearPolicy};
use tetris_score::types::{DropKind, ScoreEvent};

#[derive(Debug, Deserialize, PartialEq)]
struct ObservedScore {
    score: u64,
    lines: u64,
    level: u64,
    back_to_back: bool,
}

#[test]
fn test_keeper_plays_a_short_game() {
    let mut keeper = ScoreKeeper::new();
    let events = [
        ScoreEvent::Drop {
            kind: DropKind::Hard,
            cells: 18,
        },
        ScoreEvent::LinesCleared { lines: 4 },
        ScoreEvent::Drop {
            kind: DropKind::Soft,
            cells: 5,
        },
        ScoreEvent::LinesCleared { lines: 0 },
        ScoreEvent::LinesCleared { lines: 4 },
        ScoreEvent::LinesCleared { lines: 3 },
    ];

    for event in events {
        keeper.apply(event).unwrap();
    }

    let current = keeper.current();
    assert_eq!(current.score, 36 + 800 + 5 + 1200 + 500);
    assert_eq!(current.lines_cleared, 11);
    assert!(!current.last_cleared_tetris);
    assert_eq!(keeper.level(), 2);
}

#[test]
fn test_zero_clear_policy_decides_streak() {
    let mut skip = ScoreKeeper::new();
    let mut reset = ScoreKeeper::with_policy(ZeroClearPolicy::ResetStreak);

    for keeper in [&mut skip, &mut reset] {
        keeper.on_lines_cleared(4).unwrap();
        keeper.on_lines_cleared(0).unwrap();
        keeper.on_lines_cleared(4).unwrap();
    }

    assert_eq!(skip.current().score, 2000);
    assert_eq!(reset.current().score, 1600);
}

#[test]
fn test_rejected_clear_is_reported_and_ignored() {
    let mut keeper = ScoreKeeper::new();
    keeper.on_lines_cleared(2).unwrap();

    let err = keeper.apply(ScoreEvent::LinesCleared { lines: 6 }).unwrap_err();
    assert_eq!(err, ScoreError::InvalidLineCount { lines: 6 });
    assert_eq!(err.code(), "invalid_argument");
    assert_eq!(keeper.current().score, 300);
    assert_eq!(keeper.current().lines_cleared, 2);
}

#[test]
fn test_snapshot_json_for_observers() {
    let mut keeper = ScoreKeeper::new();
    keeper.on_lines_cleared(4).unwrap();
    keeper.on_drop(DropKind::Hard, 10).unwrap();

    let json = serde_json::to_string(&keeper.snapshot()).unwrap();
    let observed: ObservedScore = serde_json::from_str(&json).unwrap();
    assert_eq!(
        observed,
        ObservedScore {
            score: 820,
            lines: 4,
            level: 1,
            back_to_back: true,
        }
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_held_snapshots_survive_concurrent_replacement() {
    let keeper = Arc::new(Mutex::new(ScoreKeeper::new()));
    let before = keeper.lock().unwrap().current();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let keeper = Arc::clone(&keeper);
        handles.push(tokio::spawn(async move {
            for _ in 0..25 {
                let mut guard = keeper.lock().unwrap();
                guard.on_points(2).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let after = keeper.lock().unwrap().current();
    assert_eq!(after.score, 8 * 25 * 2);
    assert_eq!(keeper.lock().unwrap().events_applied(), 200);

    // A record copied out earlier is its own value.
    assert_eq!(before.score, 0);
    assert_eq!(before.lines_cleared, after.lines_cleared);
}
