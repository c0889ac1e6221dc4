//! Score event replay tool.
//!
//! Reads one score event per line from stdin and prints the resulting score snapshot as JSON,
//! one object per applied event. Useful for checking a game loop's event stream by hand:
//!
//! ```text
//! clear 4      # lines cleared by one placement
//! soft 3       # soft drop, cells descended
//! hard 18      # hard drop, cells descended
//! points 50    # flat points
//! reset        # new game
//! ```
//!
//! Pass `--zero-clears-reset-streak` to let `clear 0` end a tetris streak.
//! Set `RUST_LOG=debug` to see every transition on stderr.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_score::engine::{ScoreKeeper, ZeroClearPolicy};
use tetris_score::types::{DropKind, ScoreEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplayCommand {
    Event(ScoreEvent),
    Reset,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let policy = if std::env::args()
        .skip(1)
        .any(|arg| arg == "--zero-clears-reset-streak")
    {
        ZeroClearPolicy::ResetStreak
    } else {
        ZeroClearPolicy::Skip
    };
    info!(policy = policy.as_str(), "score replay started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut keeper = ScoreKeeper::with_policy(policy);

    for (index, line) in stdin.lock().lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let Some(command) =
            parse_line(&line).with_context(|| format!("line {line_no}: {:?}", line.trim()))?
        else {
            continue;
        };

        match command {
            ReplayCommand::Event(event) => {
                keeper
                    .apply(event)
                    .with_context(|| format!("line {line_no}: event rejected"))?;
            }
            ReplayCommand::Reset => keeper.reset(),
        }

        serde_json::to_writer(&mut out, &keeper.snapshot())?;
        writeln!(out)?;
    }

    info!(
        score = keeper.current().score,
        lines = keeper.current().lines_cleared,
        "score replay finished"
    );
    Ok(())
}

/// Parse one replay line; blank lines and `#` comments yield `None`
fn parse_line(line: &str) -> Result<Option<ReplayCommand>> {
    let line = line.split('#').next().unwrap_or_default().trim();
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Ok(None);
    };

    let mut amount = || -> Result<u32> {
        let raw = parts.next().context("missing amount")?;
        raw.parse::<u32>()
            .with_context(|| format!("amount must be a non-negative integer, got {raw:?}"))
    };

    let command = match word.to_lowercase().as_str() {
        "clear" => ReplayCommand::Event(ScoreEvent::LinesCleared { lines: amount()? }),
        "points" => ReplayCommand::Event(ScoreEvent::Points { points: amount()? }),
        "reset" => ReplayCommand::Reset,
        other => match DropKind::from_str(other) {
            Some(kind) => ReplayCommand::Event(ScoreEvent::Drop {
                kind,
                cells: amount()?,
            }),
            None => bail!("unknown command {other:?}"),
        },
    };

    if let Some(extra) = parts.next() {
        bail!("unexpected trailing input {extra:?}");
    }
    Ok(Some(command))
}
