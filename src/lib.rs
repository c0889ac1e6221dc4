//! Tetris score engine (workspace facade crate).
//!
//! Game loops depend on this package and reach the implementation through
//! `tetris_score::{types, core, engine}`; the code itself lives in dedicated crates under
//! `crates/`.

pub use tetris_score_core as core;
pub use tetris_score_engine as engine;
pub use tetris_score_types as types;
