//! Board lifecycle: which operations are legal when.
//!
//! - `BoardStatus`: the state machine
//! - `Board::{open, lock, start, complete, cancel}`: guarded transitions
//! - `Board::apply_score_update`: live-score entry point during play

pub mod scoring;
pub mod status;
pub mod transitions;

pub use status::BoardStatus;
