//! Board status and the legal transitions between statuses.
//!
//! ```text
//! Draft -> Open -> Locked -> InProgress -> Completed
//!   \        \        \
//!    +--------+--------+--> Cancelled
//! ```
//!
//! Transitions only move forward. `Completed` and `Cancelled` are terminal.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    Draft,
    Open,
    Locked,
    InProgress,
    Completed,
    Cancelled,
}

impl BoardStatus {
    /// Check whether `self -> to` is a legal transition.
    #[must_use]
    pub fn can_transition_to(self, to: BoardStatus) -> bool {
        use BoardStatus::*;
        matches!(
            (self, to),
            (Draft, Open)
                | (Open, Locked)
                | (Locked, InProgress)
                | (InProgress, Completed)
                | (Draft | Open | Locked, Cancelled)
        )
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, BoardStatus::Completed | BoardStatus::Cancelled)
    }

    /// Claims and selections are only accepted while open.
    #[must_use]
    pub fn accepts_claims(self) -> bool {
        self == BoardStatus::Open
    }

    /// Winners can be resolved once claiming has closed.
    #[must_use]
    pub fn allows_resolution(self) -> bool {
        matches!(self, BoardStatus::Locked | BoardStatus::InProgress)
    }

    pub const ALL: [BoardStatus; 6] = [
        BoardStatus::Draft,
        BoardStatus::Open,
        BoardStatus::Locked,
        BoardStatus::InProgress,
        BoardStatus::Completed,
        BoardStatus::Cancelled,
    ];
}

impl std::fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
