//! # squares-engine
//!
//! Board engine for "sports squares" pools: cells are sold to players,
//! random digits are assigned to rows and columns, and as a live game
//! progresses the cell matching the last digits of the score wins a share
//! of the pot.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Every operation takes the `Board` it works on.
//!    There is no global "current board".
//!
//! 2. **Integer Money**: Prices, pots and payouts are `u64` minor units;
//!    payout fractions are basis points.
//!
//! 3. **One Owner Per Cell**: Claims need `&mut Board`. Shared boards live
//!    behind a per-board lock in a `BoardStore`, which serializes claims.
//!
//! 4. **Reproducible Draws**: Header digits come from a seeded ChaCha8
//!    stream recorded on the board.
//!
//! ## Modules
//!
//! - `core`: Ids, errors, RNG, configuration
//! - `board`: Shapes, cells, header digits, the `Board` aggregate
//! - `ledger`: Selections and claims
//! - `resolve`: Winner resolution per shape
//! - `payout`: Pot and payout math
//! - `lifecycle`: Status state machine and score updates
//! - `store`: Persistence contract, in-memory store, snapshots
//!
//! ## Example
//!
//! ```
//! use squares_engine::{Board, BoardSettings, BoardShape, CellCoord, Claimant, ScoreUpdate, ScoringPeriod};
//!
//! let mut board = Board::create(BoardShape::TenByTen, BoardSettings::new("Office pool")).unwrap();
//! board.open().unwrap();
//! board.claim(CellCoord::new(3, 5), &Claimant::new("u1", "Alice")).unwrap();
//! board.lock().unwrap();
//!
//! let result = board.apply_score_update(ScoreUpdate::new(13, 25, ScoringPeriod(0))).unwrap();
//! assert_eq!(result.matched.len(), 1);
//! ```

pub mod board;
pub mod core;
pub mod ledger;
pub mod lifecycle;
pub mod payout;
pub mod resolve;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    BoardId, Claimant, ConfigError, DigitRng, EngineConfig, Result, SquaresError, UserId,
};

pub use crate::board::{
    Board, BoardSettings, BoardShape, Cell, CellCoord, DrawTiming, HeaderLabel, Headers,
    Ownership, ScoringPeriod, Sport,
};

pub use crate::ledger::{ClaimOutcome, PaymentPayload, Selection};

pub use crate::lifecycle::BoardStatus;

pub use crate::payout::{payout_for_period, pot_total, PayoutSchedule, WinnerPayout};

pub use crate::resolve::{PeriodResult, ScoreUpdate, WinnerShare};

pub use crate::store::{BoardSnapshot, BoardStore, InMemoryBoardStore};
