//! Pot and payout math.
//!
//! - `PayoutSchedule`: per-period fractions in basis points
//! - `pot_total` / `payout_for_period`: integer-only payout arithmetic
//! - `WinnerPayout`: settlement record handed to the payment collaborator

pub mod calculator;
pub mod schedule;

pub use calculator::{house_share, payout_for_period, period_payouts, pot_total, split_evenly};
pub use schedule::{PayoutSchedule, BPS_DENOMINATOR};

use serde::{Deserialize, Serialize};

use crate::board::{CellCoord, ScoringPeriod};
use crate::core::{BoardId, Claimant};

/// Amount owed to one winner for one period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerPayout {
    pub board_id: BoardId,
    pub period: ScoringPeriod,
    pub cell: CellCoord,
    pub claimant: Claimant,
    pub amount: u64,
}
