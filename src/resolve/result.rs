//! Score inputs and recorded period outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::{CellCoord, ScoringPeriod};
use crate::core::Claimant;

/// A parsed score from the live feed.
///
/// Scores are cumulative totals at the end of `period`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreUpdate {
    pub home: u32,
    pub away: u32,
    pub period: ScoringPeriod,
}

impl ScoreUpdate {
    #[must_use]
    pub const fn new(home: u32, away: u32, period: ScoringPeriod) -> Self {
        Self { home, away, period }
    }

    #[must_use]
    pub const fn home_digit(&self) -> u8 {
        (self.home % 10) as u8
    }

    #[must_use]
    pub const fn away_digit(&self) -> u8 {
        (self.away % 10) as u8
    }

    /// Shotgun digit: sum of both last digits, mod 10.
    #[must_use]
    pub const fn combined_digit(&self) -> u8 {
        (self.home_digit() + self.away_digit()) % 10
    }
}

/// An owned winning cell and its share of the period payout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerShare {
    pub cell: CellCoord,
    pub claimant: Claimant,
    pub amount: u64,
}

/// Outcome of one resolved scoring period.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodResult {
    pub score: ScoreUpdate,

    /// Every cell whose digits matched, owned or not.
    pub matched: Vec<CellCoord>,

    /// Owned matches and what each is owed.
    pub winners: Vec<WinnerShare>,

    /// Scheduled payout for the period.
    pub payout: u64,

    /// Part of `payout` kept by the house (unowned matches, split dust,
    /// or no match at all).
    pub retained: u64,

    pub resolved_at: DateTime<Utc>,
}

impl PeriodResult {
    #[must_use]
    pub fn period(&self) -> ScoringPeriod {
        self.score.period
    }

    /// Coordinates of owned winning cells.
    #[must_use]
    pub fn winning_cells(&self) -> Vec<CellCoord> {
        self.winners.iter().map(|w| w.cell).collect()
    }

    /// Total paid to players this period.
    #[must_use]
    pub fn paid_out(&self) -> u64 {
        self.winners.iter().map(|w| w.amount).sum()
    }
}
