//! Cells: the purchasable units of a board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::shape::CellCoord;
use super::sport::ScoringPeriod;
use crate::core::{Claimant, UserId};

/// Who owns a cell, and since when.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    pub claimant: Claimant,
    pub claimed_at: DateTime<Utc>,
}

/// A single cell. Cells exist only inside their board.
///
/// Invariants:
/// - at most one owner; ownership is never overwritten
/// - `winning_periods` only grows and holds no duplicates
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: CellCoord,
    owner: Option<Ownership>,
    winning_periods: SmallVec<[ScoringPeriod; 2]>,
}

impl Cell {
    /// Create an unclaimed, unwon cell.
    #[must_use]
    pub fn new(coord: CellCoord) -> Self {
        Self {
            coord,
            owner: None,
            winning_periods: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn owner(&self) -> Option<&Ownership> {
        self.owner.as_ref()
    }

    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    #[must_use]
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner
            .as_ref()
            .is_some_and(|o| &o.claimant.user_id == user)
    }

    #[must_use]
    pub fn is_winner(&self) -> bool {
        !self.winning_periods.is_empty()
    }

    /// Periods this cell won, in resolution order.
    #[must_use]
    pub fn winning_periods(&self) -> &[ScoringPeriod] {
        &self.winning_periods
    }

    /// Set the owner if the cell is free. Returns `false` if already owned.
    pub(crate) fn assign_owner(&mut self, ownership: Ownership) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(ownership);
        true
    }

    /// Record a win. Returns `false` if this period was already recorded.
    pub(crate) fn mark_winner(&mut self, period: ScoringPeriod) -> bool {
        if self.winning_periods.contains(&period) {
            return false;
        }
        self.winning_periods.push(period);
        true
    }
}
