//! Authoritative cell claims.
//!
//! A claim succeeds only if the board is `Open` and the cell has no owner.
//! Claims take `&mut Board`, so exclusive access to the board is the single
//! point of serialization: wrap a shared board in a lock (see
//! `store::InMemoryBoardStore`) and racing claims on one cell resolve to one
//! owner and `AlreadyClaimed` for everyone else.

use chrono::Utc;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::selection::Selection;
use crate::board::{Board, Cell, CellCoord, Ownership};
use crate::core::{BoardId, Claimant, Result, SquaresError, UserId};

/// Cells taken and cells skipped by a multi-cell claim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimOutcome {
    pub claimed: Vec<CellCoord>,
    /// Cells someone else owned by the time the claim ran.
    pub skipped: Vec<CellCoord>,
}

/// Data handed to the payment collaborator after a claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPayload {
    pub board_id: BoardId,
    pub claimant: Claimant,
    pub cells: Vec<CellCoord>,
    /// `price_per_cell × cells`, in minor units.
    pub amount: u64,
}

impl Board {
    /// Take ownership of one cell.
    pub fn claim(&mut self, coord: CellCoord, claimant: &Claimant) -> Result<()> {
        claimant.validate()?;
        self.ensure_open()?;

        let board_id = self.id;
        let cell = self.cell_mut(coord)?;
        let taken = cell.assign_owner(Ownership {
            claimant: claimant.clone(),
            claimed_at: Utc::now(),
        });
        if !taken {
            tracing::warn!(board = %board_id, cell = %coord, user = %claimant.user_id, "claim lost: cell already owned");
            return Err(SquaresError::AlreadyClaimed { cell: coord });
        }

        tracing::debug!(board = %board_id, cell = %coord, user = %claimant.user_id, "cell claimed");
        self.touch();
        Ok(())
    }

    /// Claim every free cell in `coords` for one claimant.
    ///
    /// Cells owned by someone else are skipped, not reported as errors. Any
    /// coordinate off the board fails the whole call before anything is
    /// claimed.
    pub fn claim_cells(&mut self, coords: &[CellCoord], claimant: &Claimant) -> Result<ClaimOutcome> {
        claimant.validate()?;
        self.ensure_open()?;
        if let Some(&bad) = coords.iter().find(|&&c| !self.shape.contains(c)) {
            return Err(SquaresError::CellOutOfRange { cell: bad });
        }

        let mut outcome = ClaimOutcome::default();
        let now = Utc::now();
        for &coord in coords {
            let cell = self.cell_mut(coord)?;
            let taken = cell.assign_owner(Ownership {
                claimant: claimant.clone(),
                claimed_at: now,
            });
            if taken {
                outcome.claimed.push(coord);
            } else if !outcome.claimed.contains(&coord) {
                outcome.skipped.push(coord);
            }
        }

        if !outcome.claimed.is_empty() {
            self.touch();
        }
        tracing::debug!(
            board = %self.id,
            user = %claimant.user_id,
            claimed = outcome.claimed.len(),
            skipped = outcome.skipped.len(),
            "claimed cells"
        );
        Ok(outcome)
    }

    /// Claim everything in a selection, then empty the selection.
    ///
    /// Cells taken by others since they were selected are skipped.
    pub fn claim_selected(&mut self, selection: &mut Selection, claimant: &Claimant) -> Result<ClaimOutcome> {
        let coords = selection.coords();
        let outcome = self.claim_cells(&coords, claimant)?;
        for coord in coords {
            selection.remove(coord);
        }
        Ok(outcome)
    }

    /// Payment data for cells just claimed by `claimant`.
    pub fn payment_payload(&self, claimant: &Claimant, cells: &[CellCoord]) -> Result<PaymentPayload> {
        let amount = self
            .settings
            .price_per_cell
            .checked_mul(cells.len() as u64)
            .ok_or(SquaresError::PotOverflow)?;
        Ok(PaymentPayload {
            board_id: self.id,
            claimant: claimant.clone(),
            cells: cells.to_vec(),
            amount,
        })
    }

    // === Queries ===

    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_owned()).count()
    }

    #[must_use]
    pub fn available_count(&self) -> usize {
        self.total_cells() - self.claimed_count()
    }

    #[must_use]
    pub fn is_sold_out(&self) -> bool {
        self.available_count() == 0
    }

    /// Cells owned by one user.
    pub fn cells_owned_by<'a>(&'a self, user: &'a UserId) -> impl Iterator<Item = &'a Cell> + 'a {
        self.cells.iter().filter(move |c| c.is_owned_by(user))
    }

    /// Distinct owners and how many cells each holds, by descending count.
    #[must_use]
    pub fn claimants(&self) -> Vec<(Claimant, usize)> {
        let mut counts: FxHashMap<&UserId, (&Claimant, usize)> = FxHashMap::default();
        for owner in self.cells.iter().filter_map(|c| c.owner()) {
            counts
                .entry(&owner.claimant.user_id)
                .or_insert((&owner.claimant, 0))
                .1 += 1;
        }
        let mut list: Vec<(Claimant, usize)> = counts
            .into_values()
            .map(|(claimant, n)| (claimant.clone(), n))
            .collect();
        list.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.user_id.cmp(&b.0.user_id)));
        list
    }

    fn ensure_open(&self) -> Result<()> {
        if self.status.accepts_claims() {
            Ok(())
        } else {
            Err(SquaresError::BoardNotOpen {
                status: self.status,
            })
        }
    }
}
