//! Board persistence contract.
//!
//! The engine does not care how boards are stored, only that a store can
//! fetch and save a whole board by id, and that `update` gives a closure
//! exclusive access to one board. Claims routed through `update` are
//! therefore serialized per board.

pub mod memory;
pub mod snapshot;

pub use memory::InMemoryBoardStore;
pub use snapshot::{BoardSnapshot, SNAPSHOT_VERSION};

use crate::board::{Board, CellCoord};
use crate::core::{BoardId, Claimant, Result};
use crate::ledger::{ClaimOutcome, Selection};
use crate::resolve::{PeriodResult, ScoreUpdate};

/// Storage for board aggregates.
pub trait BoardStore: Send + Sync {
    /// Fetch a copy of a board.
    fn get(&self, id: BoardId) -> Result<Board>;

    /// Insert or replace a board. Fails with `StaleBoard` if the stored
    /// board has a newer version.
    fn put(&self, board: Board) -> Result<()>;

    /// Delete a board, returning it.
    fn remove(&self, id: BoardId) -> Result<Board>;

    /// Run `f` with exclusive access to a board.
    ///
    /// Changes are committed only if `f` returns `Ok`.
    fn update<R, F>(&self, id: BoardId, f: F) -> Result<R>
    where
        F: FnOnce(&mut Board) -> Result<R>;

    // === Serialized engine operations ===

    fn claim(&self, id: BoardId, coord: CellCoord, claimant: &Claimant) -> Result<()> {
        self.update(id, |board| board.claim(coord, claimant))
    }

    fn claim_selected(&self, id: BoardId, selection: &mut Selection, claimant: &Claimant) -> Result<ClaimOutcome> {
        self.update(id, |board| board.claim_selected(selection, claimant))
    }

    fn apply_score_update(&self, id: BoardId, update: ScoreUpdate) -> Result<PeriodResult> {
        self.update(id, |board| board.apply_score_update(update))
    }

    /// Encode a board for an external store.
    fn export_snapshot(&self, id: BoardId) -> Result<Vec<u8>> {
        BoardSnapshot::new(self.get(id)?).encode()
    }

    /// Load a board from an encoded snapshot. Returns its id.
    fn import_snapshot(&self, bytes: &[u8]) -> Result<BoardId> {
        let board = BoardSnapshot::decode(bytes)?.board;
        let id = board.id();
        self.put(board)?;
        Ok(id)
    }
}
