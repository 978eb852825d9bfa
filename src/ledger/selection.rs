//! Soft-hold selection.
//!
//! A `Selection` is one user's local, non-exclusive set of cells they intend
//! to claim. It never changes ownership; many users may select the same
//! cell. The authoritative answer always comes from the board's ledger,
//! and [`Selection::reconcile`] drops anything the ledger has since given
//! away.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, CellCoord};
use crate::core::BoardId;

/// One user's pending cells on one board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    board_id: Option<BoardId>,
    cells: FxHashSet<CellCoord>,
    limit: Option<usize>,
}

impl Selection {
    /// Empty selection for a board, without a size limit.
    #[must_use]
    pub fn new(board_id: BoardId) -> Self {
        Self {
            board_id: Some(board_id),
            cells: FxHashSet::default(),
            limit: None,
        }
    }

    /// Cap how many cells may be held at once.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Add a cell. Returns `false` (and changes nothing) if the board is
    /// not open, the cell is owned or off the board, or the limit is hit.
    /// Selecting an already selected cell returns `true`.
    pub fn select(&mut self, board: &Board, coord: CellCoord) -> bool {
        if !self.is_for(board) || !board.status().accepts_claims() {
            return false;
        }
        match board.cell(coord) {
            Some(cell) if !cell.is_owned() => {}
            _ => return false,
        }
        if self.cells.contains(&coord) {
            return true;
        }
        if self.limit.is_some_and(|limit| self.cells.len() >= limit) {
            tracing::debug!(board = %board.id(), cell = %coord, "selection limit reached");
            return false;
        }
        self.cells.insert(coord);
        true
    }

    /// Remove a cell. Returns `false` if the board is not open or the cell
    /// was not selected.
    pub fn deselect(&mut self, board: &Board, coord: CellCoord) -> bool {
        if !self.is_for(board) || !board.status().accepts_claims() {
            return false;
        }
        self.cells.remove(&coord)
    }

    /// Flip a cell between selected and not selected.
    pub fn toggle(&mut self, board: &Board, coord: CellCoord) -> bool {
        if self.cells.contains(&coord) {
            self.deselect(board, coord)
        } else {
            self.select(board, coord)
        }
    }

    /// Drop cells the ledger no longer offers. Returns the dropped cells.
    ///
    /// Once a board leaves `Open` the whole selection is dropped.
    pub fn reconcile(&mut self, board: &Board) -> Vec<CellCoord> {
        let mut dropped: Vec<CellCoord> = if board.status().accepts_claims() && self.is_for(board) {
            self.cells
                .iter()
                .copied()
                .filter(|&c| board.cell(c).map_or(true, |cell| cell.is_owned()))
                .collect()
        } else {
            self.cells.iter().copied().collect()
        };
        for coord in &dropped {
            self.cells.remove(coord);
        }
        dropped.sort_unstable();
        dropped
    }

    #[must_use]
    pub fn is_selected(&self, coord: CellCoord) -> bool {
        self.cells.contains(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Selected cells in row-major order.
    #[must_use]
    pub fn coords(&self) -> Vec<CellCoord> {
        let mut coords: Vec<_> = self.cells.iter().copied().collect();
        coords.sort_unstable();
        coords
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub(crate) fn remove(&mut self, coord: CellCoord) {
        self.cells.remove(&coord);
    }

    fn is_for(&self, board: &Board) -> bool {
        self.board_id.map_or(true, |id| id == board.id())
    }
}
