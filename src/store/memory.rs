//! In-process board store.
//!
//! Each board sits behind its own `Mutex`, so contention is per board and
//! two boards never block each other. The outer `DashMap` only guards the
//! id -> board mapping and is never held while a board lock is taken.

use std::sync::{Arc, Mutex, MutexGuard};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::BoardStore;
use crate::board::Board;
use crate::core::{BoardId, Result, SquaresError};

type SharedBoard = Arc<Mutex<Board>>;

#[derive(Debug, Default)]
pub struct InMemoryBoardStore {
    boards: DashMap<BoardId, SharedBoard>,
}

impl InMemoryBoardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Ids of all stored boards.
    #[must_use]
    pub fn ids(&self) -> Vec<BoardId> {
        self.boards.iter().map(|entry| *entry.key()).collect()
    }

    fn shared(&self, id: BoardId) -> Result<SharedBoard> {
        self.boards
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(SquaresError::BoardNotFound(id))
    }
}

/// Lock a board. A poisoned lock still holds the last committed board
/// because `update` only writes back on success.
fn lock(board: &Mutex<Board>) -> MutexGuard<'_, Board> {
    board.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl BoardStore for InMemoryBoardStore {
    fn get(&self, id: BoardId) -> Result<Board> {
        let shared = self.shared(id)?;
        let board = lock(&shared).clone();
        Ok(board)
    }

    fn put(&self, board: Board) -> Result<()> {
        let id = board.id();
        let shared = match self.boards.entry(id) {
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(board)));
                tracing::debug!(board = %id, "stored new board");
                return Ok(());
            }
            Entry::Occupied(slot) => Arc::clone(slot.get()),
        };

        let mut stored = lock(&shared);
        if stored.version() > board.version() {
            return Err(SquaresError::StaleBoard {
                id,
                stored: stored.version(),
                incoming: board.version(),
            });
        }
        *stored = board;
        tracing::debug!(board = %id, "stored board");
        Ok(())
    }

    fn remove(&self, id: BoardId) -> Result<Board> {
        let (_, shared) = self
            .boards
            .remove(&id)
            .ok_or(SquaresError::BoardNotFound(id))?;
        let board = lock(&shared).clone();
        Ok(board)
    }

    fn update<R, F>(&self, id: BoardId, f: F) -> Result<R>
    where
        F: FnOnce(&mut Board) -> Result<R>,
    {
        let shared = self.shared(id)?;
        let mut stored = lock(&shared);
        // Work on a copy (O(1) thanks to `im`) so a failed closure leaves
        // no partial writes behind.
        let mut working = stored.clone();
        let result = f(&mut working)?;
        *stored = working;
        Ok(result)
    }
}
