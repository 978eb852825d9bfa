//! Binary snapshots of a board for external persistence.
//!
//! Layout: bincode of `BoardSnapshot { format_version, board }`. The
//! format version is checked on decode so old snapshots fail loudly
//! instead of decoding into garbage.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{Result, SquaresError};

/// Current snapshot format.
pub const SNAPSHOT_VERSION: u16 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub format_version: u16,
    pub board: Board,
}

impl BoardSnapshot {
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            format_version: SNAPSHOT_VERSION,
            board,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let snapshot: BoardSnapshot = bincode::deserialize(bytes)?;
        if snapshot.format_version != SNAPSHOT_VERSION {
            return Err(SquaresError::Snapshot(format!(
                "unsupported snapshot version {}",
                snapshot.format_version
            )));
        }
        let board = &snapshot.board;
        if board.total_cells() != board.shape().total_cells() {
            return Err(SquaresError::Snapshot(format!(
                "{} board with {} cells",
                board.shape(),
                board.total_cells()
            )));
        }
        if let Some(headers) = snapshot.board.headers() {
            headers.validate(snapshot.board.shape())?;
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSettings, BoardShape, CellCoord};
    use crate::core::Claimant;

    #[test]
    fn test_snapshot_preserves_claims() {
        let mut board =
            Board::create(BoardShape::FiveByFive, BoardSettings::new("Snap").with_seed(12)).unwrap();
        board.open().unwrap();
        board
            .claim(CellCoord::new(1, 4), &Claimant::new("carol", "Carol"))
            .unwrap();

        let bytes = BoardSnapshot::new(board.clone()).encode().unwrap();
        let restored = BoardSnapshot::decode(&bytes).unwrap().board;

        assert_eq!(restored, board);
        assert!(restored.cell(CellCoord::new(1, 4)).unwrap().is_owned());
    }

    #[test]
    fn test_rejects_unknown_version() {
        let board = Board::create(BoardShape::Shotgun, BoardSettings::new("Old").with_seed(1)).unwrap();
        let mut snapshot = BoardSnapshot::new(board);
        snapshot.format_version = 99;
        let bytes = snapshot.encode().unwrap();
        assert!(matches!(
            BoardSnapshot::decode(&bytes),
            Err(SquaresError::Snapshot(_))
        ));
    }

    #[test]
    fn test_rejects_cell_count_mismatch() {
        let mut board =
            Board::create(BoardShape::TenByTen, BoardSettings::new("Cut").with_seed(3)).unwrap();
        board.cells.truncate(40);
        let bytes = BoardSnapshot::new(board).encode().unwrap();
        assert!(matches!(
            BoardSnapshot::decode(&bytes),
            Err(SquaresError::Snapshot(_))
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(BoardSnapshot::decode(&[1, 2, 3]).is_err());
    }
}
