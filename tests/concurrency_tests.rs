//! Concurrent claim tests.
//!
//! Many threads race for the same cells through a shared store. Exactly one
//! claim per cell may succeed; every other attempt must see `AlreadyClaimed`.

use std::sync::{Arc, Barrier};
use std::thread;

use squares_engine::{
    Board, BoardId, BoardSettings, BoardShape, BoardStore, CellCoord, Claimant, InMemoryBoardStore,
    Selection, SquaresError,
};

fn open_board(store: &InMemoryBoardStore) -> BoardId {
    let mut board = Board::create(BoardShape::TenByTen, BoardSettings::new("Race").with_seed(9)).unwrap();
    board.open().unwrap();
    let id = board.id();
    store.put(board).unwrap();
    id
}

/// 16 threads claim (3, 5) at once: one winner, fifteen `AlreadyClaimed`.
#[test]
fn test_single_cell_race_has_one_winner() {
    let store = Arc::new(InMemoryBoardStore::new());
    let id = open_board(&store);
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let claimant = Claimant::new(format!("user-{i}"), format!("User {i}"));
                barrier.wait();
                store.claim(id, CellCoord::new(3, 5), &claimant)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let taken = results
        .iter()
        .filter(|r| matches!(r, Err(SquaresError::AlreadyClaimed { .. })))
        .count();
    assert_eq!(ok, 1);
    assert_eq!(taken, threads - 1);

    let board = store.get(id).unwrap();
    assert_eq!(board.claimed_count(), 1);
    let owner = board.cell(CellCoord::new(3, 5)).unwrap().owner().unwrap();
    let winner_index = results.iter().position(|r| r.is_ok()).unwrap();
    assert_eq!(owner.claimant.user_id.as_str(), format!("user-{winner_index}"));
}

/// Threads sweep every cell; ownership ends up partitioned with no overlap.
#[test]
fn test_full_board_sweep_partitions_cells() {
    let store = Arc::new(InMemoryBoardStore::new());
    let id = open_board(&store);
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let claimant = Claimant::new(format!("user-{i}"), format!("User {i}"));
                barrier.wait();
                BoardShape::TenByTen
                    .coords()
                    .filter(|&coord| store.claim(id, coord, &claimant).is_ok())
                    .count()
            })
        })
        .collect();

    let won: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(won, 100);

    let board = store.get(id).unwrap();
    assert!(board.is_sold_out());
    let per_claimant: usize = board.claimants().iter().map(|(_, n)| n).sum();
    assert_eq!(per_claimant, 100);
}

/// Overlapping selections claimed concurrently never double-sell a cell.
#[test]
fn test_overlapping_selections() {
    let store = Arc::new(InMemoryBoardStore::new());
    let id = open_board(&store);
    let snapshot = store.get(id).unwrap();

    let mut first = Selection::new(id);
    let mut second = Selection::new(id);
    for col in 0..6 {
        first.select(&snapshot, CellCoord::new(0, col));
    }
    for col in 4..10 {
        second.select(&snapshot, CellCoord::new(0, col));
    }

    let handles: Vec<_> = [("a", first), ("b", second)]
        .into_iter()
        .map(|(user, mut selection)| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                store
                    .claim_selected(id, &mut selection, &Claimant::new(user, user))
                    .unwrap()
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let claimed: usize = outcomes.iter().map(|o| o.claimed.len()).sum();
    let skipped: usize = outcomes.iter().map(|o| o.skipped.len()).sum();

    assert_eq!(claimed, 10);
    assert_eq!(skipped, 2);
    assert_eq!(store.get(id).unwrap().claimed_count(), 10);
}
