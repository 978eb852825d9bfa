//! The board aggregate and its factory.
//!
//! A `Board` owns its cells, header digits and resolved period results.
//! Behaviour is split by concern across modules:
//! - `ledger`: claims and ownership queries
//! - `resolve`: winner resolution
//! - `lifecycle`: status transitions and score updates
//!
//! Cells are stored in an `im::Vector` so cloning a board (store reads,
//! snapshots) is O(1).

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::headers::Headers;
use super::settings::{BoardSettings, DrawTiming};
use super::shape::{BoardShape, CellCoord};
use crate::core::{BoardId, DigitRng, Result, SquaresError};
use crate::lifecycle::BoardStatus;
use crate::payout::{pot_total, PayoutSchedule};
use crate::resolve::PeriodResult;

/// One playable board tied to a sporting event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) id: BoardId,
    pub(crate) shape: BoardShape,
    pub(crate) settings: BoardSettings,
    pub(crate) payout_schedule: PayoutSchedule,
    pub(crate) headers: Option<Headers>,
    pub(crate) draw_seed: u64,
    pub(crate) status: BoardStatus,
    pub(crate) cells: Vector<Cell>,
    pub(crate) results: Vec<PeriodResult>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) locked_at: Option<DateTime<Utc>>,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) completed_at: Option<DateTime<Utc>>,
    pub(crate) cancelled_at: Option<DateTime<Utc>>,
    pub(crate) version: u64,
}

impl Board {
    /// Build an empty `Draft` board.
    ///
    /// Allocates `shape.total_cells()` unclaimed cells. Header digits are
    /// drawn now unless the settings defer them to `open`. The payout
    /// schedule is fixed here, from the settings or the shape default.
    pub fn create(shape: BoardShape, settings: BoardSettings) -> Result<Self> {
        settings.validate()?;
        pot_total(shape, settings.price_per_cell)?;
        let payout_schedule = settings.schedule_for(shape)?;

        let draw_seed = settings
            .seed
            .unwrap_or_else(|| DigitRng::from_entropy().seed());
        let cells: Vector<Cell> = shape.coords().map(Cell::new).collect();
        let now = Utc::now();

        let mut board = Self {
            id: BoardId::new(),
            shape,
            settings,
            payout_schedule,
            headers: None,
            draw_seed,
            status: BoardStatus::Draft,
            cells,
            results: Vec::new(),
            created_at: now,
            updated_at: now,
            locked_at: None,
            started_at: None,
            completed_at: None,
            cancelled_at: None,
            version: 0,
        };

        if board.settings.draw_timing == DrawTiming::OnCreate {
            board.draw_headers()?;
        }

        tracing::info!(
            board = %board.id,
            shape = %shape,
            cells = board.cells.len(),
            "created board {:?}",
            board.settings.name
        );
        Ok(board)
    }

    /// Draw header digits from the board's seed. Allowed exactly once.
    pub fn draw_headers(&mut self) -> Result<()> {
        if self.headers.is_some() {
            return Err(SquaresError::HeadersAlreadyDrawn);
        }
        let headers = Headers::draw(self.shape, &DigitRng::new(self.draw_seed))?;
        tracing::debug!(board = %self.id, seed = self.draw_seed, "drew header digits");
        self.headers = Some(headers);
        self.touch();
        Ok(())
    }

    /// Install externally chosen headers on a `Draft` board that has none.
    ///
    /// Used when digits are drawn elsewhere (e.g. a public ceremony).
    pub fn install_headers(&mut self, headers: Headers) -> Result<()> {
        if self.status != BoardStatus::Draft {
            return Err(SquaresError::BoardNotOpen {
                status: self.status,
            });
        }
        if self.headers.is_some() {
            return Err(SquaresError::HeadersAlreadyDrawn);
        }
        headers.validate(self.shape)?;
        self.headers = Some(headers);
        self.touch();
        Ok(())
    }

    /// Re-derive the headers from the recorded seed and compare.
    ///
    /// Returns `false` for installed headers that did not come from the seed.
    #[must_use]
    pub fn verify_draw(&self) -> bool {
        match (&self.headers, Headers::draw(self.shape, &DigitRng::new(self.draw_seed))) {
            (Some(current), Ok(expected)) => *current == expected,
            _ => false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.settings.name
    }

    #[must_use]
    pub fn shape(&self) -> BoardShape {
        self.shape
    }

    #[must_use]
    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    #[must_use]
    pub fn status(&self) -> BoardStatus {
        self.status
    }

    #[must_use]
    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    #[must_use]
    pub fn draw_seed(&self) -> u64 {
        self.draw_seed
    }

    #[must_use]
    pub fn price_per_cell(&self) -> u64 {
        self.settings.price_per_cell
    }

    #[must_use]
    pub fn payout_schedule(&self) -> &PayoutSchedule {
        &self.payout_schedule
    }

    /// Pot total, always derived from shape and price.
    pub fn pot_total(&self) -> Result<u64> {
        pot_total(self.shape, self.settings.price_per_cell)
    }

    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cell lookup by coordinate.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> Option<&Cell> {
        self.shape.index_of(coord).and_then(|i| self.cells.get(i))
    }

    pub(crate) fn cell_mut(&mut self, coord: CellCoord) -> Result<&mut Cell> {
        self.shape
            .index_of(coord)
            .and_then(|i| self.cells.get_mut(i))
            .ok_or(SquaresError::CellOutOfRange { cell: coord })
    }

    /// Resolved periods in resolution order.
    #[must_use]
    pub fn results(&self) -> &[PeriodResult] {
        &self.results
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn locked_at(&self) -> Option<DateTime<Utc>> {
        self.locked_at
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn cancelled_at(&self) -> Option<DateTime<Utc>> {
        self.cancelled_at
    }

    /// Monotonic mutation counter.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Record a mutation.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::HeaderLabel;

    fn settings() -> BoardSettings {
        BoardSettings::new("Test board").with_seed(42)
    }

    #[test]
    fn test_create_allocates_cells() {
        for (shape, cells) in [
            (BoardShape::Shotgun, 20),
            (BoardShape::FiveByFive, 25),
            (BoardShape::TenByTen, 100),
        ] {
            let board = Board::create(shape, settings()).unwrap();
            assert_eq!(board.total_cells(), cells);
            assert_eq!(board.status(), BoardStatus::Draft);
            assert!(board.cells().all(|c| !c.is_owned() && !c.is_winner()));
            assert!(board.headers().is_some());
        }
    }

    #[test]
    fn test_cells_are_addressable() {
        let board = Board::create(BoardShape::TenByTen, settings()).unwrap();
        let cell = board.cell(CellCoord::new(3, 5)).unwrap();
        assert_eq!(cell.coord, CellCoord::new(3, 5));
        assert!(board.cell(CellCoord::new(10, 0)).is_none());
    }

    #[test]
    fn test_pot_total_is_derived() {
        let board = Board::create(BoardShape::TenByTen, settings()).unwrap();
        assert_eq!(board.pot_total().unwrap(), 10_000);
    }

    #[test]
    fn test_create_rejects_overflowing_price() {
        let result = Board::create(
            BoardShape::TenByTen,
            settings().with_price_per_cell(u64::MAX),
        );
        assert!(matches!(result, Err(SquaresError::PotOverflow)));
    }

    #[test]
    fn test_shotgun_schedule_defaults_to_paying_periods() {
        let board = Board::create(BoardShape::Shotgun, settings()).unwrap();
        assert_eq!(board.payout_schedule().as_slice(), &[0, 5000, 0, 5000]);

        let grid = Board::create(BoardShape::TenByTen, settings()).unwrap();
        assert_eq!(grid.payout_schedule().as_slice(), &[2500, 2500, 2500, 2500]);
    }

    #[test]
    fn test_shotgun_rejects_quarter_payouts() {
        let result = Board::create(
            BoardShape::Shotgun,
            settings().with_payout_schedule(PayoutSchedule::even(4).unwrap()),
        );
        assert!(matches!(result, Err(SquaresError::InvalidPayoutSchedule(_))));
    }

    #[test]
    fn test_deferred_draw() {
        let mut board = Board::create(
            BoardShape::FiveByFive,
            settings().with_draw_timing(DrawTiming::OnOpen),
        )
        .unwrap();
        assert!(board.headers().is_none());

        board.draw_headers().unwrap();
        assert!(board.headers().is_some());
        assert!(matches!(board.draw_headers(), Err(SquaresError::HeadersAlreadyDrawn)));
    }

    #[test]
    fn test_same_seed_same_headers() {
        let a = Board::create(BoardShape::TenByTen, settings()).unwrap();
        let b = Board::create(BoardShape::TenByTen, settings()).unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.headers(), b.headers());
        assert!(a.verify_draw());
    }

    #[test]
    fn test_install_headers() {
        let mut board = Board::create(
            BoardShape::TenByTen,
            settings().with_draw_timing(DrawTiming::OnOpen),
        )
        .unwrap();
        let digits: Vec<HeaderLabel> = (0..10).map(HeaderLabel::Single).collect();
        board
            .install_headers(Headers::Grid {
                rows: digits.clone(),
                cols: digits,
            })
            .unwrap();
        assert!(board.headers().is_some());
        assert!(!board.verify_draw());
    }

    #[test]
    fn test_install_headers_rejects_malformed() {
        let mut board = Board::create(
            BoardShape::TenByTen,
            settings().with_draw_timing(DrawTiming::OnOpen),
        )
        .unwrap();
        let bad = Headers::Grid {
            rows: vec![HeaderLabel::Single(0); 10],
            cols: (0..10).map(HeaderLabel::Single).collect(),
        };
        assert!(matches!(
            board.install_headers(bad),
            Err(SquaresError::InvalidShapeConfiguration(_))
        ));
        assert!(board.headers().is_none());
    }

    #[test]
    fn test_touch_bumps_version() {
        let mut board = Board::create(BoardShape::TenByTen, settings()).unwrap();
        let before = board.version();
        board.touch();
        assert_eq!(board.version(), before + 1);
    }
}
