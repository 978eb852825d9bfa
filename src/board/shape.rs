//! Board shapes and cell coordinates.
//!
//! ## Layouts
//!
//! | Shape        | Rows | Cols | Cells | Headers                      |
//! |--------------|------|------|-------|------------------------------|
//! | `Shotgun`    | 1    | 20   | 20    | one 0-9 permutation per band |
//! | `FiveByFive` | 5    | 5    | 25    | five two-digit labels / axis |
//! | `TenByTen`   | 10   | 10   | 100   | one 0-9 permutation / axis   |
//!
//! Shotgun cells are linear: row is always 0 and the column is the index.
//! Indices `0..10` form the halftime band, `10..20` the final band.

use serde::{Deserialize, Serialize};

use super::sport::{ScoringPeriod, Sport};

/// Width of one shotgun scoring band.
pub const SHOTGUN_BAND_WIDTH: usize = 10;

/// Number of shotgun scoring bands (halftime, final).
pub const SHOTGUN_BANDS: usize = 2;

/// Board shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardShape {
    Shotgun,
    FiveByFive,
    TenByTen,
}

impl BoardShape {
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            BoardShape::Shotgun => 1,
            BoardShape::FiveByFive => 5,
            BoardShape::TenByTen => 10,
        }
    }

    #[must_use]
    pub const fn cols(self) -> usize {
        match self {
            BoardShape::Shotgun => SHOTGUN_BAND_WIDTH * SHOTGUN_BANDS,
            BoardShape::FiveByFive => 5,
            BoardShape::TenByTen => 10,
        }
    }

    /// Total purchasable cells.
    #[must_use]
    pub const fn total_cells(self) -> usize {
        self.rows() * self.cols()
    }

    /// Number of labels per header axis (or per band for shotgun).
    #[must_use]
    pub const fn header_count(self) -> usize {
        match self {
            BoardShape::Shotgun => SHOTGUN_BAND_WIDTH,
            BoardShape::FiveByFive => 5,
            BoardShape::TenByTen => 10,
        }
    }

    #[must_use]
    pub const fn is_grid(self) -> bool {
        !matches!(self, BoardShape::Shotgun)
    }

    /// Periods of `sport` that can produce a winner on this shape.
    ///
    /// Grids resolve every period. Shotgun boards resolve only halftime and
    /// the final, which coincide for a one-period sport.
    #[must_use]
    pub fn resolving_periods(self, sport: Sport) -> Vec<ScoringPeriod> {
        match self {
            BoardShape::Shotgun => {
                let mut periods = vec![sport.halftime_period(), sport.final_period()];
                periods.dedup();
                periods
            }
            BoardShape::FiveByFive | BoardShape::TenByTen => (0..sport.period_count())
                .map(|i| ScoringPeriod(i as u8))
                .collect(),
        }
    }

    /// Check whether a coordinate lies on this board.
    #[must_use]
    pub fn contains(self, coord: CellCoord) -> bool {
        (coord.row as usize) < self.rows() && (coord.col as usize) < self.cols()
    }

    /// Row-major storage index of a coordinate.
    #[must_use]
    pub fn index_of(self, coord: CellCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.cols() + coord.col as usize)
        } else {
            None
        }
    }

    /// Coordinate at a row-major storage index.
    #[must_use]
    pub fn coord_at(self, index: usize) -> Option<CellCoord> {
        if index >= self.total_cells() {
            return None;
        }
        let cols = self.cols();
        Some(CellCoord::new((index / cols) as u8, (index % cols) as u8))
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coords(self) -> impl Iterator<Item = CellCoord> {
        (0..self.total_cells()).filter_map(move |i| self.coord_at(i))
    }
}

impl std::fmt::Display for BoardShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoardShape::Shotgun => "shotgun",
            BoardShape::FiveByFive => "5x5",
            BoardShape::TenByTen => "10x10",
        };
        f.write_str(name)
    }
}

/// Cell address. Grid shapes use `(row, col)`; shotgun uses `(0, index)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: u8,
    pub col: u8,
}

impl CellCoord {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Address of a shotgun cell by linear index.
    #[must_use]
    pub const fn linear(index: u8) -> Self {
        Self { row: 0, col: index }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
