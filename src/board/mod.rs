//! Boards, cells and header digits.
//!
//! ## Key Types
//!
//! - `BoardShape`: Shotgun, 5×5 or 10×10 layout
//! - `CellCoord`: Cell address
//! - `Headers`: Random labels matched against live scores
//! - `Board`: The aggregate root, built by `Board::create`

pub mod aggregate;
pub mod cell;
pub mod headers;
pub mod settings;
pub mod shape;
pub mod sport;

pub use aggregate::Board;
pub use cell::{Cell, Ownership};
pub use headers::{generate_digits, HeaderLabel, Headers, DIGITS};
pub use settings::{BoardSettings, DrawTiming};
pub use shape::{BoardShape, CellCoord, SHOTGUN_BANDS, SHOTGUN_BAND_WIDTH};
pub use sport::{ScoringPeriod, Sport};

// Re-export for convenience
pub use crate::core::BoardId;
