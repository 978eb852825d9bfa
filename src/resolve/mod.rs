//! Winner resolution for all three board shapes.

pub mod result;
pub mod winner;

pub use result::{PeriodResult, ScoreUpdate, WinnerShare};
pub use winner::matching_cells;
