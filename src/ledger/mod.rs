//! Cell ledger: who owns what.
//!
//! Two phases:
//! - `Selection`: local soft-hold, no exclusivity, never authoritative
//! - `Board::claim*`: the exclusive, authoritative ownership change

pub mod claims;
pub mod selection;

pub use claims::{ClaimOutcome, PaymentPayload};
pub use selection::Selection;
