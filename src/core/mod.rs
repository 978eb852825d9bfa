//! Core engine types: identities, errors, RNG, configuration.
//!
//! These building blocks are shared by every other module and know nothing
//! about board shapes or scoring rules.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::EngineConfig;
pub use error::{ConfigError, Result, SquaresError};
pub use ids::{BoardId, Claimant, UserId};
pub use rng::{DigitRng, DigitRngState};
