//! Identity types: boards and claimants.
//!
//! The engine performs no authentication. Callers hand it a [`Claimant`]
//! resolved by their identity layer; the engine only checks that the
//! identity is present.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{Result, SquaresError};

/// Unique board identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardId(pub Uuid);

impl BoardId {
    /// Generate a fresh random board ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. loaded from storage).
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque user identifier supplied by the identity layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The user taking ownership of a cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claimant {
    pub user_id: UserId,
    pub display_name: String,
}

impl Claimant {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: UserId::new(user_id),
            display_name: display_name.into(),
        }
    }

    /// Reject blank identities before they reach the ledger.
    pub fn validate(&self) -> Result<()> {
        if self.user_id.0.trim().is_empty() || self.display_name.trim().is_empty() {
            return Err(SquaresError::MissingClaimant);
        }
        Ok(())
    }
}
