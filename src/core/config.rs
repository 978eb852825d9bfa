//! Engine configuration.
//!
//! Operators configure defaults once (price, sport, payout schedule,
//! selection limit) and every board built through
//! [`EngineConfig::board_settings`] starts from them. Loadable from TOML:
//!
//! ```toml
//! default_price_per_cell = 500
//! default_sport = "Football"
//! payout_bps = [2000, 2000, 2000, 4000]
//! selection_limit = 10
//! draw_timing = "OnOpen"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::ids::BoardId;
use crate::board::{BoardSettings, DrawTiming, Sport};
use crate::ledger::Selection;
use crate::payout::PayoutSchedule;

/// Top-level engine configuration, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Price per cell in minor currency units (cents).
    pub default_price_per_cell: u64,

    pub default_sport: Sport,

    /// Per-period payout in basis points. Empty leaves each board on its
    /// shape default: the whole pot split evenly across the periods that
    /// can produce a winner.
    pub payout_bps: Vec<u32>,

    /// Maximum cells a single user may hold in their selection.
    /// `None` for unlimited.
    pub selection_limit: Option<usize>,

    pub draw_timing: DrawTiming,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_price_per_cell: 100,
            default_sport: Sport::Football,
            payout_bps: Vec::new(),
            selection_limit: None,
            draw_timing: DrawTiming::OnCreate,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_price_per_cell == 0 {
            return Err(ConfigError::Validation(
                "default_price_per_cell must be > 0".into(),
            ));
        }
        if self.selection_limit == Some(0) {
            return Err(ConfigError::Validation(
                "selection_limit must be > 0 when set".into(),
            ));
        }
        self.payout_schedule()
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(())
    }

    /// The configured payout schedule for the default sport, or an even
    /// split across every period when none is configured.
    pub fn payout_schedule(&self) -> crate::core::Result<PayoutSchedule> {
        let periods = self.default_sport.period_count();
        let schedule = if self.payout_bps.is_empty() {
            PayoutSchedule::even(periods)?
        } else {
            PayoutSchedule::new(self.payout_bps.clone())?
        };
        schedule.check_period_count(periods)?;
        Ok(schedule)
    }

    /// Empty selection for a board, carrying the configured limit.
    #[must_use]
    pub fn selection(&self, board: BoardId) -> Selection {
        match self.selection_limit {
            Some(limit) => Selection::new(board).with_limit(limit),
            None => Selection::new(board),
        }
    }

    /// Board settings pre-filled with the configured defaults.
    pub fn board_settings(&self, name: impl Into<String>) -> crate::core::Result<BoardSettings> {
        let settings = BoardSettings::new(name)
            .with_price_per_cell(self.default_price_per_cell)
            .with_sport(self.default_sport)
            .with_draw_timing(self.draw_timing);
        if self.payout_bps.is_empty() {
            return Ok(settings);
        }
        Ok(settings.with_payout_schedule(self.payout_schedule()?))
    }
}
