//! Sports and their scoring periods.
//!
//! A scoring period is a point in the event (end of a quarter, halftime,
//! final whistle) at which winners resolve and a payout fraction applies.
//! Periods are 0-based: in football, period 1 is halftime and period 3 the
//! final score.

use serde::{Deserialize, Serialize};

/// The sport a board is tied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sport {
    Football,
    Basketball,
    Hockey,
    Soccer,
    /// Any other event with a fixed number of scoring periods.
    Custom { periods: u8 },
}

impl Sport {
    /// Number of scoring periods.
    #[must_use]
    pub fn period_count(self) -> usize {
        match self {
            Sport::Football | Sport::Basketball => 4,
            Sport::Hockey => 3,
            Sport::Soccer => 2,
            Sport::Custom { periods } => periods as usize,
        }
    }

    /// Period that closes the first half (shotgun halftime band).
    #[must_use]
    pub fn halftime_period(self) -> ScoringPeriod {
        let count = self.period_count().max(1);
        ScoringPeriod(((count + 1) / 2 - 1) as u8)
    }

    /// Last period of the event.
    #[must_use]
    pub fn final_period(self) -> ScoringPeriod {
        ScoringPeriod(self.period_count().saturating_sub(1) as u8)
    }

    #[must_use]
    pub fn contains(self, period: ScoringPeriod) -> bool {
        period.index() < self.period_count()
    }

    /// Display label such as `Q1`, `HALF` or `FINAL`.
    #[must_use]
    pub fn period_label(self, period: ScoringPeriod) -> String {
        if period == self.final_period() {
            return "FINAL".to_string();
        }
        if period == self.halftime_period() && self.period_count() % 2 == 0 {
            return "HALF".to_string();
        }
        match self {
            Sport::Football | Sport::Basketball => format!("Q{}", period.0 + 1),
            _ => format!("P{}", period.0 + 1),
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sport::Football => f.write_str("football"),
            Sport::Basketball => f.write_str("basketball"),
            Sport::Hockey => f.write_str("hockey"),
            Sport::Soccer => f.write_str("soccer"),
            Sport::Custom { periods } => write!(f, "custom({} periods)", periods),
        }
    }
}

/// Scoring period index (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScoringPeriod(pub u8);

impl ScoringPeriod {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ScoringPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({})", self.0)
    }
}
