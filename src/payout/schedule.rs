//! Payout schedules in basis points.
//!
//! A schedule holds one entry per scoring period; `10_000` basis points is
//! the whole pot. Entries may sum to less than the whole pot (the remainder
//! is the operator share) but never more.

use serde::{Deserialize, Serialize};

use crate::board::{BoardShape, ScoringPeriod, Sport};
use crate::core::{Result, SquaresError};

/// Basis points in 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Per-period payout fractions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct PayoutSchedule {
    bps: Vec<u32>,
}

impl PayoutSchedule {
    /// Build a schedule from basis points, rejecting totals above 100%.
    pub fn new(bps: Vec<u32>) -> Result<Self> {
        let schedule = Self { bps };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Build a schedule from fractions of the pot (`0.25` = 25%).
    ///
    /// Fractions are rounded to the nearest basis point.
    pub fn from_fractions(fractions: &[f64]) -> Result<Self> {
        let mut bps = Vec::with_capacity(fractions.len());
        for &f in fractions {
            if !f.is_finite() || f < 0.0 {
                return Err(SquaresError::InvalidPayoutSchedule(format!(
                    "fraction {} is negative or not finite",
                    f
                )));
            }
            if f > 1.0 {
                return Err(SquaresError::InvalidPayoutSchedule(format!(
                    "fraction {} exceeds the whole pot",
                    f
                )));
            }
            bps.push((f * f64::from(BPS_DENOMINATOR)).round() as u32);
        }
        Self::new(bps)
    }

    /// Split the whole pot evenly across `periods`; the last period takes
    /// any leftover basis points.
    pub fn even(periods: usize) -> Result<Self> {
        if periods == 0 {
            return Err(SquaresError::InvalidPayoutSchedule(
                "schedule needs at least one period".into(),
            ));
        }
        Ok(Self::even_unchecked(periods))
    }

    pub(crate) fn even_unchecked(periods: usize) -> Self {
        if periods == 0 {
            return Self { bps: Vec::new() };
        }
        let share = BPS_DENOMINATOR / periods as u32;
        let mut bps = vec![share; periods];
        if let Some(last) = bps.last_mut() {
            *last += BPS_DENOMINATOR - share * periods as u32;
        }
        Self { bps }
    }

    /// The whole pot split evenly across the periods that can produce a
    /// winner on `shape`; every other period gets zero.
    #[must_use]
    pub fn default_for(shape: BoardShape, sport: Sport) -> Self {
        let paying = shape.resolving_periods(sport);
        let even = Self::even_unchecked(paying.len());
        let mut bps = vec![0; sport.period_count()];
        for (period, share) in paying.iter().zip(even.bps) {
            if let Some(slot) = bps.get_mut(period.index()) {
                *slot = share;
            }
        }
        Self { bps }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bps.is_empty()
    }

    /// Basis points for one period.
    #[must_use]
    pub fn bps(&self, period: usize) -> Option<u32> {
        self.bps.get(period).copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.bps
    }

    /// Sum of all entries, in basis points.
    #[must_use]
    pub fn total_bps(&self) -> u64 {
        self.bps.iter().map(|&b| u64::from(b)).sum()
    }

    /// True when the schedule pays out the entire pot.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.total_bps() == u64::from(BPS_DENOMINATOR)
    }

    /// Index of the last period with a non-zero share.
    #[must_use]
    pub fn last_paying_period(&self) -> Option<usize> {
        self.bps.iter().rposition(|&b| b > 0)
    }

    pub fn validate(&self) -> Result<()> {
        let total = self.total_bps();
        if total > u64::from(BPS_DENOMINATOR) {
            return Err(SquaresError::InvalidPayoutSchedule(format!(
                "fractions sum to {} bps, above {}",
                total, BPS_DENOMINATOR
            )));
        }
        Ok(())
    }

    /// The schedule must cover exactly `periods` scoring periods.
    pub fn check_period_count(&self, periods: usize) -> Result<()> {
        if self.bps.len() != periods {
            return Err(SquaresError::InvalidPayoutSchedule(format!(
                "schedule has {} entries, sport has {} periods",
                self.bps.len(),
                periods
            )));
        }
        Ok(())
    }

    /// Reject shares on periods that never produce a winner on `shape`.
    ///
    /// Such a share could only ever be retained by the house.
    pub fn check_shape(&self, shape: BoardShape, sport: Sport) -> Result<()> {
        let paying = shape.resolving_periods(sport);
        let dead = self
            .bps
            .iter()
            .enumerate()
            .find(|&(i, &b)| b > 0 && !paying.contains(&ScoringPeriod(i as u8)));
        match dead {
            Some((i, &b)) => Err(SquaresError::InvalidPayoutSchedule(format!(
                "{} bps on {}, which never has a {} winner",
                b,
                sport.period_label(ScoringPeriod(i as u8)),
                shape
            ))),
            None => Ok(()),
        }
    }
}

impl TryFrom<Vec<u32>> for PayoutSchedule {
    type Error = SquaresError;

    fn try_from(bps: Vec<u32>) -> Result<Self> {
        Self::new(bps)
    }
}

impl From<PayoutSchedule> for Vec<u32> {
    fn from(schedule: PayoutSchedule) -> Self {
        schedule.bps
    }
}
