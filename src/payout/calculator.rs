//! Pot and payout arithmetic.
//!
//! All amounts are integer minor currency units. Multiplications go through
//! `u128` so no realistic pot can overflow mid-calculation.

use super::schedule::{PayoutSchedule, BPS_DENOMINATOR};
use crate::board::{BoardShape, ScoringPeriod};
use crate::core::{Result, SquaresError};

/// Total pot for a sold-out board: cells × price.
pub fn pot_total(shape: BoardShape, price_per_cell: u64) -> Result<u64> {
    (shape.total_cells() as u64)
        .checked_mul(price_per_cell)
        .ok_or(SquaresError::PotOverflow)
}

fn floor_share(pot: u64, bps: u32) -> u64 {
    // bps <= 10_000, so the quotient never exceeds pot
    (u128::from(pot) * u128::from(bps) / u128::from(BPS_DENOMINATOR)) as u64
}

/// Payout owed for one scoring period.
///
/// Each period gets `floor(pot × bps / 10_000)`. When the schedule pays the
/// whole pot, the last paying period also takes the rounding dust so the
/// payouts sum to exactly `pot`.
pub fn payout_for_period(pot: u64, period: ScoringPeriod, schedule: &PayoutSchedule) -> Result<u64> {
    let bps = schedule
        .bps(period.index())
        .ok_or(SquaresError::PeriodOutOfRange {
            period: period.0,
            period_count: schedule.len(),
        })?;

    if schedule.is_full() && schedule.last_paying_period() == Some(period.index()) {
        let others: u64 = schedule
            .as_slice()
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != period.index())
            .map(|(_, &b)| floor_share(pot, b))
            .sum();
        return Ok(pot - others);
    }

    Ok(floor_share(pot, bps))
}

/// Payouts for every period, in order.
pub fn period_payouts(pot: u64, schedule: &PayoutSchedule) -> Result<Vec<u64>> {
    (0..schedule.len())
        .map(|i| payout_for_period(pot, ScoringPeriod(i as u8), schedule))
        .collect()
}

/// What remains for the operator after every period pays out.
pub fn house_share(pot: u64, schedule: &PayoutSchedule) -> Result<u64> {
    let paid: u64 = period_payouts(pot, schedule)?.iter().sum();
    Ok(pot - paid)
}

/// Split an amount evenly. Returns `(per_winner, remainder)`.
#[must_use]
pub fn split_evenly(amount: u64, winners: usize) -> (u64, u64) {
    if winners == 0 {
        return (0, amount);
    }
    let n = winners as u64;
    (amount / n, amount % n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pot_total() {
        assert_eq!(pot_total(BoardShape::TenByTen, 100).unwrap(), 10_000);
        assert_eq!(pot_total(BoardShape::FiveByFive, 400).unwrap(), 10_000);
        assert_eq!(pot_total(BoardShape::Shotgun, 500).unwrap(), 10_000);
        assert_eq!(pot_total(BoardShape::TenByTen, 0).unwrap(), 0);
    }

    #[test]
    fn test_pot_overflow() {
        assert!(matches!(
            pot_total(BoardShape::TenByTen, u64::MAX / 10),
            Err(SquaresError::PotOverflow)
        ));
    }

    #[test]
    fn test_payout_for_period() {
        let schedule = PayoutSchedule::new(vec![2000, 2000, 2000, 4000]).unwrap();
        assert_eq!(payout_for_period(10_000, ScoringPeriod(0), &schedule).unwrap(), 2_000);
        assert_eq!(payout_for_period(10_000, ScoringPeriod(3), &schedule).unwrap(), 4_000);
    }

    #[test]
    fn test_payout_out_of_range() {
        let schedule = PayoutSchedule::even(4).unwrap();
        assert!(matches!(
            payout_for_period(10_000, ScoringPeriod(4), &schedule),
            Err(SquaresError::PeriodOutOfRange { period: 4, period_count: 4 })
        ));
    }

    #[test]
    fn test_full_schedule_conserves_pot_with_dust() {
        let schedule = PayoutSchedule::even(3).unwrap();
        let payouts = period_payouts(1_001, &schedule).unwrap();
        assert_eq!(payouts, vec![333, 333, 335]);
        assert_eq!(payouts.iter().sum::<u64>(), 1_001);
        assert_eq!(house_share(1_001, &schedule).unwrap(), 0);
    }

    #[test]
    fn test_dust_goes_to_last_paying_period() {
        let schedule = PayoutSchedule::new(vec![3333, 6667, 0]).unwrap();
        let payouts = period_payouts(100, &schedule).unwrap();
        assert_eq!(payouts, vec![33, 67, 0]);
    }

    #[test]
    fn test_partial_schedule_leaves_house_share() {
        let schedule = PayoutSchedule::new(vec![2000, 2000, 2000, 3000]).unwrap();
        assert_eq!(house_share(10_000, &schedule).unwrap(), 1_000);
    }

    #[test]
    fn test_large_pot_no_overflow() {
        let schedule = PayoutSchedule::even(4).unwrap();
        let pot = u64::MAX - 3;
        let payouts = period_payouts(pot, &schedule).unwrap();
        assert_eq!(payouts.iter().map(|&p| u128::from(p)).sum::<u128>(), u128::from(pot));
    }

    #[test]
    fn test_split_evenly() {
        assert_eq!(split_evenly(100, 3), (33, 1));
        assert_eq!(split_evenly(100, 1), (100, 0));
        assert_eq!(split_evenly(100, 0), (0, 100));
    }
}
