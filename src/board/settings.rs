//! Per-board configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shape::BoardShape;
use super::sport::Sport;
use crate::core::{Result, SquaresError};
use crate::payout::PayoutSchedule;

/// When header digits are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawTiming {
    /// Drawn by the factory when the board is created.
    #[default]
    OnCreate,
    /// Drawn at the `Draft -> Open` transition.
    OnOpen,
}

/// Everything needed to create a board besides its shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    pub name: String,

    /// Price per cell in minor currency units.
    pub price_per_cell: u64,

    pub home_team: String,
    pub away_team: String,
    pub sport: Sport,

    /// Game id in the live score feed.
    pub external_game_id: Option<String>,

    pub starts_at: Option<DateTime<Utc>>,

    /// Explicit payout schedule. `None` uses the shape default, see
    /// [`PayoutSchedule::default_for`].
    pub payout_schedule: Option<PayoutSchedule>,

    pub draw_timing: DrawTiming,

    /// Fixed draw seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl BoardSettings {
    /// Football board with the default payout split and a price of 100.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_per_cell: 100,
            home_team: "HOME".to_string(),
            away_team: "AWAY".to_string(),
            sport: Sport::Football,
            external_game_id: None,
            starts_at: None,
            payout_schedule: None,
            draw_timing: DrawTiming::OnCreate,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_price_per_cell(mut self, price: u64) -> Self {
        self.price_per_cell = price;
        self
    }

    #[must_use]
    pub fn with_teams(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home_team = home.into();
        self.away_team = away.into();
        self
    }

    /// Set the sport. Drops an explicit payout schedule that no longer fits
    /// the period count.
    #[must_use]
    pub fn with_sport(mut self, sport: Sport) -> Self {
        if self
            .payout_schedule
            .as_ref()
            .is_some_and(|s| s.len() != sport.period_count())
        {
            self.payout_schedule = None;
        }
        self.sport = sport;
        self
    }

    #[must_use]
    pub fn with_external_game(mut self, game_id: impl Into<String>) -> Self {
        self.external_game_id = Some(game_id.into());
        self
    }

    #[must_use]
    pub fn with_start_time(mut self, starts_at: DateTime<Utc>) -> Self {
        self.starts_at = Some(starts_at);
        self
    }

    #[must_use]
    pub fn with_payout_schedule(mut self, schedule: PayoutSchedule) -> Self {
        self.payout_schedule = Some(schedule);
        self
    }

    #[must_use]
    pub fn with_draw_timing(mut self, timing: DrawTiming) -> Self {
        self.draw_timing = timing;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SquaresError::InvalidShapeConfiguration(
                "board name must not be empty".into(),
            ));
        }
        if self.sport.period_count() == 0 {
            return Err(SquaresError::InvalidShapeConfiguration(
                "sport must have at least one scoring period".into(),
            ));
        }
        match &self.payout_schedule {
            Some(schedule) => {
                schedule.validate()?;
                schedule.check_period_count(self.sport.period_count())
            }
            None => Ok(()),
        }
    }

    /// The schedule a board of `shape` pays out with.
    pub fn schedule_for(&self, shape: BoardShape) -> Result<PayoutSchedule> {
        let schedule = match &self.payout_schedule {
            Some(schedule) => schedule.clone(),
            None => PayoutSchedule::default_for(shape, self.sport),
        };
        schedule.check_shape(shape, self.sport)?;
        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = BoardSettings::new("Big Game");
        assert!(settings.validate().is_ok());
        assert!(settings.payout_schedule.is_none());
        assert_eq!(settings.draw_timing, DrawTiming::OnCreate);
    }

    #[test]
    fn test_builder() {
        let settings = BoardSettings::new("Cup final")
            .with_teams("ARS", "CHE")
            .with_sport(Sport::Soccer)
            .with_price_per_cell(250)
            .with_external_game("feed-991")
            .with_seed(7);

        assert_eq!(settings.home_team, "ARS");
        assert!(settings.payout_schedule.is_none());
        assert_eq!(settings.price_per_cell, 250);
        assert_eq!(settings.external_game_id.as_deref(), Some("feed-991"));
        assert_eq!(settings.seed, Some(7));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(BoardSettings::new("  ").validate().is_err());
    }

    #[test]
    fn test_rejects_schedule_for_wrong_sport() {
        let settings = BoardSettings::new("x")
            .with_payout_schedule(PayoutSchedule::new(vec![5000, 5000]).unwrap());
        assert!(matches!(
            settings.validate(),
            Err(SquaresError::InvalidPayoutSchedule(_))
        ));
    }

    #[test]
    fn test_with_sport_drops_mismatched_schedule() {
        let soccer = PayoutSchedule::new(vec![4000, 6000]).unwrap();
        let kept = BoardSettings::new("x")
            .with_payout_schedule(soccer.clone())
            .with_sport(Sport::Soccer);
        assert_eq!(kept.payout_schedule, Some(soccer));

        let dropped = kept.with_sport(Sport::Hockey);
        assert!(dropped.payout_schedule.is_none());
    }

    #[test]
    fn test_schedule_for_shape() {
        let settings = BoardSettings::new("x");
        assert_eq!(
            settings.schedule_for(BoardShape::TenByTen).unwrap().as_slice(),
            &[2500, 2500, 2500, 2500]
        );
        assert_eq!(
            settings.schedule_for(BoardShape::Shotgun).unwrap().as_slice(),
            &[0, 5000, 0, 5000]
        );

        let quarters = settings.with_payout_schedule(PayoutSchedule::even(4).unwrap());
        assert!(quarters.schedule_for(BoardShape::FiveByFive).is_ok());
        assert!(matches!(
            quarters.schedule_for(BoardShape::Shotgun),
            Err(SquaresError::InvalidPayoutSchedule(_))
        ));
    }

    #[test]
    fn test_rejects_zero_period_sport() {
        let settings = BoardSettings::new("x").with_sport(Sport::Custom { periods: 0 });
        assert!(settings.validate().is_err());
    }
}
