//! Live score updates driving a locked board to completion.

use super::status::BoardStatus;
use crate::board::Board;
use crate::core::{BoardId, Result};
use crate::payout::WinnerPayout;
use crate::resolve::{PeriodResult, ScoreUpdate};

impl Board {
    /// Apply one score update from the live feed.
    ///
    /// A `Locked` board is started first. After the final period resolves
    /// the board completes. Duplicate deliveries return the recorded result,
    /// even after completion.
    ///
    /// A rejected update leaves the board as it was, including a `Locked`
    /// board that would otherwise have been started.
    pub fn apply_score_update(&mut self, update: ScoreUpdate) -> Result<PeriodResult> {
        if self.status == BoardStatus::Completed {
            if let Some(existing) = self.result_for(update.period) {
                if existing.score == update {
                    return Ok(existing.clone());
                }
            }
        }

        let before = (self.status == BoardStatus::Locked).then(|| self.clone());
        match self.advance(update) {
            Ok(result) => Ok(result),
            Err(err) => {
                if let Some(before) = before {
                    *self = before;
                }
                Err(err)
            }
        }
    }

    fn advance(&mut self, update: ScoreUpdate) -> Result<PeriodResult> {
        if self.status == BoardStatus::Locked {
            self.start()?;
        }

        let result = self.resolve_period(update)?.clone();

        if self.status == BoardStatus::InProgress && update.period == self.settings.sport.final_period() {
            self.complete()?;
        }
        Ok(result)
    }

    /// Settlement records for every owned winner so far.
    #[must_use]
    pub fn winner_payouts(&self) -> Vec<WinnerPayout> {
        payouts_for(self.id, &self.results)
    }
}

fn payouts_for(board_id: BoardId, results: &[PeriodResult]) -> Vec<WinnerPayout> {
    results
        .iter()
        .flat_map(|result| {
            result.winners.iter().map(move |w| WinnerPayout {
                board_id,
                period: result.period(),
                cell: w.cell,
                claimant: w.claimant.clone(),
                amount: w.amount,
            })
        })
        .collect()
}
