//! Status transitions on a board.
//!
//! Every transition is checked against [`BoardStatus::can_transition_to`];
//! out-of-order requests fail with `InvalidTransition` and leave the board
//! untouched.

use chrono::Utc;

use super::status::BoardStatus;
use crate::board::Board;
use crate::core::{Result, SquaresError};

impl Board {
    /// Publish a draft: `Draft -> Open`.
    ///
    /// Draws header digits here if they were deferred at creation.
    pub fn open(&mut self) -> Result<()> {
        self.check_transition(BoardStatus::Open)?;
        if self.headers.is_none() {
            self.draw_headers()?;
        }
        self.set_status(BoardStatus::Open);
        Ok(())
    }

    /// Close claiming: `Open -> Locked`. Does not require a sell-out.
    pub fn lock(&mut self) -> Result<()> {
        self.check_transition(BoardStatus::Locked)?;
        self.locked_at = Some(Utc::now());
        self.set_status(BoardStatus::Locked);
        Ok(())
    }

    /// Mark the game as started: `Locked -> InProgress`.
    pub fn start(&mut self) -> Result<()> {
        self.check_transition(BoardStatus::InProgress)?;
        self.started_at = Some(Utc::now());
        self.set_status(BoardStatus::InProgress);
        Ok(())
    }

    /// Finish the board: `InProgress -> Completed`.
    ///
    /// Requires the final scoring period to be resolved.
    pub fn complete(&mut self) -> Result<()> {
        self.check_transition(BoardStatus::Completed)?;
        if self.result_for(self.settings.sport.final_period()).is_none() {
            return Err(SquaresError::FinalPeriodUnresolved);
        }
        self.completed_at = Some(Utc::now());
        self.set_status(BoardStatus::Completed);
        Ok(())
    }

    /// Cancel a board that has not started play.
    ///
    /// Refunds are the settlement collaborator's concern.
    pub fn cancel(&mut self) -> Result<()> {
        self.check_transition(BoardStatus::Cancelled)?;
        self.cancelled_at = Some(Utc::now());
        self.set_status(BoardStatus::Cancelled);
        Ok(())
    }

    /// Move to `to` through the matching operation.
    pub fn transition(&mut self, to: BoardStatus) -> Result<()> {
        match to {
            BoardStatus::Open => self.open(),
            BoardStatus::Locked => self.lock(),
            BoardStatus::InProgress => self.start(),
            BoardStatus::Completed => self.complete(),
            BoardStatus::Cancelled => self.cancel(),
            BoardStatus::Draft => Err(self.invalid_transition(to)),
        }
    }

    fn check_transition(&self, to: BoardStatus) -> Result<()> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(self.invalid_transition(to))
        }
    }

    fn invalid_transition(&self, to: BoardStatus) -> SquaresError {
        tracing::warn!(board = %self.id, from = %self.status, to = %to, "rejected transition");
        SquaresError::InvalidTransition {
            from: self.status,
            to,
        }
    }

    fn set_status(&mut self, to: BoardStatus) {
        tracing::info!(board = %self.id, from = %self.status, to = %to, "board transition");
        self.status = to;
        self.touch();
    }
}
