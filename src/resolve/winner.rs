//! Winner resolution.
//!
//! ## Rules by shape
//!
//! - **10×10**: the column whose digit equals the home score's last digit
//!   crossed with the row whose digit equals the away score's last digit.
//! - **5×5**: as above, but a label matches when either of its two digits
//!   equals the score digit. Every matching (row, column) combination wins;
//!   with well-formed headers each digit sits in exactly one label per
//!   axis, so this is always a single cell.
//! - **Shotgun**: `(home + away) mod 10` over last digits, looked up in the
//!   halftime band at halftime and the final band at the final period.
//!   Other periods never produce a shotgun winner.
//!
//! Resolution is idempotent: a repeated delivery of the same score returns
//! the recorded result without touching state.

use chrono::Utc;

use super::result::{PeriodResult, ScoreUpdate, WinnerShare};
use crate::board::{
    Board, BoardShape, Cell, CellCoord, Headers, ScoringPeriod, Sport, SHOTGUN_BAND_WIDTH,
};
use crate::core::{Result, SquaresError};
use crate::payout::{payout_for_period, split_evenly};

/// Cells whose header digits match `score`, in row-major order.
///
/// Pure function of the headers; ownership plays no part.
#[must_use]
pub fn matching_cells(
    shape: BoardShape,
    headers: &Headers,
    sport: Sport,
    score: &ScoreUpdate,
) -> Vec<CellCoord> {
    match shape {
        BoardShape::TenByTen | BoardShape::FiveByFive => {
            let home = score.home_digit();
            let away = score.away_digit();
            let cols: Vec<usize> = headers
                .cols()
                .iter()
                .enumerate()
                .filter(|(_, label)| label.contains(home))
                .map(|(i, _)| i)
                .collect();

            headers
                .rows()
                .iter()
                .enumerate()
                .filter(|(_, label)| label.contains(away))
                .flat_map(|(row, _)| {
                    cols.iter()
                        .map(move |&col| CellCoord::new(row as u8, col as u8))
                })
                .collect()
        }
        BoardShape::Shotgun => {
            let band = if score.period == sport.final_period() {
                1
            } else if score.period == sport.halftime_period() {
                0
            } else {
                return Vec::new();
            };
            let combined = score.combined_digit();
            headers
                .band(band)
                .iter()
                .position(|&d| d == combined)
                .map(|pos| vec![CellCoord::linear((band * SHOTGUN_BAND_WIDTH + pos) as u8)])
                .unwrap_or_default()
        }
    }
}

impl Board {
    /// Resolve a scoring period and return the owned winning cells.
    ///
    /// Every matching cell is flagged as a winner for the period; only
    /// owned ones are returned. Re-resolving with the same score is a no-op.
    pub fn resolve_winners(
        &mut self,
        home: u32,
        away: u32,
        period: ScoringPeriod,
    ) -> Result<Vec<CellCoord>> {
        let result = self.resolve_period(ScoreUpdate::new(home, away, period))?;
        Ok(result.winning_cells())
    }

    /// Resolve a scoring period and return its recorded result.
    pub fn resolve_period(&mut self, score: ScoreUpdate) -> Result<&PeriodResult> {
        if !self.status.allows_resolution() {
            return Err(SquaresError::ResolutionNotPermitted {
                status: self.status,
            });
        }
        let sport = self.settings.sport;
        if !sport.contains(score.period) {
            return Err(SquaresError::PeriodOutOfRange {
                period: score.period.0,
                period_count: sport.period_count(),
            });
        }

        if let Some(pos) = self.results.iter().position(|r| r.period() == score.period) {
            let existing = &self.results[pos];
            if existing.score != score {
                tracing::warn!(
                    board = %self.id,
                    period = score.period.0,
                    "conflicting score {}-{} for resolved period",
                    score.home,
                    score.away
                );
                return Err(SquaresError::PeriodAlreadyResolved {
                    period: score.period.0,
                    home: existing.score.home,
                    away: existing.score.away,
                });
            }
            tracing::debug!(board = %self.id, period = score.period.0, "duplicate score update ignored");
            return Ok(&self.results[pos]);
        }

        let headers = self.headers.as_ref().ok_or(SquaresError::HeadersNotDrawn)?;
        let matched = matching_cells(self.shape, headers, sport, &score);

        let payout = payout_for_period(self.pot_total()?, score.period, &self.payout_schedule)?;
        let (share, dust) = split_evenly(payout, matched.len());

        // Read every matched cell before flagging any of them.
        let mut winners = Vec::with_capacity(matched.len());
        let mut retained = dust;
        for &coord in &matched {
            let cell = self
                .cell(coord)
                .ok_or(SquaresError::CellOutOfRange { cell: coord })?;
            match cell.owner() {
                Some(owner) => winners.push(WinnerShare {
                    cell: coord,
                    claimant: owner.claimant.clone(),
                    amount: share,
                }),
                None => retained += share,
            }
        }
        for &coord in &matched {
            self.cell_mut(coord)?.mark_winner(score.period);
        }

        tracing::info!(
            board = %self.id,
            period = %sport.period_label(score.period),
            home = score.home,
            away = score.away,
            matched = matched.len(),
            winners = winners.len(),
            payout,
            "resolved scoring period"
        );

        self.results.push(PeriodResult {
            score,
            matched,
            winners,
            payout,
            retained,
            resolved_at: Utc::now(),
        });
        self.touch();

        let last = self.results.len() - 1;
        Ok(&self.results[last])
    }

    /// Recorded result for a period, if resolved.
    #[must_use]
    pub fn result_for(&self, period: ScoringPeriod) -> Option<&PeriodResult> {
        self.results.iter().find(|r| r.period() == period)
    }

    /// Cells flagged as winners for any period.
    pub fn winning_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSettings, DrawTiming, HeaderLabel};

    fn singles(digits: &[u8]) -> Vec<HeaderLabel> {
        digits.iter().copied().map(HeaderLabel::Single).collect()
    }

    fn pairs(digits: &[u8]) -> Vec<HeaderLabel> {
        digits
            .chunks_exact(2)
            .map(|p| HeaderLabel::Pair(p[0], p[1]))
            .collect()
    }

    #[test]
    fn test_ten_by_ten_single_match() {
        let headers = Headers::Grid {
            rows: singles(&[3, 7, 0, 9, 1, 2, 4, 5, 6, 8]),
            cols: singles(&[5, 1, 8, 4, 0, 2, 3, 6, 7, 9]),
        };
        let score = ScoreUpdate::new(24, 17, ScoringPeriod(0));
        let cells = matching_cells(BoardShape::TenByTen, &headers, Sport::Football, &score);
        // away digit 7 -> row 1, home digit 4 -> col 3
        assert_eq!(cells, vec![CellCoord::new(1, 3)]);
    }

    #[test]
    fn test_five_by_five_pair_match() {
        let headers = Headers::Grid {
            rows: pairs(&[3, 7, 0, 9, 1, 2, 4, 5, 6, 8]),
            cols: pairs(&[5, 1, 8, 4, 0, 2, 3, 6, 7, 9]),
        };
        let score = ScoreUpdate::new(14, 28, ScoringPeriod(2));
        let cells = matching_cells(BoardShape::FiveByFive, &headers, Sport::Football, &score);
        // away 8 in row label "68" (row 4); home 4 in col label "84" (col 1)
        assert_eq!(cells, vec![CellCoord::new(4, 1)]);
    }

    #[test]
    fn test_five_by_five_returns_all_combinations_for_overlapping_labels() {
        // Malformed on purpose: digit 1 sits in two row labels.
        let headers = Headers::Grid {
            rows: vec![
                HeaderLabel::Pair(1, 2),
                HeaderLabel::Pair(1, 3),
                HeaderLabel::Pair(4, 5),
                HeaderLabel::Pair(6, 7),
                HeaderLabel::Pair(8, 9),
            ],
            cols: pairs(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
        };
        let score = ScoreUpdate::new(0, 11, ScoringPeriod(0));
        let cells = matching_cells(BoardShape::FiveByFive, &headers, Sport::Football, &score);
        assert_eq!(cells, vec![CellCoord::new(0, 0), CellCoord::new(1, 0)]);
    }

    #[test]
    fn test_shotgun_bands() {
        let headers = Headers::Shotgun {
            bands: vec![
                vec![3, 7, 0, 9, 1, 2, 4, 5, 6, 8],
                vec![5, 1, 8, 4, 0, 2, 3, 6, 7, 9],
            ],
        };
        // combined (4 + 7) % 10 = 1
        let half = ScoreUpdate::new(14, 7, ScoringPeriod(1));
        assert_eq!(
            matching_cells(BoardShape::Shotgun, &headers, Sport::Football, &half),
            vec![CellCoord::linear(4)]
        );

        let fin = ScoreUpdate::new(14, 7, ScoringPeriod(3));
        assert_eq!(
            matching_cells(BoardShape::Shotgun, &headers, Sport::Football, &fin),
            vec![CellCoord::linear(11)]
        );
    }

    #[test]
    fn test_shotgun_ignores_non_paying_periods() {
        let headers = Headers::Shotgun {
            bands: vec![(0..10).collect(), (0..10).collect()],
        };
        for period in [0, 2] {
            let score = ScoreUpdate::new(3, 3, ScoringPeriod(period));
            assert!(matching_cells(BoardShape::Shotgun, &headers, Sport::Football, &score).is_empty());
        }
    }

    /// A board whose cells do not cover every matched coordinate fails the
    /// resolution without flagging any cell.
    #[test]
    fn test_missing_cell_leaves_no_partial_winners() {
        let mut board = Board::create(
            BoardShape::FiveByFive,
            BoardSettings::new("Short").with_draw_timing(DrawTiming::OnOpen),
        )
        .unwrap();
        board.open().unwrap();
        board.lock().unwrap();
        // Digit 1 in two row labels matches (0, 0) and (1, 0); only row 0 exists.
        board.headers = Some(Headers::Grid {
            rows: vec![
                HeaderLabel::Pair(1, 2),
                HeaderLabel::Pair(1, 3),
                HeaderLabel::Pair(4, 5),
                HeaderLabel::Pair(6, 7),
                HeaderLabel::Pair(8, 9),
            ],
            cols: pairs(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
        });
        board.cells.truncate(5);
        let version = board.version();

        assert!(matches!(
            board.resolve_period(ScoreUpdate::new(0, 11, ScoringPeriod(0))),
            Err(SquaresError::CellOutOfRange { cell }) if cell == CellCoord::new(1, 0)
        ));
        assert!(!board.cell(CellCoord::new(0, 0)).unwrap().is_winner());
        assert!(board.results().is_empty());
        assert_eq!(board.version(), version);
    }
}
