//! Header digits: the random labels matched against live scores.
//!
//! - `TenByTen`: each axis is a permutation of the single digits 0-9.
//! - `FiveByFive`: each axis has five labels made by shuffling 0-9 and
//!   pairing consecutive digits. A label is an unordered pair; a score digit
//!   matches it if either digit is equal.
//! - `Shotgun`: one independent 0-9 permutation per scoring band.
//!
//! Every axis (and every band) covers each digit exactly once.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::shape::{BoardShape, SHOTGUN_BANDS, SHOTGUN_BAND_WIDTH};
use crate::core::{DigitRng, Result, SquaresError};

/// The ten base digits.
pub const DIGITS: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// One row/column label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderLabel {
    Single(u8),
    Pair(u8, u8),
}

impl HeaderLabel {
    /// Does this label match the given score digit?
    #[must_use]
    pub fn contains(self, digit: u8) -> bool {
        match self {
            HeaderLabel::Single(d) => d == digit,
            HeaderLabel::Pair(a, b) => a == digit || b == digit,
        }
    }

    #[must_use]
    pub fn digits(self) -> SmallVec<[u8; 2]> {
        match self {
            HeaderLabel::Single(d) => smallvec::smallvec![d],
            HeaderLabel::Pair(a, b) => smallvec::smallvec![a, b],
        }
    }
}

impl std::fmt::Display for HeaderLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderLabel::Single(d) => write!(f, "{}", d),
            HeaderLabel::Pair(a, b) => write!(f, "{}{}", a, b),
        }
    }
}

/// Generate `count` header labels.
///
/// `count == 10` yields the digits 0-9 in random order. Any count from 1 to
/// 5 yields two-digit labels built from consecutive pairs of one shuffle.
pub fn generate_digits(count: usize, rng: &mut DigitRng) -> Result<Vec<HeaderLabel>> {
    let shuffled = rng.shuffle(&DIGITS);
    match count {
        10 => Ok(shuffled.into_iter().map(HeaderLabel::Single).collect()),
        1..=5 => Ok(shuffled
            .chunks_exact(2)
            .take(count)
            .map(|pair| HeaderLabel::Pair(pair[0], pair[1]))
            .collect()),
        _ => Err(SquaresError::InvalidShapeConfiguration(format!(
            "cannot generate {} header labels",
            count
        ))),
    }
}

/// Header digits for a whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Headers {
    /// Row and column labels of a grid board.
    Grid {
        rows: Vec<HeaderLabel>,
        cols: Vec<HeaderLabel>,
    },
    /// One digit permutation per band: `bands[0]` halftime, `bands[1]` final.
    Shotgun { bands: Vec<Vec<u8>> },
}

impl Headers {
    /// Draw fresh headers for a shape.
    ///
    /// Each axis uses its own context stream so the draw is reproducible
    /// from the board seed alone.
    pub fn draw(shape: BoardShape, rng: &DigitRng) -> Result<Self> {
        let headers = match shape {
            BoardShape::Shotgun => Headers::Shotgun {
                bands: (0..SHOTGUN_BANDS)
                    .map(|band| rng.for_context(&format!("band-{}", band)).shuffle(&DIGITS))
                    .collect(),
            },
            BoardShape::FiveByFive | BoardShape::TenByTen => Headers::Grid {
                rows: generate_digits(shape.header_count(), &mut rng.for_context("rows"))?,
                cols: generate_digits(shape.header_count(), &mut rng.for_context("cols"))?,
            },
        };
        headers.validate(shape)?;
        Ok(headers)
    }

    /// Check the headers are well-formed for `shape`.
    pub fn validate(&self, shape: BoardShape) -> Result<()> {
        match (self, shape) {
            (Headers::Grid { rows, cols }, BoardShape::TenByTen | BoardShape::FiveByFive) => {
                validate_axis("row", rows, shape)?;
                validate_axis("column", cols, shape)
            }
            (Headers::Shotgun { bands }, BoardShape::Shotgun) => {
                if bands.len() != SHOTGUN_BANDS {
                    return Err(SquaresError::InvalidShapeConfiguration(format!(
                        "shotgun needs {} bands, got {}",
                        SHOTGUN_BANDS,
                        bands.len()
                    )));
                }
                for (i, band) in bands.iter().enumerate() {
                    if band.len() != SHOTGUN_BAND_WIDTH || !is_digit_permutation(band) {
                        return Err(SquaresError::InvalidShapeConfiguration(format!(
                            "band {} is not a permutation of 0-9: {:?}",
                            i, band
                        )));
                    }
                }
                Ok(())
            }
            _ => Err(SquaresError::InvalidShapeConfiguration(format!(
                "header layout does not match {} board",
                shape
            ))),
        }
    }

    /// Row labels (empty for shotgun).
    #[must_use]
    pub fn rows(&self) -> &[HeaderLabel] {
        match self {
            Headers::Grid { rows, .. } => rows,
            Headers::Shotgun { .. } => &[],
        }
    }

    /// Column labels (empty for shotgun).
    #[must_use]
    pub fn cols(&self) -> &[HeaderLabel] {
        match self {
            Headers::Grid { cols, .. } => cols,
            Headers::Shotgun { .. } => &[],
        }
    }

    /// Digits of one shotgun band (empty for grids or unknown bands).
    #[must_use]
    pub fn band(&self, band: usize) -> &[u8] {
        match self {
            Headers::Shotgun { bands } => bands.get(band).map_or(&[], |b| b.as_slice()),
            Headers::Grid { .. } => &[],
        }
    }
}

fn validate_axis(axis: &str, labels: &[HeaderLabel], shape: BoardShape) -> Result<()> {
    if labels.len() != shape.header_count() {
        return Err(SquaresError::InvalidShapeConfiguration(format!(
            "{} headers: expected {} labels, got {}",
            axis,
            shape.header_count(),
            labels.len()
        )));
    }

    let kind_ok = labels.iter().all(|label| match (shape, label) {
        (BoardShape::TenByTen, HeaderLabel::Single(_)) => true,
        (BoardShape::FiveByFive, HeaderLabel::Pair(_, _)) => true,
        _ => false,
    });
    let digits: Vec<u8> = labels.iter().flat_map(|l| l.digits()).collect();

    if !kind_ok || !is_digit_permutation(&digits) {
        return Err(SquaresError::InvalidShapeConfiguration(format!(
            "{} headers do not cover 0-9 exactly once",
            axis
        )));
    }
    Ok(())
}

/// True when `digits` holds each of 0-9 exactly once.
fn is_digit_permutation(digits: &[u8]) -> bool {
    if digits.len() != DIGITS.len() {
        return false;
    }
    let mut seen = [false; 10];
    for &d in digits {
        match seen.get_mut(d as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
