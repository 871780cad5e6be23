//! Per-row door pricing: standard-size snapping, kol quantities, grill cost
//! and the batch fold that builds a [`Quote`].

#![allow(dead_code)]

use std::borrow::Borrow;

use thiserror::Error;
use tracing::{debug, warn};

use super::entities::{DoorSpec, FrameSize, PricingResult, Quote, RowError};

/// Stock lengths in inches, ascending.
pub const STANDARD_SIZES: [u32; 14] = [12, 24, 30, 36, 42, 48, 54, 60, 72, 84, 96, 108, 120, 132];

pub const CM_PER_INCH: f64 = 2.54;
/// Frame margin added to the width before snapping.
pub const WIDTH_ALLOWANCE_IN: f64 = 6.0;
/// Linear inches per kol.
pub const KOL_LENGTH_DIVISOR: f64 = 28.0;
pub const KOL_VOLUME_DIVISOR: f64 = 12.0;
/// cm² per billable area unit for grill/glazing.
pub const SQFT_AREA_DIVISOR: f64 = 900.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Arithmetic,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("frame size `{0}` must be two numbers separated by `*`")]
    FrameSize(String),
    #[error("{field} must be a number, got `{value}`")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

impl PricingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::FrameSize(_) => ErrorKind::Parse,
            PricingError::NotANumber { .. }
            | PricingError::OutOfRange { .. }
            | PricingError::NonFinite(_) => ErrorKind::Arithmetic,
        }
    }
}

/// Smallest standard size that fits `inches`, or the largest one when
/// nothing does.
pub fn nearest_standard_size(inches: f64) -> u32 {
    STANDARD_SIZES
        .iter()
        .copied()
        .find(|size| inches <= f64::from(*size))
        .unwrap_or(STANDARD_SIZES[STANDARD_SIZES.len() - 1])
}

pub fn parse_frame_size(text: &str) -> Result<FrameSize, PricingError> {
    let lowered = text.to_lowercase();
    let parts = lowered
        .split('*')
        .map(parse_side)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| PricingError::FrameSize(text.to_string()))?;

    let &[first, second] = parts.as_slice() else {
        return Err(PricingError::FrameSize(text.to_string()));
    };
    if !first.is_finite() || !second.is_finite() {
        return Err(PricingError::FrameSize(text.to_string()));
    }

    Ok(FrameSize {
        first: round2(first),
        second: round2(second),
    })
}

/// Prices a single row. `index` is the 1-based row label carried into the
/// result.
pub fn price_door(spec: &DoorSpec, index: usize) -> Result<PricingResult, PricingError> {
    let length_cm = positive("length (cm)", spec.length_cm)?;
    let width_cm = positive("width (cm)", spec.width_cm)?;
    let kol_price = positive("kol price", spec.kol_price)?;
    let labour_cost = non_negative("labour cost", spec.labour_cost)?;
    let sqft_price = non_negative("sqft price", spec.sqft_price)?;
    if spec.quantity == 0 {
        return Err(PricingError::OutOfRange {
            field: "quantity",
            expected: "at least 1",
            value: 0.0,
        });
    }

    let length_in = finite("length (in)", (length_cm / CM_PER_INCH).round_ties_even())?;
    let width_in = finite(
        "width (in)",
        (width_cm / CM_PER_INCH + WIDTH_ALLOWANCE_IN).round_ties_even(),
    )?;
    let adjusted_length_in = nearest_standard_size(length_in);
    let adjusted_width_in = nearest_standard_size(width_in);
    let adj_length = f64::from(adjusted_length_in);
    let adj_width = f64::from(adjusted_width_in);

    let frame = parse_frame_size(&spec.frame_size)?;
    positive("frame size side", frame.first)?;
    positive("frame size side", frame.second)?;
    let frame_area = round2(frame.first * frame.second);

    let extra = f64::from(spec.extra_horizontal_frames);
    let width_of_extra = if spec.extra_horizontal_frames > 0 {
        round2(adj_width / (extra + 1.0))
    } else {
        0.0
    };

    let linear = adj_length * f64::from(spec.vertical_frames)
        + adj_width * f64::from(spec.horizontal_frames)
        + width_of_extra * extra;
    let length_kol = finite("length kol", round2(linear / KOL_LENGTH_DIVISOR))?;
    let volume_kol = finite(
        "volume kol",
        round2(length_kol * frame_area / KOL_VOLUME_DIVISOR),
    )?;

    let sqft = finite("area", length_cm * width_cm / SQFT_AREA_DIVISOR)?;
    let grill_cost = finite("grill cost", round2(sqft * sqft_price))?;

    let unit_price = finite(
        "unit price",
        round2(volume_kol * kol_price + labour_cost + grill_cost),
    )?;
    let total_price = finite(
        "total price",
        round2(unit_price * f64::from(spec.quantity)),
    )?;

    Ok(PricingResult {
        index,
        adjusted_length_in,
        adjusted_width_in,
        length_kol,
        volume_kol,
        grill_cost,
        unit_price,
        quantity: spec.quantity,
        total_price,
    })
}

/// Prices every row independently. Failed rows only contribute a
/// [`RowError`]; the grand total sums the successful rows.
pub fn compute(rows: &[DoorSpec]) -> Quote {
    assemble(rows.iter().map(Ok))
}

pub(crate) fn assemble<B, I>(rows: I) -> Quote
where
    B: Borrow<DoorSpec>,
    I: IntoIterator<Item = Result<B, PricingError>>,
{
    let mut results = Vec::new();
    let mut errors = Vec::new();

    for (position, row) in rows.into_iter().enumerate() {
        let index = position + 1;
        match row.and_then(|spec| price_door(spec.borrow(), index)) {
            Ok(result) => results.push(result),
            Err(err) => {
                warn!(row = index, error = %err, "row skipped");
                errors.push(RowError {
                    index,
                    kind: err.kind(),
                    message: err.to_string(),
                });
            }
        }
    }

    let grand_total: f64 = results.iter().map(|r| r.total_price).sum();
    debug!(
        priced = results.len(),
        failed = errors.len(),
        grand_total,
        "quote computed"
    );

    Quote {
        results,
        errors,
        grand_total,
    }
}

/// Rounds to two decimals from the exact binary value, so `2.675` (stored
/// as 2.67499…) becomes 2.67. Exact halfway values go to the even cent.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // Only multiples of 1/8 with an odd numerator sit exactly on a half cent.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.abs() % 2.0 == 1.0 {
        return (value * 100.0).round_ties_even() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Parses one side of a frame size. Single underscores may group digits
/// (`1_000`).
fn parse_side(token: &str) -> Option<f64> {
    let token = token.trim();
    if !token.contains('_') {
        return token.parse().ok();
    }
    let bytes = token.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, b)| {
        *b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    if !separators_ok {
        return None;
    }
    token.replace('_', "").parse().ok()
}

fn finite(label: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFinite(label))
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, PricingError> {
    let value = finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PricingError::OutOfRange {
            field,
            expected: "greater than zero",
            value,
        })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, PricingError> {
    let value = finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(PricingError::OutOfRange {
            field,
            expected: "zero or more",
            value,
        })
    }
}
