use std::fmt;

use serde::{Deserialize, Serialize};

use super::pricing::ErrorKind;

/// One door or window as entered in the quote table.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorSpec {
    pub length_cm: f64,
    pub width_cm: f64,
    pub horizontal_frames: u32,
    pub vertical_frames: u32,
    pub extra_horizontal_frames: u32,
    /// Cross-section as typed by the user, e.g. `5*2.5`.
    pub frame_size: String,
    pub kol_price: f64,
    pub labour_cost: f64,
    pub sqft_price: f64,
    pub quantity: u32,
}

impl Default for DoorSpec {
    fn default() -> Self {
        Self {
            length_cm: 210.0,
            width_cm: 90.0,
            horizontal_frames: 2,
            vertical_frames: 2,
            extra_horizontal_frames: 1,
            frame_size: "5*2.5".to_string(),
            kol_price: 150.0,
            labour_cost: 300.0,
            sqft_price: 80.0,
            quantity: 1,
        }
    }
}

/// Parsed frame cross-section, both sides rounded to two decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSize {
    pub first: f64,
    pub second: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingResult {
    /// 1-based position of the source row.
    pub index: usize,
    pub adjusted_length_in: u32,
    pub adjusted_width_in: u32,
    pub length_kol: f64,
    pub volume_kol: f64,
    pub grill_cost: f64,
    pub unit_price: f64,
    pub quantity: u32,
    pub total_price: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowError {
    pub index: usize,
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in row {}: {}", self.index, self.message)
    }
}

/// Outcome of one pricing pass over the whole table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Quote {
    pub results: Vec<PricingResult>,
    pub errors: Vec<RowError>,
    pub grand_total: f64,
}

impl Quote {
    pub fn total_quantity(&self) -> u64 {
        self.results.iter().map(|r| u64::from(r.quantity)).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Rates used to pre-fill newly added rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateDefaults {
    pub frame_size: String,
    pub kol_price: f64,
    pub labour_cost: f64,
    pub sqft_price: f64,
}

impl Default for RateDefaults {
    fn default() -> Self {
        let seed = DoorSpec::default();
        Self {
            frame_size: seed.frame_size,
            kol_price: seed.kol_price,
            labour_cost: seed.labour_cost,
            sqft_price: seed.sqft_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_error_names_its_row() {
        let err = RowError {
            index: 3,
            kind: ErrorKind::Parse,
            message: "frame size `abc` must look like `A*B`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error in row 3: frame size `abc` must look like `A*B`"
        );
    }

    #[test]
    fn rate_defaults_follow_sample_row() {
        let rates = RateDefaults::default();
        assert_eq!(rates.frame_size, "5*2.5");
        assert_eq!(rates.kol_price, 150.0);
        assert_eq!(rates.labour_cost, 300.0);
        assert_eq!(rates.sqft_price, 80.0);
    }
}
