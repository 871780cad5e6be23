//! Text-cell rows backing the editable quote table.
//!
//! The editor keeps every cell as the raw string the user typed. Coercion to
//! numbers happens per row when the quote is priced, so a bad cell only
//! fails its own row.

use super::entities::{DoorSpec, Quote, RateDefaults};
use super::pricing::{assemble, PricingError};
use crate::util::generate_id;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DoorField {
    LengthCm,
    WidthCm,
    HorizontalFrames,
    VerticalFrames,
    ExtraHorizontalFrames,
    FrameSize,
    KolPrice,
    LabourCost,
    SqftPrice,
    Quantity,
}

impl DoorField {
    pub const ALL: [DoorField; 10] = [
        DoorField::LengthCm,
        DoorField::WidthCm,
        DoorField::HorizontalFrames,
        DoorField::VerticalFrames,
        DoorField::ExtraHorizontalFrames,
        DoorField::FrameSize,
        DoorField::KolPrice,
        DoorField::LabourCost,
        DoorField::SqftPrice,
        DoorField::Quantity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DoorField::LengthCm => "Length (cm)",
            DoorField::WidthCm => "Width (cm)",
            DoorField::HorizontalFrames => "Horizontal Frames",
            DoorField::VerticalFrames => "Vertical Frames",
            DoorField::ExtraHorizontalFrames => "Extra Horizontal Frames",
            DoorField::FrameSize => "Frame Size",
            DoorField::KolPrice => "Kol Price",
            DoorField::LabourCost => "Labour Cost",
            DoorField::SqftPrice => "Sqft Price",
            DoorField::Quantity => "Quantity",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DoorField::FrameSize)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoorRowDraft {
    pub id: String,
    pub length_cm: String,
    pub width_cm: String,
    pub horizontal_frames: String,
    pub vertical_frames: String,
    pub extra_horizontal_frames: String,
    pub frame_size: String,
    pub kol_price: String,
    pub labour_cost: String,
    pub sqft_price: String,
    pub quantity: String,
}

impl DoorRowDraft {
    /// The sample door shown when the estimator opens.
    pub fn seed() -> Self {
        Self::from_spec(&DoorSpec::default())
    }

    pub fn from_spec(spec: &DoorSpec) -> Self {
        Self {
            id: generate_id("door"),
            length_cm: format_decimal(spec.length_cm),
            width_cm: format_decimal(spec.width_cm),
            horizontal_frames: spec.horizontal_frames.to_string(),
            vertical_frames: spec.vertical_frames.to_string(),
            extra_horizontal_frames: spec.extra_horizontal_frames.to_string(),
            frame_size: spec.frame_size.clone(),
            kol_price: format_decimal(spec.kol_price),
            labour_cost: format_decimal(spec.labour_cost),
            sqft_price: format_decimal(spec.sqft_price),
            quantity: spec.quantity.to_string(),
        }
    }

    /// A fresh row using the sample dimensions and the configured rates.
    pub fn from_rates(rates: &RateDefaults) -> Self {
        Self::from_spec(&DoorSpec {
            frame_size: rates.frame_size.clone(),
            kol_price: rates.kol_price,
            labour_cost: rates.labour_cost,
            sqft_price: rates.sqft_price,
            ..DoorSpec::default()
        })
    }

    pub fn get(&self, field: DoorField) -> &str {
        match field {
            DoorField::LengthCm => &self.length_cm,
            DoorField::WidthCm => &self.width_cm,
            DoorField::HorizontalFrames => &self.horizontal_frames,
            DoorField::VerticalFrames => &self.vertical_frames,
            DoorField::ExtraHorizontalFrames => &self.extra_horizontal_frames,
            DoorField::FrameSize => &self.frame_size,
            DoorField::KolPrice => &self.kol_price,
            DoorField::LabourCost => &self.labour_cost,
            DoorField::SqftPrice => &self.sqft_price,
            DoorField::Quantity => &self.quantity,
        }
    }

    pub fn set(&mut self, field: DoorField, value: String) {
        let slot = match field {
            DoorField::LengthCm => &mut self.length_cm,
            DoorField::WidthCm => &mut self.width_cm,
            DoorField::HorizontalFrames => &mut self.horizontal_frames,
            DoorField::VerticalFrames => &mut self.vertical_frames,
            DoorField::ExtraHorizontalFrames => &mut self.extra_horizontal_frames,
            DoorField::FrameSize => &mut self.frame_size,
            DoorField::KolPrice => &mut self.kol_price,
            DoorField::LabourCost => &mut self.labour_cost,
            DoorField::SqftPrice => &mut self.sqft_price,
            DoorField::Quantity => &mut self.quantity,
        };
        *slot = value;
    }

    pub fn to_spec(&self) -> Result<DoorSpec, PricingError> {
        Ok(DoorSpec {
            length_cm: decimal(DoorField::LengthCm, &self.length_cm)?,
            width_cm: decimal(DoorField::WidthCm, &self.width_cm)?,
            horizontal_frames: count(DoorField::HorizontalFrames, &self.horizontal_frames)?,
            vertical_frames: count(DoorField::VerticalFrames, &self.vertical_frames)?,
            extra_horizontal_frames: count(
                DoorField::ExtraHorizontalFrames,
                &self.extra_horizontal_frames,
            )?,
            frame_size: self.frame_size.trim().to_string(),
            kol_price: decimal(DoorField::KolPrice, &self.kol_price)?,
            labour_cost: decimal(DoorField::LabourCost, &self.labour_cost)?,
            sqft_price: decimal(DoorField::SqftPrice, &self.sqft_price)?,
            quantity: count(DoorField::Quantity, &self.quantity)?,
        })
    }
}

/// Coerces and prices every draft; a row whose cells don't parse is
/// reported like any other failed row.
pub fn quote_drafts(drafts: &[DoorRowDraft]) -> Quote {
    assemble(drafts.iter().map(DoorRowDraft::to_spec))
}

fn decimal(field: DoorField, raw: &str) -> Result<f64, PricingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| not_a_number(field, raw))
}

/// Whole counts; `2.0` is accepted as `2` since spreadsheets often paste it
/// that way.
fn count(field: DoorField, raw: &str) -> Result<u32, PricingError> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Ok(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) => {
            Ok(value as u32)
        }
        _ => Err(not_a_number(field, raw)),
    }
}

fn not_a_number(field: DoorField, raw: &str) -> PricingError {
    PricingError::NotANumber {
        field: field.label(),
        value: raw.to_string(),
    }
}

fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::{compute, ErrorKind};

    #[test]
    fn seed_row_round_trips_to_default_spec() {
        let draft = DoorRowDraft::seed();
        assert_eq!(draft.length_cm, "210.0");
        assert_eq!(draft.frame_size, "5*2.5");
        assert_eq!(draft.to_spec().unwrap(), DoorSpec::default());
    }

    #[test]
    fn drafts_get_distinct_ids() {
        assert_ne!(DoorRowDraft::seed().id, DoorRowDraft::seed().id);
    }

    #[test]
    fn set_then_get_each_field() {
        let mut draft = DoorRowDraft::seed();
        for field in DoorField::ALL {
            draft.set(field, format!("{}!", field.label()));
            assert_eq!(draft.get(field), format!("{}!", field.label()));
        }
    }

    #[test]
    fn counts_accept_whole_decimals() {
        let mut draft = DoorRowDraft::seed();
        draft.set(DoorField::Quantity, " 2.0 ".to_string());
        assert_eq!(draft.to_spec().unwrap().quantity, 2);

        draft.set(DoorField::Quantity, "2.5".to_string());
        assert!(draft.to_spec().is_err());

        draft.set(DoorField::Quantity, "-1".to_string());
        assert!(draft.to_spec().is_err());
    }

    #[test]
    fn non_numeric_cell_fails_only_its_row() {
        let mut broken = DoorRowDraft::seed();
        broken.set(DoorField::KolPrice, "twelve".to_string());
        let drafts = vec![DoorRowDraft::seed(), broken, DoorRowDraft::seed()];

        let quote = quote_drafts(&drafts);

        assert_eq!(quote.results.len(), 2);
        assert_eq!(quote.errors.len(), 1);
        let error = &quote.errors[0];
        assert_eq!(error.index, 2);
        assert_eq!(error.kind, ErrorKind::Arithmetic);
        assert_eq!(error.message, "Kol Price must be a number, got `twelve`");
        assert_eq!(quote.results[1].index, 3);
    }

    #[test]
    fn drafts_price_like_specs() {
        let drafts = vec![DoorRowDraft::seed(), DoorRowDraft::seed()];
        let specs = vec![DoorSpec::default(), DoorSpec::default()];
        assert_eq!(quote_drafts(&drafts), compute(&specs));
    }

    #[test]
    fn new_rows_take_configured_rates() {
        let rates = RateDefaults {
            frame_size: "4*2".to_string(),
            kol_price: 175.0,
            labour_cost: 250.0,
            sqft_price: 60.0,
        };
        let spec = DoorRowDraft::from_rates(&rates).to_spec().unwrap();
        assert_eq!(spec.frame_size, "4*2");
        assert_eq!(spec.kol_price, 175.0);
        assert_eq!(spec.labour_cost, 250.0);
        assert_eq!(spec.sqft_price, 60.0);
        assert_eq!(spec.length_cm, 210.0);
    }
}
