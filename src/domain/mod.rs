//! Pricing logic for door and window quotes lives here.

pub mod app_state;
pub mod door_row;
pub mod entities;
pub mod pricing;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use door_row::{quote_drafts, DoorField, DoorRowDraft};
#[allow(unused_imports)]
pub use entities::{DoorSpec, FrameSize, PricingResult, Quote, RateDefaults, RowError};
#[allow(unused_imports)]
pub use pricing::{
    compute, nearest_standard_size, parse_frame_size, price_door, ErrorKind, PricingError,
    STANDARD_SIZES,
};
