//! Transport-layer types shared by the ViralCast dashboard.
//! These structs mirror the prediction API's request/response payloads
//! so the frontend can deserialize them without duplicating shapes.

mod converters;
mod location;
mod prediction;

pub use converters::{format_number, format_opt_number, format_short_date, format_signed_percent};
pub use location::{CustomInputSet, LocationMatch};
pub use prediction::{CurrentStats, PredictionResponse, RiskAssessment, SeriesPoint};
