//! Input range checks for prediction forms
//!
//! The bounds mirror what the prediction service accepts. The client sends
//! inputs as-is; form code calls these before submitting.

use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::models::{CropPredictionInput, FertilizerInput, YieldInput};
use crate::types::KNOWN_CROPS;

/// One or more fields fell outside their accepted range
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid input fields: {}", fields.join(", "))]
pub struct InvalidInput {
    /// Offending field names, sorted
    pub fields: Vec<&'static str>,
}

impl From<ValidationErrors> for InvalidInput {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<&'static str> = errors.field_errors().into_keys().collect();
        fields.sort_unstable();
        Self { fields }
    }
}

// ============================================================================
// Form Validations
// ============================================================================

/// Validate a crop prediction form
pub fn validate_crop_input(input: &CropPredictionInput) -> Result<(), InvalidInput> {
    input.validate().map_err(InvalidInput::from)
}

/// Validate a fertilizer recommendation form.
///
/// The crop must be one of [`KNOWN_CROPS`]; the service rejects anything else.
pub fn validate_fertilizer_input(input: &FertilizerInput) -> Result<(), InvalidInput> {
    input.validate().map_err(InvalidInput::from)?;
    if !KNOWN_CROPS.contains(&input.crop_type.as_str()) {
        return Err(InvalidInput {
            fields: vec!["crop_type"],
        });
    }
    Ok(())
}

/// Validate a yield estimation form
pub fn validate_yield_input(input: &YieldInput) -> Result<(), InvalidInput> {
    input.validate().map_err(InvalidInput::from)?;
    if input.crop_type.trim().is_empty() {
        return Err(InvalidInput {
            fields: vec!["crop_type"],
        });
    }
    Ok(())
}

/// Check a single soil pH reading as it is typed in
pub fn validate_ph(ph: f64) -> Result<(), &'static str> {
    if !(0.0..=14.0).contains(&ph) {
        return Err("Soil pH must be between 0 and 14");
    }
    Ok(())
}

/// Describe a soil pH reading the way agronomy guides do
pub fn ph_band(ph: f64) -> &'static str {
    match ph {
        p if p < 5.5 => "strongly acidic",
        p if p < 6.5 => "slightly acidic",
        p if p <= 7.5 => "neutral",
        p if p <= 8.5 => "slightly alkaline",
        _ => "strongly alkaline",
    }
}
