//! WebAssembly module for the AgroSmart platform
//!
//! Provides client-side computation for prediction forms:
//! - Confidence percentages and yield rounding
//! - Regional yield comparison
//! - Form input validation before submission
//! - Option lists for soil type, region, season and crop selects

use js_sys::Array;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("AgroSmart wasm module loaded"));
}

/// Convert a 0-1 confidence score to a percentage
#[wasm_bindgen]
pub fn confidence_to_percent(score: f64) -> f64 {
    shared::to_percent(score)
}

/// Round a yield figure to two decimals
#[wasm_bindgen]
pub fn round_yield(value: f64) -> f64 {
    shared::round_to_hundredths(value)
}

/// Signed percent difference of an estimate from the regional average
#[wasm_bindgen]
pub fn yield_vs_regional_percent(estimated_yield: f64, regional_average: f64) -> Option<f64> {
    shared::percent_difference(estimated_yield, regional_average)
}

/// Expected harvest in tonnes for a field
#[wasm_bindgen]
pub fn total_production_tonnes(yield_per_hectare: f64, area_hectares: f64) -> f64 {
    shared::total_production(yield_per_hectare, area_hectares)
}

/// Describe a soil pH reading (e.g. "slightly acidic")
#[wasm_bindgen]
pub fn describe_soil_ph(ph: f64) -> String {
    ph_band(ph).to_string()
}

/// Check a soil pH reading as the user types it
#[wasm_bindgen]
pub fn validate_soil_ph(ph: f64) -> Result<(), JsValue> {
    validate_ph(ph).map_err(JsValue::from_str)
}

/// Validate a crop prediction form given as JSON
#[wasm_bindgen]
pub fn validate_crop_prediction_input(input_json: &str) -> Result<(), JsValue> {
    check_crop_input(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate a fertilizer recommendation form given as JSON
#[wasm_bindgen]
pub fn validate_fertilizer_form(input_json: &str) -> Result<(), JsValue> {
    check_fertilizer_input(input_json).map_err(|e| JsValue::from_str(&e))
}

/// Validate a yield estimation form given as JSON
#[wasm_bindgen]
pub fn validate_yield_form(input_json: &str) -> Result<(), JsValue> {
    check_yield_input(input_json).map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn soil_type_options() -> Array {
    SoilType::ALL.iter().map(|s| JsValue::from_str(s.label())).collect()
}

#[wasm_bindgen]
pub fn region_options() -> Array {
    Region::ALL.iter().map(|r| JsValue::from_str(r.label())).collect()
}

#[wasm_bindgen]
pub fn season_options() -> Array {
    Season::ALL.iter().map(|s| JsValue::from_str(s.label())).collect()
}

#[wasm_bindgen]
pub fn crop_options() -> Array {
    KNOWN_CROPS.iter().map(|c| JsValue::from_str(c)).collect()
}

fn check_crop_input(input_json: &str) -> Result<(), String> {
    let input: CropPredictionInput = serde_json::from_str(input_json)
        .map_err(|e| format!("Invalid crop prediction JSON: {}", e))?;
    validate_crop_input(&input).map_err(|e| e.to_string())
}

fn check_fertilizer_input(input_json: &str) -> Result<(), String> {
    let input: FertilizerInput = serde_json::from_str(input_json)
        .map_err(|e| format!("Invalid fertilizer JSON: {}", e))?;
    validate_fertilizer_input(&input).map_err(|e| e.to_string())
}

fn check_yield_input(input_json: &str) -> Result<(), String> {
    let input: YieldInput = serde_json::from_str(input_json)
        .map_err(|e| format!("Invalid yield estimation JSON: {}", e))?;
    validate_yield_input(&input).map_err(|e| e.to_string())
}
