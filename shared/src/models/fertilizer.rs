//! Fertilizer recommendation models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::SoilType;

/// Current soil nutrient state for a planned crop
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct FertilizerInput {
    pub crop_type: String,
    #[validate(range(min = 0.0, max = 200.0))]
    pub current_n: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub current_p: f64,
    #[validate(range(min = 0.0, max = 200.0))]
    pub current_k: f64,
    #[validate(range(min = 0.0, max = 14.0))]
    pub soil_ph: f64,
    pub soil_type: SoilType,
}

impl Default for FertilizerInput {
    fn default() -> Self {
        Self {
            crop_type: "Rice".to_string(),
            current_n: 50.0,
            current_p: 30.0,
            current_k: 40.0,
            soil_ph: 7.0,
            soil_type: SoilType::Alluvial,
        }
    }
}

/// Fertilizer plan returned by the prediction service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FertilizerResult {
    pub recommended_fertilizer: String,
    pub npk_ratio: NpkRatio,
    /// kg per hectare
    pub quantity_per_hectare: f64,
    pub application_timing: String,
    pub notes: String,
}

impl FertilizerResult {
    /// Total fertilizer needed for a field of the given size, in kg
    pub fn quantity_for_area(&self, area_hectares: f64) -> f64 {
        self.quantity_per_hectare * area_hectares
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NpkRatio {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl std::fmt::Display for NpkRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.n, self.p, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_from_wire() {
        let result: FertilizerResult = serde_json::from_value(json!({
            "recommended_fertilizer": "Urea + DAP",
            "npk_ratio": {"n": 120, "p": 60, "k": 40},
            "quantity_per_hectare": 220,
            "application_timing": "Two split applications",
            "notes": "Apply with adequate water."
        }))
        .unwrap();

        assert_eq!(result.npk_ratio.to_string(), "120:60:40");
        assert_eq!(result.quantity_for_area(2.5), 550.0);
    }
}
