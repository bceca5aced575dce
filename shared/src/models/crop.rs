//! Crop prediction models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{Region, SoilType};

/// Soil and climate readings submitted for a crop recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct CropPredictionInput {
    pub soil_type: SoilType,
    /// Nitrogen, ppm
    #[validate(range(min = 0.0, max = 200.0))]
    pub n_level: f64,
    /// Phosphorus, ppm
    #[validate(range(min = 0.0, max = 100.0))]
    pub p_level: f64,
    /// Potassium, ppm
    #[validate(range(min = 0.0, max = 200.0))]
    pub k_level: f64,
    /// Degrees Celsius
    #[validate(range(min = -10.0, max = 60.0))]
    pub temperature: f64,
    /// Relative humidity, percent
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    /// Millimetres
    #[validate(range(min = 0.0))]
    pub rainfall: f64,
    #[validate(range(min = 0.0, max = 14.0))]
    pub ph_level: f64,
    pub region: Region,
}

impl Default for CropPredictionInput {
    fn default() -> Self {
        Self {
            soil_type: SoilType::Black,
            n_level: 50.0,
            p_level: 50.0,
            k_level: 50.0,
            temperature: 25.0,
            humidity: 60.0,
            rainfall: 100.0,
            ph_level: 7.0,
            region: Region::North,
        }
    }
}

/// Crop recommendation returned by the prediction service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropPredictionResult {
    pub predicted_crop: String,
    /// Probability-like fraction in 0..=1
    pub confidence_score: f64,
    /// Runner-up crops, best first
    pub alternative_crops: Vec<AlternativeCrop>,
}

impl CropPredictionResult {
    /// Confidence as a percentage for display
    pub fn confidence_percent(&self) -> f64 {
        crate::to_percent(self.confidence_score)
    }
}

/// A runner-up crop suggestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeCrop {
    pub crop: String,
    pub score: f64,
}

impl AlternativeCrop {
    pub fn score_percent(&self) -> f64 {
        crate::to_percent(self.score)
    }
}
