//! Yield estimation models

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{Season, SoilType};

/// Field, season and soil data submitted for a yield estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct YieldInput {
    pub crop_type: String,
    #[validate(range(min = 0.1))]
    pub area_hectares: f64,
    pub season: Season,
    #[validate(range(min = -10.0, max = 60.0))]
    pub temperature: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub humidity: f64,
    #[validate(range(min = 0.0))]
    pub rainfall: f64,
    pub soil_type: SoilType,
    #[validate(range(min = 0.0, max = 14.0))]
    pub soil_ph: f64,
    #[validate(range(min = 0.0, max = 200.0))]
    pub n_level: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub p_level: f64,
    #[validate(range(min = 0.0, max = 200.0))]
    pub k_level: f64,
}

impl Default for YieldInput {
    fn default() -> Self {
        Self {
            crop_type: "Rice".to_string(),
            area_hectares: 1.0,
            season: Season::Kharif,
            temperature: 25.0,
            humidity: 70.0,
            rainfall: 100.0,
            soil_type: SoilType::Alluvial,
            soil_ph: 7.0,
            n_level: 80.0,
            p_level: 40.0,
            k_level: 50.0,
        }
    }
}

/// Yield estimate returned by the prediction service, tonnes per hectare
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YieldResult {
    pub estimated_yield: f64,
    pub confidence_interval: ConfidenceInterval,
    pub regional_average: f64,
    pub optimal_yield: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl YieldResult {
    /// Whether lower <= estimate <= upper.
    ///
    /// The service is expected to honour this but nothing enforces it.
    pub fn interval_contains_estimate(&self) -> bool {
        self.confidence_interval.lower <= self.estimated_yield
            && self.estimated_yield <= self.confidence_interval.upper
    }

    /// Signed percent difference of the estimate from the regional average
    pub fn percent_vs_regional(&self) -> Option<f64> {
        crate::percent_difference(self.estimated_yield, self.regional_average)
    }

    /// Expected harvest in tonnes for the whole field
    pub fn total_production(&self, area_hectares: f64) -> f64 {
        crate::total_production(self.estimated_yield, area_hectares)
    }

    /// Copy with every figure rounded to two decimals, as shown on result cards
    pub fn rounded(&self) -> Self {
        use crate::round_to_hundredths as r;
        Self {
            estimated_yield: r(self.estimated_yield),
            confidence_interval: ConfidenceInterval {
                lower: r(self.confidence_interval.lower),
                upper: r(self.confidence_interval.upper),
            },
            regional_average: r(self.regional_average),
            optimal_yield: r(self.optimal_yield),
        }
    }
}
