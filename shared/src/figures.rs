//! Derived figures for result display
//!
//! The prediction service reports scores as 0..=1 fractions. Conversion to
//! percentages and rounding happen here, never in the client.

/// Convert a 0..=1 fraction to a percentage
pub fn to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

/// Round to two decimal places, half away from zero
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Signed percent difference of `value` from `reference`, `None` when the
/// reference is zero
pub fn percent_difference(value: f64, reference: f64) -> Option<f64> {
    if reference == 0.0 {
        return None;
    }
    Some((value - reference) / reference * 100.0)
}

/// Tonnes harvested from a field given a per-hectare yield
pub fn total_production(yield_per_hectare: f64, area_hectares: f64) -> f64 {
    if area_hectares <= 0.0 {
        return 0.0;
    }
    yield_per_hectare * area_hectares
}
