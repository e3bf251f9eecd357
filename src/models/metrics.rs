use serde::{Deserialize, Serialize};

/// Clamp into [min, max]; NaN collapses to the lower bound.
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// A single immutable snapshot of farm conditions.
///
/// Every bounded field is clamped at construction. Anything that derives a
/// new snapshot (simulation, forecasting) goes through `new`, so downstream
/// consumers never see out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FarmHealthMetrics {
    /// Normalized vegetation index, 0.0-1.0
    pub ndvi: f64,
    /// Ambient temperature in degrees Celsius (unbounded)
    pub temperature: f64,
    /// Relative humidity percent, 0-100
    pub humidity: i32,
    /// Rain probability percent, 0-100
    pub rain_probability: i32,
    /// Volumetric soil moisture fraction, 0.0-1.0
    pub soil_moisture: f64,
    /// Wind speed in m/s, >= 0
    pub wind_speed: f64,
}

impl FarmHealthMetrics {
    pub fn new(
        ndvi: f64,
        temperature: f64,
        humidity: i32,
        rain_probability: i32,
        soil_moisture: f64,
        wind_speed: f64,
    ) -> Self {
        Self {
            ndvi: clamp(ndvi, 0.0, 1.0),
            temperature,
            humidity: humidity.clamp(0, 100),
            rain_probability: rain_probability.clamp(0, 100),
            soil_moisture: clamp(soil_moisture, 0.0, 1.0),
            wind_speed: clamp(wind_speed, 0.0, f64::INFINITY),
        }
    }
}
