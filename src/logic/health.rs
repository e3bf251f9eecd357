use crate::models::{CropHealthStatus, HealthLevel};

/// Classify an NDVI reading into a three-way health status.
///
/// Thresholds: >= 0.6 healthy, >= 0.3 moderate, below that stressed. Total
/// over all reals; NaN falls through to stressed.
pub fn classify_health(ndvi: f64) -> CropHealthStatus {
    let level = if ndvi >= 0.6 {
        HealthLevel::Healthy
    } else if ndvi >= 0.3 {
        HealthLevel::Moderate
    } else {
        HealthLevel::Stressed
    };
    CropHealthStatus { level }
}
