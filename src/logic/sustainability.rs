use crate::models::metrics::clamp;

/// Composite 0-100 sustainability score for the current snapshot.
///
/// Starts from a base of 50 and adds bonuses for canopy vigor, water
/// efficiency, rainfall and soil moisture being in a workable band.
/// `_temperature` is part of the scoring interface but currently carries no
/// weight.
pub fn score_sustainability(
    ndvi: f64,
    water_usage_l: f64,
    _temperature: f64,
    rainfall_percent: i32,
    soil_moisture: f64,
) -> f64 {
    let mut score = 50.0;

    score += ndvi * 30.0;

    score += if water_usage_l < 1000.0 {
        25.0
    } else if water_usage_l < 3000.0 {
        20.0
    } else if water_usage_l < 6000.0 {
        12.0
    } else {
        5.0
    };

    score += if rainfall_percent > 30 {
        20.0
    } else if rainfall_percent > 10 {
        15.0
    } else {
        5.0
    };

    score += if (0.4..=0.7).contains(&soil_moisture) {
        15.0
    } else if (0.3..=0.8).contains(&soil_moisture) {
        10.0
    } else {
        3.0
    };

    clamp(score, 0.0, 100.0)
}
