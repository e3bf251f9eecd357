use std::f64::consts::PI;

/// Seed offset separating the soil moisture series from NDVI.
const SOIL_MOISTURE_SEED_OFFSET: i64 = 1000;

/// Map a seed onto [min, max] through a sine fold. Same seed, same value.
pub(crate) fn deterministic_value(seed: i64, min: f64, max: f64) -> f64 {
    let normalized = (seed as f64 * PI / 1000.0).sin();
    let scaled = (normalized + 1.0) / 2.0;
    min + scaled * (max - min)
}

/// Integer variant; the scaled value truncates toward zero.
pub(crate) fn deterministic_value_int(seed: i64, min: i64, max: i64) -> i64 {
    let normalized = (seed as f64 * PI / 1000.0).sin();
    let scaled = (normalized + 1.0) / 2.0;
    (min as f64 + scaled * (max - min) as f64) as i64
}

/// Synthetic NDVI for when no satellite reading is available.
///
/// Normal band 0.55-0.75, stressed band 0.25-0.45.
pub fn simulate_ndvi(seed: i64, stress_mode: bool) -> f64 {
    if stress_mode {
        deterministic_value(seed, 0.25, 0.45)
    } else {
        deterministic_value(seed, 0.55, 0.75)
    }
}

/// Synthetic soil moisture, offset-seeded from the same base seed.
///
/// Normal band 0.45-0.65, stressed band 0.15-0.35.
pub fn simulate_soil_moisture(seed: i64, stress_mode: bool) -> f64 {
    let seed = seed + SOIL_MOISTURE_SEED_OFFSET;
    if stress_mode {
        deterministic_value(seed, 0.15, 0.35)
    } else {
        deterministic_value(seed, 0.45, 0.65)
    }
}

/// Sinusoidal diurnal temperature swing, peaking 5C above the base at 18:00
/// and bottoming out 5C below at 06:00.
pub fn hourly_temperature(base_temp: f64, hour: u32) -> f64 {
    let hour_angle = (f64::from(hour) - 12.0) * (PI / 12.0);
    base_temp + 5.0 * hour_angle.sin()
}

/// Humidity swings up to 20 points opposite the temperature curve,
/// truncated to an integer and clamped to [0, 100].
pub fn hourly_humidity(base_humidity: i32, hour: u32) -> i32 {
    let hour_angle = (f64::from(hour) - 12.0) * (PI / 12.0);
    let varied = f64::from(base_humidity) + 20.0 * hour_angle.cos();
    (varied as i64).clamp(0, 100) as i32
}
