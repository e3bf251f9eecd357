use std::f64::consts::PI;

use super::forecast::predict_metrics_for_day;
use super::water::crop_water_requirement;
use crate::models::{FarmHealthMetrics, IrrigationEntry};

/// Daily requirement below which a cycle is not worth scheduling, mm.
const MIN_SCHEDULABLE_REQUIREMENT_MM: f64 = 2.0;
/// Predicted soil moisture at or above which irrigation is skipped.
const MOISTURE_SKIP_THRESHOLD: f64 = 0.5;
/// Applied depth per mm of daily requirement.
const DEPTH_PER_REQUIREMENT: f64 = 25.0;
/// Runtime minutes per mm of daily requirement.
const MINUTES_PER_REQUIREMENT: f64 = 3.0;

/// Roll a multi-day irrigation plan.
///
/// Unlike the point forecaster, each day is projected from the previous
/// day's projection, so conditions compound across the window. Days whose
/// requirement or predicted moisture does not justify a cycle are omitted
/// rather than zeroed.
pub fn generate_schedule(
    current: &FarmHealthMetrics,
    days_ahead: u32,
    seed: i64,
) -> Vec<IrrigationEntry> {
    let mut schedule = Vec::new();
    let mut predicted = *current;

    for day_offset in 0..days_ahead {
        predicted = predict_metrics_for_day(&predicted, day_offset, false, seed);

        let requirement = crop_water_requirement(
            predicted.temperature,
            predicted.humidity,
            predicted.wind_speed,
        );

        if requirement > MIN_SCHEDULABLE_REQUIREMENT_MM
            && predicted.soil_moisture < MOISTURE_SKIP_THRESHOLD
        {
            schedule.push(IrrigationEntry {
                day_offset,
                water_depth_mm: requirement * DEPTH_PER_REQUIREMENT,
                duration_minutes: (requirement * MINUTES_PER_REQUIREMENT) as i64,
                confidence: 0.7
                    + 0.1 * (f64::from(day_offset) * PI / f64::from(days_ahead)).sin(),
            });
        }
    }

    schedule
}
