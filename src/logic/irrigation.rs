use super::alerts;
use crate::models::metrics::clamp;
use crate::models::{FarmHealthMetrics, IrrigationRecommendation, IrrigationWindow, Urgency};

/// Maximum liters a single recommendation may request.
const MAX_WATER_L: f64 = 10_000.0;

/// Compute the irrigation recommendation for the current snapshot.
///
/// Demand model: a temperature-banded base draw, plus dryness terms for air
/// humidity and soil moisture, scaled by canopy condition and discounted by
/// the chance of rain. The result is clamped to [0, 10000] liters.
pub fn recommend_irrigation(metrics: &FarmHealthMetrics) -> IrrigationRecommendation {
    let temp_factor = if metrics.temperature > 35.0 {
        1.4
    } else if metrics.temperature > 30.0 {
        1.2
    } else if metrics.temperature > 25.0 {
        1.0
    } else if metrics.temperature > 20.0 {
        0.8
    } else {
        0.6
    };

    let mut water_required = 1000.0 * temp_factor;
    water_required += 500.0 * f64::from(100 - metrics.humidity) / 100.0;
    water_required += 800.0 * (1.0 - metrics.soil_moisture);

    let ndvi_factor = if metrics.ndvi < 0.3 {
        1.3
    } else if metrics.ndvi < 0.6 {
        1.0
    } else {
        0.7
    };
    water_required *= ndvi_factor;
    water_required *= 1.0 - f64::from(metrics.rain_probability) / 100.0;

    IrrigationRecommendation {
        water_required_l: clamp(water_required, 0.0, MAX_WATER_L),
        best_time: best_window(metrics.temperature, metrics.humidity, metrics.wind_speed),
        urgency: urgency(metrics),
        risk_alert: alerts::primary_risk(metrics),
    }
}

/// Tie-break order matters: extreme heat forces the pre-dawn window even on
/// windy or humid days.
fn best_window(temperature: f64, humidity: i32, wind_speed: f64) -> IrrigationWindow {
    if temperature > 35.0 {
        IrrigationWindow::EarlyMorning
    } else if wind_speed > 5.0 {
        IrrigationWindow::Evening
    } else if humidity > 70 {
        IrrigationWindow::Morning
    } else {
        IrrigationWindow::EarlyMorning
    }
}

fn urgency(metrics: &FarmHealthMetrics) -> Urgency {
    if metrics.ndvi < 0.3 && metrics.soil_moisture < 0.3 {
        Urgency::High
    } else if metrics.ndvi < 0.5 || metrics.soil_moisture < 0.4 {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskAlert;

    #[test]
    fn healthy_field_mild_weather() {
        let m = FarmHealthMetrics::new(0.65, 28.0, 65, 30, 0.55, 3.5);
        let rec = recommend_irrigation(&m);

        // 1000*1.2 + 500*0.35 + 800*0.45 = 1735; *0.7 (dense canopy) = 1214.5;
        // *0.7 (30% rain) = 850.15
        assert!((rec.water_required_l - 850.15).abs() < 1e-9);
        assert_eq!(rec.urgency, Urgency::Low);
        assert_eq!(rec.best_time, IrrigationWindow::EarlyMorning);
        assert_eq!(rec.risk_alert, None);
    }

    #[test]
    fn stressed_field_hot_dry_spell() {
        let m = FarmHealthMetrics::new(0.25, 38.0, 90, 5, 0.15, 2.0);
        let rec = recommend_irrigation(&m);

        assert_eq!(rec.urgency, Urgency::High);
        // 38C does not cross the 40C heat threshold, so drought wins
        assert_eq!(rec.risk_alert, Some(RiskAlert::DroughtRisk));
        assert!(rec.water_required_l > 2000.0);
        assert!(rec.water_required_l <= 10_000.0);
    }

    #[test]
    fn heat_alert_outranks_drought() {
        let m = FarmHealthMetrics::new(0.2, 45.0, 50, 0, 0.1, 3.0);
        let rec = recommend_irrigation(&m);
        assert_eq!(rec.risk_alert, Some(RiskAlert::HeatStress));
    }

    #[test]
    fn water_stays_in_range_at_extremes() {
        let dry = FarmHealthMetrics::new(0.0, 50.0, 0, 0, 0.0, 10.0);
        let wet = FarmHealthMetrics::new(1.0, -10.0, 100, 100, 1.0, 0.0);
        for m in [dry, wet] {
            let rec = recommend_irrigation(&m);
            assert!(rec.water_required_l >= 0.0);
            assert!(rec.water_required_l <= 10_000.0);
        }
    }

    #[test]
    fn full_rain_probability_zeroes_demand() {
        let m = FarmHealthMetrics::new(0.5, 30.0, 50, 100, 0.5, 3.0);
        let rec = recommend_irrigation(&m);
        assert_eq!(rec.water_required_l, 0.0);
    }

    #[test]
    fn best_window_tie_break_order() {
        // Heat first, even when windy
        assert_eq!(best_window(36.0, 80, 8.0), IrrigationWindow::EarlyMorning);
        // Then wind, even when humid
        assert_eq!(best_window(30.0, 80, 6.0), IrrigationWindow::Evening);
        // Then humidity
        assert_eq!(best_window(30.0, 80, 2.0), IrrigationWindow::Morning);
        // Default
        assert_eq!(best_window(30.0, 50, 2.0), IrrigationWindow::EarlyMorning);
    }

    #[test]
    fn urgency_boundaries() {
        // Both low -> High
        let high = FarmHealthMetrics::new(0.29, 25.0, 50, 20, 0.29, 3.0);
        assert_eq!(recommend_irrigation(&high).urgency, Urgency::High);
        // Either low -> Medium
        let medium_ndvi = FarmHealthMetrics::new(0.45, 25.0, 50, 20, 0.6, 3.0);
        assert_eq!(recommend_irrigation(&medium_ndvi).urgency, Urgency::Medium);
        let medium_soil = FarmHealthMetrics::new(0.7, 25.0, 50, 20, 0.35, 3.0);
        assert_eq!(recommend_irrigation(&medium_soil).urgency, Urgency::Medium);
        // Neither -> Low
        let low = FarmHealthMetrics::new(0.5, 25.0, 50, 20, 0.4, 3.0);
        assert_eq!(recommend_irrigation(&low).urgency, Urgency::Low);
    }
}
