use crate::config::Config;
use crate::logic::observation::Observation;
use crate::logic::{
    forecast, health, irrigation, phenology, schedule, simulate, stress, sustainability, water,
};
use crate::models::FarmHealthMetrics;

/// Hours sampled for the diurnal profile section.
const PROFILE_HOURS: [u32; 6] = [6, 9, 12, 15, 18, 21];

pub fn print_report(config: &Config, observation: &Observation, days_from_planting: i64) {
    let metrics = &observation.metrics;
    let weather = &observation.weather;

    let health = health::classify_health(metrics.ndvi);
    let recommendation = irrigation::recommend_irrigation(metrics);
    let sustainability = sustainability::score_sustainability(
        metrics.ndvi,
        recommendation.water_required_l,
        metrics.temperature,
        metrics.rain_probability,
        metrics.soil_moisture,
    );
    let stress_index = stress::stress_index(
        metrics.ndvi,
        metrics.soil_moisture,
        metrics.temperature,
        metrics.humidity,
        stress::DEFAULT_VPD_KPA,
    );
    let et0 = water::et0(
        metrics.temperature,
        metrics.humidity,
        metrics.wind_speed,
        water::DEFAULT_SOLAR_RADIATION,
    );
    let requirement =
        water::crop_water_requirement(metrics.temperature, metrics.humidity, metrics.wind_speed);
    let stage = phenology::phenology_stage(days_from_planting);

    tracing::debug!(tint = health.color_tag(), "health classification");

    println!("{} ({})", config.farm.name, config.farm.crop);
    if let Some(size) = config.farm.field_size_ha {
        println!("Field size: {:.1} ha", size);
    }
    println!();

    println!("Weather [{}]", weather.source);
    println!(
        "  Temperature: {:.1} C (feels like {:.1} C)",
        weather.temperature_c, weather.feels_like_c
    );
    println!("  Humidity:    {}%", weather.humidity_percent);
    println!("  Pressure:    {} hPa", weather.pressure_hpa);
    println!("  Cloud cover: {}%", weather.cloudiness_percent);
    println!(
        "  Wind:        {:.1} m/s @ {} deg",
        weather.wind_speed_ms, weather.wind_degree
    );
    println!();

    println!("Field");
    println!(
        "  NDVI:          {:.3}  [{}]",
        metrics.ndvi,
        health.level.as_str()
    );
    println!("  Soil moisture: {:.0}%", metrics.soil_moisture * 100.0);
    println!("  Rain chance:   {}%", metrics.rain_probability);
    println!(
        "  Stage:         {} (day {})",
        stage.stage,
        stage.days_from_planting
    );
    println!(
        "  Stage water:   {:.1} mm/day",
        stage.water_requirement_mm()
    );
    println!();

    println!("Irrigation");
    println!(
        "  Water needed: {:.0} L ({} urgency)",
        recommendation.water_required_l, recommendation.urgency
    );
    println!("  Best time:    {}", recommendation.best_time);
    match recommendation.risk_alert {
        Some(alert) => println!("  ALERT:        {}", alert.message()),
        None => println!("  No active risk alerts"),
    }
    println!();

    println!("Indices");
    println!("  Sustainability score: {:.0}/100", sustainability);
    println!("  Crop stress index:    {:.0}/100", stress_index);
    println!("  ET0:                  {:.2} mm/day", et0);
    println!("  Crop water req:       {:.2} mm/day", requirement);
    println!();

    println!("Diurnal profile (base {:.1} C / {}%)", metrics.temperature, metrics.humidity);
    for hour in PROFILE_HOURS {
        println!(
            "  {:02}:00  {:>5.1} C  {:>3}%",
            hour,
            simulate::hourly_temperature(metrics.temperature, hour),
            simulate::hourly_humidity(metrics.humidity, hour)
        );
    }
}

pub fn print_forecast(observation: &Observation, days: u32, stress_mode: bool, seed: i64) {
    let current = &observation.metrics;
    let mode = if stress_mode { "stress" } else { "normal" };

    println!("{}-day forecast ({} regime)", days, mode);
    println!();
    println!("  Day   Temp C   Hum %   Rain %   NDVI    Soil %   Wind    Health      Urgency");

    for day in 1..=days {
        let predicted = forecast::predict_metrics_for_day(current, day, stress_mode, seed);
        let health = health::classify_health(predicted.ndvi);
        let recommendation = irrigation::recommend_irrigation(&predicted);

        println!(
            "  +{:<3} {:>7.1} {:>7} {:>8} {:>7.3} {:>8.0} {:>7.1}   {:<11} {}",
            day,
            predicted.temperature,
            predicted.humidity,
            predicted.rain_probability,
            predicted.ndvi,
            predicted.soil_moisture * 100.0,
            predicted.wind_speed,
            health.level.as_str(),
            recommendation.urgency
        );
    }
}

pub fn print_schedule(observation: &Observation, days: u32, seed: i64) {
    println!("Current: {}", summary_line(&observation.metrics));
    println!();

    let entries = schedule::generate_schedule(&observation.metrics, days, seed);

    if entries.is_empty() {
        println!(
            "No irrigation needed over the next {} days (predicted moisture stays adequate).",
            days
        );
        return;
    }

    println!("Irrigation plan, next {} days", days);
    println!();
    println!("  Date     Depth mm   Duration   Confidence");
    for entry in &entries {
        println!(
            "  {:<8} {:>8.1} {:>7} min {:>10.0}%",
            entry.date_label(),
            entry.water_depth_mm,
            entry.duration_minutes,
            entry.confidence * 100.0
        );
    }
    println!();
    println!("{} of {} days need water.", entries.len(), days);
}

fn summary_line(metrics: &FarmHealthMetrics) -> String {
    let health = health::classify_health(metrics.ndvi);
    let recommendation = irrigation::recommend_irrigation(metrics);
    format!(
        "{} | {:.0} L ({}) | {}",
        health.level.as_str(),
        recommendation.water_required_l,
        recommendation.urgency,
        recommendation
            .risk_alert
            .map(|a| a.message())
            .unwrap_or("no alerts")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_mentions_health_and_urgency() {
        let m = FarmHealthMetrics::new(0.65, 28.0, 65, 30, 0.55, 3.5);
        let line = summary_line(&m);
        assert!(line.contains("Healthy"));
        assert!(line.contains("Low"));
        assert!(line.contains("no alerts"));
    }

    #[test]
    fn summary_line_surfaces_alerts() {
        let m = FarmHealthMetrics::new(0.2, 45.0, 50, 0, 0.1, 3.0);
        let line = summary_line(&m);
        assert!(line.contains("Stressed"));
        assert!(line.contains("Heat Stress"));
    }
}
