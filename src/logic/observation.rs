use super::simulate;
use crate::config::Config;
use crate::datasources::OpenWeatherMapClient;
use crate::models::{CurrentWeather, FarmHealthMetrics};

/// Assembles the engine's input snapshot from whatever sources are available.
///
/// Weather comes from OpenWeatherMap when configured and reachable, otherwise
/// the fixed demo conditions. NDVI and soil moisture come from the seeded
/// simulators until a satellite feed is wired in.
pub struct ObservationService {
    weather_client: Option<OpenWeatherMapClient>,
}

/// The raw weather snapshot plus the derived engine input.
#[derive(Debug, Clone)]
pub struct Observation {
    pub weather: CurrentWeather,
    pub metrics: FarmHealthMetrics,
}

impl ObservationService {
    pub fn new(config: &Config, offline: bool) -> Self {
        let weather_client = if offline {
            tracing::info!("Offline mode - using demo weather");
            None
        } else {
            config
                .openweathermap
                .as_ref()
                .filter(|c| c.enabled && !c.api_key.is_empty())
                .map(|c| OpenWeatherMapClient::new(c.clone()))
        };

        if !offline && weather_client.is_none() {
            tracing::info!("OpenWeatherMap not configured - using demo weather");
        }

        Self { weather_client }
    }

    /// Fetch (or synthesize) current conditions and build the metrics
    /// snapshot the engine runs on.
    pub async fn observe(&self, seed: i64, stress_mode: bool) -> Observation {
        let weather = self.fetch_weather().await;

        let ndvi = simulate::simulate_ndvi(seed, stress_mode);
        let soil_moisture = simulate::simulate_soil_moisture(seed, stress_mode);

        let metrics = FarmHealthMetrics::new(
            ndvi,
            weather.temperature_c,
            weather.humidity_percent,
            weather.rain_probability(),
            soil_moisture,
            weather.wind_speed_ms,
        );

        Observation { weather, metrics }
    }

    async fn fetch_weather(&self) -> CurrentWeather {
        match &self.weather_client {
            Some(client) => match client.fetch_current().await {
                Ok(weather) => weather,
                Err(e) => {
                    tracing::warn!("Weather fetch failed, falling back to demo conditions: {}", e);
                    CurrentWeather::demo()
                }
            },
            None => CurrentWeather::demo(),
        }
    }

    pub fn has_weather_client(&self) -> bool {
        self.weather_client.is_some()
    }

    /// Probe the configured weather source; false when none is configured.
    pub async fn weather_reachable(&self) -> bool {
        match &self.weather_client {
            Some(client) => client.test_connection().await.unwrap_or(false),
            None => false,
        }
    }
}
