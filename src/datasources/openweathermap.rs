use crate::config::OpenWeatherMapConfig;
use crate::error::{FarmOpsError, Result};
use crate::models::{CurrentWeather, WeatherSource};
use serde::Deserialize;

const API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub struct OpenWeatherMapClient {
    client: reqwest::Client,
    config: OpenWeatherMapConfig,
}

// OpenWeatherMap current-weather response structures
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
    clouds: OwmClouds,
    wind: OwmWind,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    feels_like: f64,
    pressure: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmClouds {
    all: f64, // cloudiness percentage
}

#[derive(Debug, Deserialize)]
struct OwmWind {
    speed: f64,
    #[serde(default)]
    deg: f64,
}

impl OpenWeatherMapClient {
    pub fn new(config: OpenWeatherMapConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch current conditions from OpenWeatherMap in metric units
    pub async fn fetch_current(&self) -> Result<CurrentWeather> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, self.config.latitude, self.config.longitude, self.config.api_key
        );

        let response =
            self.client.get(&url).send().await.map_err(|e| {
                FarmOpsError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FarmOpsError::DataSourceUnavailable(format!(
                "OpenWeatherMap returned {}: {}",
                status, body
            )));
        }

        let owm_response: OwmCurrentResponse = response.json().await.map_err(|e| {
            FarmOpsError::DataSourceUnavailable(format!(
                "Failed to parse OpenWeatherMap response: {}",
                e
            ))
        })?;

        Ok(convert_response(owm_response))
    }

    /// Test connection to OpenWeatherMap API
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            API_BASE_URL, self.config.latitude, self.config.longitude, self.config.api_key
        );

        let response =
            self.client.get(&url).send().await.map_err(|e| {
                FarmOpsError::DataSourceUnavailable(format!("OpenWeatherMap: {}", e))
            })?;

        Ok(response.status().is_success())
    }
}

fn convert_response(response: OwmCurrentResponse) -> CurrentWeather {
    CurrentWeather {
        source: WeatherSource::OpenWeatherMap,
        temperature_c: response.main.temp,
        feels_like_c: response.main.feels_like,
        pressure_hpa: response.main.pressure as i32,
        humidity_percent: response.main.humidity as i32,
        cloudiness_percent: response.clouds.all as i32,
        wind_speed_ms: response.wind.speed,
        wind_degree: response.wind.deg as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> OpenWeatherMapConfig {
        OpenWeatherMapConfig {
            api_key: "test_key".to_string(),
            latitude: 18.5204,
            longitude: 73.8567,
            enabled: true,
        }
    }

    #[test]
    fn client_creation() {
        let client = OpenWeatherMapClient::new(sample_config());
        assert!(client.config.enabled);
    }

    #[test]
    fn response_conversion() {
        let response = OwmCurrentResponse {
            main: OwmMain {
                temp: 31.2,
                feels_like: 34.0,
                pressure: 1008.0,
                humidity: 74.0,
            },
            clouds: OwmClouds { all: 40.0 },
            wind: OwmWind {
                speed: 4.2,
                deg: 225.0,
            },
        };

        let weather = convert_response(response);
        assert_eq!(weather.source, WeatherSource::OpenWeatherMap);
        assert_eq!(weather.temperature_c, 31.2);
        assert_eq!(weather.humidity_percent, 74);
        assert_eq!(weather.cloudiness_percent, 40);
        assert_eq!(weather.rain_probability(), 40);
        assert_eq!(weather.wind_degree, 225);
    }
}
