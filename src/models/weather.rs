use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherSource {
    OpenWeatherMap,
    Demo,
}

impl WeatherSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherSource::OpenWeatherMap => "OpenWeatherMap",
            WeatherSource::Demo => "Demo Mode",
        }
    }
}

impl std::fmt::Display for WeatherSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current conditions as reported by the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub source: WeatherSource,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub pressure_hpa: i32,
    pub humidity_percent: i32,
    pub cloudiness_percent: i32,
    pub wind_speed_ms: f64,
    pub wind_degree: i32,
}

impl CurrentWeather {
    /// Fixed fallback conditions used when no provider is reachable.
    pub fn demo() -> Self {
        Self {
            source: WeatherSource::Demo,
            temperature_c: 28.0,
            feels_like_c: 30.0,
            pressure_hpa: 1012,
            humidity_percent: 65,
            cloudiness_percent: 30,
            wind_speed_ms: 3.5,
            wind_degree: 180,
        }
    }

    /// Cloud cover stands in for rain probability; the current-weather
    /// endpoint carries no precipitation probability field.
    pub fn rain_probability(&self) -> i32 {
        self.cloudiness_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_defaults() {
        let w = CurrentWeather::demo();
        assert_eq!(w.source, WeatherSource::Demo);
        assert_eq!(w.temperature_c, 28.0);
        assert_eq!(w.humidity_percent, 65);
        assert_eq!(w.cloudiness_percent, 30);
        assert_eq!(w.wind_speed_ms, 3.5);
    }

    #[test]
    fn rain_probability_tracks_cloudiness() {
        let mut w = CurrentWeather::demo();
        w.cloudiness_percent = 72;
        assert_eq!(w.rain_probability(), 72);
    }
}
