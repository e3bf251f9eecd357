use serde::{Deserialize, Serialize};

/// Three-way NDVI health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthLevel {
    Healthy,
    Moderate,
    Stressed,
}

impl HealthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLevel::Healthy => "Healthy",
            HealthLevel::Moderate => "Moderate",
            HealthLevel::Stressed => "Stressed",
        }
    }

    /// Hex tag used by dashboards to tint the health card.
    pub fn color_tag(&self) -> &'static str {
        match self {
            HealthLevel::Healthy => "#66BB6A",
            HealthLevel::Moderate => "#FFA726",
            HealthLevel::Stressed => "#EF5350",
        }
    }
}

impl std::fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Health classification derived from a single NDVI reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropHealthStatus {
    pub level: HealthLevel,
}

impl CropHealthStatus {
    pub fn color_tag(&self) -> &'static str {
        self.level.color_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_level_display() {
        assert_eq!(HealthLevel::Healthy.as_str(), "Healthy");
        assert_eq!(HealthLevel::Moderate.as_str(), "Moderate");
        assert_eq!(HealthLevel::Stressed.as_str(), "Stressed");
    }

    #[test]
    fn color_tags() {
        assert_eq!(HealthLevel::Healthy.color_tag(), "#66BB6A");
        assert_eq!(HealthLevel::Moderate.color_tag(), "#FFA726");
        assert_eq!(HealthLevel::Stressed.color_tag(), "#EF5350");
    }
}
