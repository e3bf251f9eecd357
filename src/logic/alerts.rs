use crate::models::{FarmHealthMetrics, RiskAlert};

/// A single risk condition checked against the current snapshot.
///
/// Rules run in registration order. All matches are collected, but only the
/// first is surfaced to the operator; precedence is fixed by the order the
/// engine registers them in.
pub trait AlertRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Return the alert if the condition holds
    fn evaluate(&self, metrics: &FarmHealthMetrics) -> Option<RiskAlert>;
}

/// Heat stress above 40C, frost below 5C. Mutually exclusive by construction.
struct TemperatureExtremesRule;

impl AlertRule for TemperatureExtremesRule {
    fn id(&self) -> &'static str {
        "temperature_extremes"
    }

    fn evaluate(&self, metrics: &FarmHealthMetrics) -> Option<RiskAlert> {
        if metrics.temperature > 40.0 {
            Some(RiskAlert::HeatStress)
        } else if metrics.temperature < 5.0 {
            Some(RiskAlert::FrostRisk)
        } else {
            None
        }
    }
}

/// Low soil moisture combined with a stressed canopy.
struct DroughtRule;

impl AlertRule for DroughtRule {
    fn id(&self) -> &'static str {
        "drought"
    }

    fn evaluate(&self, metrics: &FarmHealthMetrics) -> Option<RiskAlert> {
        if metrics.soil_moisture < 0.2 && metrics.ndvi < 0.4 {
            Some(RiskAlert::DroughtRisk)
        } else {
            None
        }
    }
}

/// Saturated soil under near-saturated air.
struct WaterloggingRule;

impl AlertRule for WaterloggingRule {
    fn id(&self) -> &'static str {
        "waterlogging"
    }

    fn evaluate(&self, metrics: &FarmHealthMetrics) -> Option<RiskAlert> {
        if metrics.soil_moisture > 0.85 && metrics.humidity > 90 {
            Some(RiskAlert::WaterloggingRisk)
        } else {
            None
        }
    }
}

/// Warm, humid conditions that favor fungal growth.
struct DiseasePressureRule;

impl AlertRule for DiseasePressureRule {
    fn id(&self) -> &'static str {
        "disease_pressure"
    }

    fn evaluate(&self, metrics: &FarmHealthMetrics) -> Option<RiskAlert> {
        if metrics.humidity > 85 && metrics.temperature > 25.0 {
            Some(RiskAlert::DiseaseRisk)
        } else {
            None
        }
    }
}

pub struct AlertEngine {
    rules: Vec<Box<dyn AlertRule>>,
}

impl AlertEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn AlertRule>> = vec![
            Box::new(TemperatureExtremesRule),
            Box::new(DroughtRule),
            Box::new(WaterloggingRule),
            Box::new(DiseasePressureRule),
        ];

        Self { rules }
    }

    /// All matching alerts, in evaluation order.
    pub fn evaluate_all(&self, metrics: &FarmHealthMetrics) -> Vec<RiskAlert> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(metrics))
            .collect()
    }

    /// First-wins: only the highest-precedence match is surfaced.
    pub fn primary(&self, metrics: &FarmHealthMetrics) -> Option<RiskAlert> {
        self.evaluate_all(metrics).into_iter().next()
    }

    pub fn list_rules(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }
}

impl Default for AlertEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper used by the irrigation recommender.
pub fn primary_risk(metrics: &FarmHealthMetrics) -> Option<RiskAlert> {
    AlertEngine::new().primary(metrics)
}
