use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Preferred time-of-day window for running irrigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationWindow {
    EarlyMorning,
    Morning,
    Evening,
}

impl IrrigationWindow {
    pub fn label(&self) -> &'static str {
        match self {
            IrrigationWindow::EarlyMorning => "Early Morning (5-7 AM)",
            IrrigationWindow::Morning => "Morning (7-9 AM)",
            IrrigationWindow::Evening => "Evening (5-7 PM)",
        }
    }
}

impl std::fmt::Display for IrrigationWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A risk condition worth surfacing to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskAlert {
    HeatStress,
    FrostRisk,
    DroughtRisk,
    WaterloggingRisk,
    DiseaseRisk,
}

impl RiskAlert {
    pub fn message(&self) -> &'static str {
        match self {
            RiskAlert::HeatStress => "Heat Stress: Extreme temperature detected",
            RiskAlert::FrostRisk => "Frost Risk: Very low temperature",
            RiskAlert::DroughtRisk => "Drought Risk: Low soil moisture + stressed crops",
            RiskAlert::WaterloggingRisk => "Waterlogging Risk: High moisture + high humidity",
            RiskAlert::DiseaseRisk => "Disease Risk: Conditions favor fungal growth",
        }
    }
}

impl std::fmt::Display for RiskAlert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Irrigation guidance for the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationRecommendation {
    /// Liters for the current cycle, clamped to [0, 10000]
    pub water_required_l: f64,
    pub best_time: IrrigationWindow,
    pub urgency: Urgency,
    /// Highest-precedence risk, if any condition matched
    pub risk_alert: Option<RiskAlert>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_ordering() {
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::High);
    }

    #[test]
    fn window_labels() {
        assert_eq!(
            IrrigationWindow::EarlyMorning.label(),
            "Early Morning (5-7 AM)"
        );
        assert_eq!(IrrigationWindow::Morning.label(), "Morning (7-9 AM)");
        assert_eq!(IrrigationWindow::Evening.label(), "Evening (5-7 PM)");
    }

    #[test]
    fn alert_messages_are_distinct() {
        let alerts = [
            RiskAlert::HeatStress,
            RiskAlert::FrostRisk,
            RiskAlert::DroughtRisk,
            RiskAlert::WaterloggingRisk,
            RiskAlert::DiseaseRisk,
        ];
        for (i, a) in alerts.iter().enumerate() {
            for b in alerts.iter().skip(i + 1) {
                assert_ne!(a.message(), b.message());
            }
        }
    }
}
