use serde::{Deserialize, Serialize};

/// Crop growth phase, bucketed by days since planting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    Germination,
    Vegetative,
    Flowering,
    GrainFilling,
    Maturity,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::Germination => "Germination & Establishment",
            GrowthStage::Vegetative => "Vegetative Growth",
            GrowthStage::Flowering => "Flowering & Pod Formation",
            GrowthStage::GrainFilling => "Grain Filling",
            GrowthStage::Maturity => "Maturity & Senescence",
        }
    }

    /// Daily water requirement for the stage, mm/day.
    pub fn water_requirement_mm(&self) -> f64 {
        match self {
            GrowthStage::Germination => 2.0,
            GrowthStage::Vegetative => 4.5,
            GrowthStage::Flowering => 6.5,
            GrowthStage::GrainFilling => 5.5,
            GrowthStage::Maturity => 2.0,
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Growth stage paired with the day count that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhenologyStage {
    pub stage: GrowthStage,
    pub days_from_planting: i64,
}

impl PhenologyStage {
    pub fn water_requirement_mm(&self) -> f64 {
        self.stage.water_requirement_mm()
    }
}
