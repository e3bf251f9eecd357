use crate::models::{GrowthStage, PhenologyStage};

/// Bucket days-since-planting into a growth stage.
///
/// Day counts below zero (pre-planting) fall into the first bucket.
pub fn phenology_stage(days_from_planting: i64) -> PhenologyStage {
    let stage = if days_from_planting < 20 {
        GrowthStage::Germination
    } else if days_from_planting < 50 {
        GrowthStage::Vegetative
    } else if days_from_planting < 80 {
        GrowthStage::Flowering
    } else if days_from_planting < 110 {
        GrowthStage::GrainFilling
    } else {
        GrowthStage::Maturity
    };

    PhenologyStage {
        stage,
        days_from_planting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_boundaries_are_exact() {
        assert_eq!(phenology_stage(19).stage, GrowthStage::Germination);
        assert_eq!(phenology_stage(20).stage, GrowthStage::Vegetative);
        assert_eq!(phenology_stage(49).stage, GrowthStage::Vegetative);
        assert_eq!(phenology_stage(50).stage, GrowthStage::Flowering);
        assert_eq!(phenology_stage(79).stage, GrowthStage::Flowering);
        assert_eq!(phenology_stage(80).stage, GrowthStage::GrainFilling);
        assert_eq!(phenology_stage(109).stage, GrowthStage::GrainFilling);
        assert_eq!(phenology_stage(110).stage, GrowthStage::Maturity);
    }

    #[test]
    fn pre_planting_counts_as_germination() {
        assert_eq!(phenology_stage(-3).stage, GrowthStage::Germination);
    }

    #[test]
    fn water_requirements_follow_stage() {
        assert_eq!(phenology_stage(0).water_requirement_mm(), 2.0);
        assert_eq!(phenology_stage(30).water_requirement_mm(), 4.5);
        assert_eq!(phenology_stage(60).water_requirement_mm(), 6.5);
        assert_eq!(phenology_stage(90).water_requirement_mm(), 5.5);
        assert_eq!(phenology_stage(200).water_requirement_mm(), 2.0);
    }

    #[test]
    fn day_count_is_carried_through() {
        assert_eq!(phenology_stage(42).days_from_planting, 42);
    }
}
