use serde::{Deserialize, Serialize};

/// One planned irrigation event in a multi-day schedule.
///
/// Only qualifying days produce an entry; a missing day offset means no
/// irrigation is needed that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationEntry {
    /// Days from today (0 = today)
    pub day_offset: u32,
    /// Applied water depth, mm
    pub water_depth_mm: f64,
    /// Runtime, minutes
    pub duration_minutes: i64,
    /// Forecast confidence, 0.0-1.0
    pub confidence: f64,
}

impl IrrigationEntry {
    pub fn date_label(&self) -> String {
        format!("Day +{}", self.day_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_format() {
        let entry = IrrigationEntry {
            day_offset: 3,
            water_depth_mm: 75.0,
            duration_minutes: 9,
            confidence: 0.75,
        };
        assert_eq!(entry.date_label(), "Day +3");
    }
}
