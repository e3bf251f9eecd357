use crate::models::metrics::clamp;

/// Default vapor pressure deficit when no measurement is available, kPa.
pub const DEFAULT_VPD_KPA: f64 = 1.5;

const OPTIMAL_SOIL_MOISTURE: f64 = 0.55;
const OPTIMAL_TEMPERATURE_C: f64 = 25.0;

/// Additive 0-100 crop stress index.
///
/// Terms: canopy deficit, soil moisture deviation from the 0.55 optimum, a
/// banded temperature deviation from 25C, and atmospheric dryness via VPD.
/// `_humidity` is part of the interface but carries no weight of its own;
/// atmospheric moisture enters through the VPD term.
pub fn stress_index(
    ndvi: f64,
    soil_moisture: f64,
    temperature: f64,
    _humidity: i32,
    vpd: f64,
) -> f64 {
    let mut index = (1.0 - ndvi) * 30.0;

    index += (soil_moisture - OPTIMAL_SOIL_MOISTURE).abs() * 35.0;

    let temp_deviation = (temperature - OPTIMAL_TEMPERATURE_C).abs();
    index += if temp_deviation > 15.0 {
        20.0
    } else if temp_deviation > 10.0 {
        15.0
    } else if temp_deviation > 5.0 {
        10.0
    } else {
        5.0
    };

    index += vpd / 5.0 * 15.0;

    clamp(index, 0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_in_range() {
        let cases = [
            (0.0, 0.0, -40.0, 0, 10.0),
            (1.0, 0.55, 25.0, 100, 0.0),
            (0.5, 1.0, 60.0, 50, 5.0),
            (f64::NAN, f64::NAN, f64::NAN, 50, f64::NAN),
        ];
        for (ndvi, soil, temp, humidity, vpd) in cases {
            let index = stress_index(ndvi, soil, temp, humidity, vpd);
            assert!((0.0..=100.0).contains(&index), "index {}", index);
        }
    }

    #[test]
    fn healthy_field_scores_low() {
        // 0.35*30 + 0 + 5 + 4.5 = 20
        let index = stress_index(0.65, 0.55, 28.0, 65, DEFAULT_VPD_KPA);
        assert!(index < 30.0);
        assert!((index - 20.0).abs() < 1e-9);
    }

    #[test]
    fn ideal_conditions_floor() {
        // Canopy at 1.0, moisture at optimum, temperature at optimum, no VPD:
        // only the minimum temperature band term remains
        let index = stress_index(1.0, 0.55, 25.0, 50, 0.0);
        assert!((index - 5.0).abs() < 1e-9);
    }

    #[test]
    fn temperature_deviation_bands() {
        let at = |temp| stress_index(0.5, 0.55, temp, 50, 0.0);
        assert!(at(41.0) > at(36.0));
        assert!(at(36.0) > at(31.0));
        assert!(at(31.0) > at(28.0));
        // Symmetric around the optimum
        assert_eq!(at(35.0), at(15.0));
    }

    #[test]
    fn moisture_deviation_is_symmetric() {
        let dry = stress_index(0.5, 0.35, 25.0, 50, 1.0);
        let wet = stress_index(0.5, 0.75, 25.0, 50, 1.0);
        assert!((dry - wet).abs() < 1e-9);
    }
}
