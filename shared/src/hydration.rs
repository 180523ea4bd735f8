//! Daily water intake calculator
//!
//! Base recommendation of 30-35 ml per kg of body weight, with flat
//! additive adjustments for training load, climate, illness and pregnancy.
//! The adjustments sum, so the order fields arrive from the form never
//! changes the result.

use crate::errors::CalcResult;
use crate::units::VolumeUnit;
use crate::validation::validate_weight_kg;
use serde::{Deserialize, Serialize};

/// Training volume adjustment tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLoad {
    #[default]
    None,
    /// Up to an hour of training most days: +500 ml
    Moderate,
    /// More than an hour of hard training: +1000 ml
    Heavy,
}

impl ExerciseLoad {
    fn adjustment_ml(&self) -> f64 {
        match self {
            ExerciseLoad::None => 0.0,
            ExerciseLoad::Moderate => 500.0,
            ExerciseLoad::Heavy => 1000.0,
        }
    }
}

/// Water intake form fields
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WaterIntakeInput {
    pub weight_kg: f64,
    #[serde(default)]
    pub exercise: ExerciseLoad,
    /// Hot or humid climate: +500 ml
    #[serde(default)]
    pub hot_climate: bool,
    /// Fever, vomiting or diarrhea: +500 ml
    #[serde(default)]
    pub illness: bool,
    /// Pregnancy: +300 ml
    #[serde(default)]
    pub pregnant: bool,
    /// Breastfeeding: +700 ml
    #[serde(default)]
    pub breastfeeding: bool,
}

/// Daily water intake recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    /// Weight-based band before adjustments (30 ml/kg)
    pub base_min_ml: f64,
    /// Weight-based band before adjustments (35 ml/kg)
    pub base_max_ml: f64,
    /// Sum of all additive adjustments
    pub adjustment_ml: f64,
    pub total_min_ml: f64,
    pub total_max_ml: f64,
    /// Midpoint of the total band in 240 ml cups, for the headline number
    pub cups: f64,
}

/// Calculate the recommended daily water intake
pub fn daily_water_intake(input: &WaterIntakeInput) -> CalcResult<WaterIntakeResult> {
    validate_weight_kg(input.weight_kg)?;

    let base_min_ml = input.weight_kg * 30.0;
    let base_max_ml = input.weight_kg * 35.0;

    let adjustment_ml = input.exercise.adjustment_ml()
        + if input.hot_climate { 500.0 } else { 0.0 }
        + if input.illness { 500.0 } else { 0.0 }
        + if input.pregnant { 300.0 } else { 0.0 }
        + if input.breastfeeding { 700.0 } else { 0.0 };

    let total_min_ml = base_min_ml + adjustment_ml;
    let total_max_ml = base_max_ml + adjustment_ml;

    Ok(WaterIntakeResult {
        base_min_ml,
        base_max_ml,
        adjustment_ml,
        total_min_ml,
        total_max_ml,
        cups: VolumeUnit::Cups.from_ml((total_min_ml + total_max_ml) / 2.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_band() {
        let result = daily_water_intake(&WaterIntakeInput {
            weight_kg: 70.0,
            ..Default::default()
        })
        .unwrap();
        assert!((result.base_min_ml - 2100.0).abs() < 0.001);
        assert!((result.base_max_ml - 2450.0).abs() < 0.001);
        assert_eq!(result.adjustment_ml, 0.0);
    }

    #[test]
    fn test_adjustments_are_additive() {
        let result = daily_water_intake(&WaterIntakeInput {
            weight_kg: 70.0,
            exercise: ExerciseLoad::Heavy,
            hot_climate: true,
            illness: true,
            pregnant: false,
            breastfeeding: false,
        })
        .unwrap();
        assert!((result.adjustment_ml - 2000.0).abs() < 0.001);
        assert!((result.total_min_ml - 4100.0).abs() < 0.001);
    }

    #[test]
    fn test_pregnancy_and_breastfeeding_adjustments() {
        let pregnant = daily_water_intake(&WaterIntakeInput {
            weight_kg: 65.0,
            pregnant: true,
            ..Default::default()
        })
        .unwrap();
        assert!((pregnant.adjustment_ml - 300.0).abs() < 0.001);

        let nursing = daily_water_intake(&WaterIntakeInput {
            weight_kg: 65.0,
            breastfeeding: true,
            ..Default::default()
        })
        .unwrap();
        assert!((nursing.adjustment_ml - 700.0).abs() < 0.001);
    }

    #[test]
    fn test_rejects_invalid_weight() {
        assert!(daily_water_intake(&WaterIntakeInput {
            weight_kg: 0.0,
            ..Default::default()
        })
        .is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: heavier people need more water
        #[test]
        fn prop_weight_increases_water(
            weight1 in 40.0f64..70.0,
            weight2 in 70.1f64..150.0
        ) {
            let low = daily_water_intake(&WaterIntakeInput {
                weight_kg: weight1, ..Default::default()
            }).unwrap();
            let high = daily_water_intake(&WaterIntakeInput {
                weight_kg: weight2, ..Default::default()
            }).unwrap();
            prop_assert!(high.total_min_ml > low.total_min_ml);
        }

        /// Property: each modifier only ever raises the recommendation, and
        /// the total is the base plus the sum of the active adjustments
        #[test]
        fn prop_modifiers_additive(
            weight in 40.0f64..150.0,
            hot in proptest::bool::ANY,
            ill in proptest::bool::ANY,
            pregnant in proptest::bool::ANY,
            nursing in proptest::bool::ANY
        ) {
            let input = WaterIntakeInput {
                weight_kg: weight,
                exercise: ExerciseLoad::Moderate,
                hot_climate: hot,
                illness: ill,
                pregnant,
                breastfeeding: nursing,
            };
            let result = daily_water_intake(&input).unwrap();
            let expected = 500.0
                + if hot { 500.0 } else { 0.0 }
                + if ill { 500.0 } else { 0.0 }
                + if pregnant { 300.0 } else { 0.0 }
                + if nursing { 700.0 } else { 0.0 };
            prop_assert!((result.adjustment_ml - expected).abs() < 1e-9);
            prop_assert!((result.total_max_ml - (weight * 35.0 + expected)).abs() < 1e-9);
        }
    }
}
