//! Body composition calculators
//!
//! BMI, ideal body weight, body fat percentage (tape measure and BMI
//! estimate) and waist-to-height ratio. All formulas are evaluated on
//! canonical-unit inputs (kg, cm) after validation.

use crate::category::{Bands, Severity};
use crate::errors::{CalcError, CalcResult};
use crate::types::BiologicalSex;
use crate::validation::{validate_circumference_cm, validate_height_cm, validate_weight_kg};
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI
// ============================================================================

/// BMI category classification (WHO table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    SeverelyUnderweight,
    Underweight,
    Normal,
    Overweight,
    ObeseClass1,
    ObeseClass2,
    ObeseClass3,
}

impl BmiCategory {
    /// Threshold table; lower bounds inclusive, so BMI 25.0 is Overweight
    pub fn bands() -> Bands<BmiCategory> {
        Bands::new(
            BmiCategory::SeverelyUnderweight,
            vec![
                (16.0, BmiCategory::Underweight),
                (18.5, BmiCategory::Normal),
                (25.0, BmiCategory::Overweight),
                (30.0, BmiCategory::ObeseClass1),
                (35.0, BmiCategory::ObeseClass2),
                (40.0, BmiCategory::ObeseClass3),
            ],
        )
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::SeverelyUnderweight => "Severely Underweight",
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }

    /// Badge tier for the result panel
    pub fn severity(&self) -> Severity {
        match self {
            BmiCategory::SeverelyUnderweight => Severity::Danger,
            BmiCategory::Underweight => Severity::Caution,
            BmiCategory::Normal => Severity::Good,
            BmiCategory::Overweight => Severity::Caution,
            BmiCategory::ObeseClass1 => Severity::Warning,
            BmiCategory::ObeseClass2 => Severity::Warning,
            BmiCategory::ObeseClass3 => Severity::Danger,
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value
    pub value: f64,
    /// BMI category
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height
    pub healthy_weight_range_kg: (f64, f64),
    /// Distance from healthy range (negative = under, positive = over, 0 = in range)
    pub distance_from_healthy_kg: f64,
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> CalcResult<f64> {
    validate_weight_kg(weight_kg)?;
    validate_height_cm(height_cm)?;
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    BmiCategory::bands().classify(bmi)
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-25 (normal range)
pub fn healthy_weight_range_kg(height_cm: f64) -> CalcResult<(f64, f64)> {
    validate_height_cm(height_cm)?;
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    Ok((18.5 * height_m_sq, 25.0 * height_m_sq))
}

/// Calculate complete BMI result
pub fn calculate_bmi_result(weight_kg: f64, height_cm: f64) -> CalcResult<BmiResult> {
    let bmi = calculate_bmi(weight_kg, height_cm)?;
    let category = classify_bmi(bmi);
    let healthy_range = healthy_weight_range_kg(height_cm)?;

    let distance = if weight_kg < healthy_range.0 {
        weight_kg - healthy_range.0 // Negative = underweight
    } else if weight_kg > healthy_range.1 {
        weight_kg - healthy_range.1 // Positive = overweight
    } else {
        0.0 // In healthy range
    };

    Ok(BmiResult {
        value: bmi,
        category,
        healthy_weight_range_kg: healthy_range,
        distance_from_healthy_kg: distance,
    })
}

// ============================================================================
// Ideal Body Weight
// ============================================================================

/// Ideal body weight across the published formulas, in kg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightResult {
    /// Devine formula result
    pub devine: f64,
    /// Robinson formula result
    pub robinson: f64,
    /// Miller formula result
    pub miller: f64,
    /// Hamwi formula result
    pub hamwi: f64,
    /// Average of all formulas
    pub average: f64,
}

/// Calculate ideal body weight using multiple formulas
///
/// Devine: men 50 + 2.3 kg per inch over 5 ft, women 45.5 + 2.3;
/// Robinson, Miller and Hamwi use the same shape with their own constants.
pub fn calculate_ideal_weight(height_cm: f64, sex: BiologicalSex) -> CalcResult<IdealWeightResult> {
    validate_height_cm(height_cm)?;
    let height_inches = height_cm / 2.54;
    let inches_over_5ft = (height_inches - 60.0).max(0.0);

    let (devine, robinson, miller, hamwi) = match sex {
        BiologicalSex::Male => {
            let devine = 50.0 + 2.3 * inches_over_5ft;
            let robinson = 52.0 + 1.9 * inches_over_5ft;
            let miller = 56.2 + 1.41 * inches_over_5ft;
            let hamwi = 48.0 + 2.7 * inches_over_5ft;
            (devine, robinson, miller, hamwi)
        }
        BiologicalSex::Female => {
            let devine = 45.5 + 2.3 * inches_over_5ft;
            let robinson = 49.0 + 1.7 * inches_over_5ft;
            let miller = 53.1 + 1.36 * inches_over_5ft;
            let hamwi = 45.5 + 2.2 * inches_over_5ft;
            (devine, robinson, miller, hamwi)
        }
    };

    let average = (devine + robinson + miller + hamwi) / 4.0;

    Ok(IdealWeightResult {
        devine,
        robinson,
        miller,
        hamwi,
        average,
    })
}

// ============================================================================
// Body Fat Percentage
// ============================================================================

/// Tape measurements for the US Navy circumference method, in cm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavyTapeMeasurements {
    pub sex: BiologicalSex,
    pub height_cm: f64,
    /// Waist at the navel (men) or narrowest point (women)
    pub waist_cm: f64,
    /// Neck just below the larynx
    pub neck_cm: f64,
    /// Hip at the widest point; required for women, unused for men
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

/// Estimate body fat percentage with the US Navy circumference method
///
/// The published constants expect inches:
/// men: 86.010·log10(waist−neck) − 70.041·log10(height) + 36.76
/// women: 163.205·log10(waist+hip−neck) − 97.684·log10(height) − 78.387
pub fn body_fat_navy(m: &NavyTapeMeasurements) -> CalcResult<f64> {
    validate_height_cm(m.height_cm)?;
    validate_circumference_cm("waist", m.waist_cm)?;
    validate_circumference_cm("neck", m.neck_cm)?;

    let height_in = m.height_cm / 2.54;
    let waist_in = m.waist_cm / 2.54;
    let neck_in = m.neck_cm / 2.54;

    let percent = match m.sex {
        BiologicalSex::Male => {
            let girth = waist_in - neck_in;
            if girth <= 0.0 {
                return Err(CalcError::undefined(
                    "waist must exceed neck circumference",
                ));
            }
            86.010 * girth.log10() - 70.041 * height_in.log10() + 36.76
        }
        BiologicalSex::Female => {
            let hip_cm = m
                .hip_cm
                .ok_or_else(|| CalcError::invalid("hip", "required for the female formula"))?;
            validate_circumference_cm("hip", hip_cm)?;
            let hip_in = hip_cm / 2.54;
            let girth = waist_in + hip_in - neck_in;
            if girth <= 0.0 {
                return Err(CalcError::undefined(
                    "waist plus hip must exceed neck circumference",
                ));
            }
            163.205 * girth.log10() - 97.684 * height_in.log10() - 78.387
        }
    };

    if !percent.is_finite() || percent <= 0.0 || percent >= 100.0 {
        return Err(CalcError::undefined(
            "measurements fall outside the method's valid range",
        ));
    }
    Ok(percent)
}

/// Estimate body fat percentage from BMI (rough screening estimate)
///
/// Formula: BF% = 1.20 × BMI + 0.23 × Age - 10.8 × sex - 5.4
/// where sex = 1 for male, 0 for female
pub fn estimate_body_fat_from_bmi(bmi: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let sex_factor = match sex {
        BiologicalSex::Male => 1.0,
        BiologicalSex::Female => 0.0,
    };
    let bf = 1.20 * bmi + 0.23 * age_years as f64 - 10.8 * sex_factor - 5.4;
    bf.clamp(3.0, 60.0)
}

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athletic,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    /// Threshold table by sex (ACE fitness bands)
    pub fn bands(sex: BiologicalSex) -> Bands<BodyFatCategory> {
        match sex {
            BiologicalSex::Male => Bands::new(
                BodyFatCategory::Essential,
                vec![
                    (6.0, BodyFatCategory::Athletic),
                    (14.0, BodyFatCategory::Fitness),
                    (18.0, BodyFatCategory::Average),
                    (25.0, BodyFatCategory::Obese),
                ],
            ),
            BiologicalSex::Female => Bands::new(
                BodyFatCategory::Essential,
                vec![
                    (14.0, BodyFatCategory::Athletic),
                    (21.0, BodyFatCategory::Fitness),
                    (25.0, BodyFatCategory::Average),
                    (32.0, BodyFatCategory::Obese),
                ],
            ),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "Essential Fat",
            BodyFatCategory::Athletic => "Athletic",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BodyFatCategory::Essential => Severity::Caution,
            BodyFatCategory::Athletic => Severity::Good,
            BodyFatCategory::Fitness => Severity::Good,
            BodyFatCategory::Average => Severity::Info,
            BodyFatCategory::Obese => Severity::Warning,
        }
    }
}

/// Classify body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    BodyFatCategory::bands(sex).classify(body_fat_percent)
}

/// Complete tape-measure body fat result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub percent: f64,
    pub category: BodyFatCategory,
    /// Fat mass in kg when body weight was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_mass_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lean_mass_kg: Option<f64>,
}

/// Calculate the full Navy-method result, with mass breakdown if weight is known
pub fn body_fat_navy_result(
    m: &NavyTapeMeasurements,
    weight_kg: Option<f64>,
) -> CalcResult<BodyFatResult> {
    let percent = body_fat_navy(m)?;
    let category = classify_body_fat(percent, m.sex);

    let (fat_mass_kg, lean_mass_kg) = match weight_kg {
        Some(w) => {
            validate_weight_kg(w)?;
            let fat = w * percent / 100.0;
            (Some(fat), Some(w - fat))
        }
        None => (None, None),
    };

    Ok(BodyFatResult {
        percent,
        category,
        fat_mass_kg,
        lean_mass_kg,
    })
}

// ============================================================================
// Waist-to-Height Ratio
// ============================================================================

/// WHtR risk band (Ashwell boundaries 0.40 / 0.50 / 0.60)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WhtrCategory {
    BelowRange,
    Healthy,
    IncreasedRisk,
    HighRisk,
}

impl WhtrCategory {
    pub fn bands() -> Bands<WhtrCategory> {
        Bands::new(
            WhtrCategory::BelowRange,
            vec![
                (0.40, WhtrCategory::Healthy),
                (0.50, WhtrCategory::IncreasedRisk),
                (0.60, WhtrCategory::HighRisk),
            ],
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            WhtrCategory::BelowRange => "Below Healthy Range",
            WhtrCategory::Healthy => "Healthy",
            WhtrCategory::IncreasedRisk => "Increased Risk",
            WhtrCategory::HighRisk => "High Risk",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            WhtrCategory::BelowRange => Severity::Caution,
            WhtrCategory::Healthy => Severity::Good,
            WhtrCategory::IncreasedRisk => Severity::Warning,
            WhtrCategory::HighRisk => Severity::Danger,
        }
    }
}

/// Waist-to-height ratio result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhtrResult {
    pub ratio: f64,
    pub category: WhtrCategory,
}

/// Calculate waist-to-height ratio (both in cm)
pub fn waist_to_height_ratio(waist_cm: f64, height_cm: f64) -> CalcResult<WhtrResult> {
    validate_circumference_cm("waist", waist_cm)?;
    validate_height_cm(height_cm)?;
    let ratio = waist_cm / height_cm;
    Ok(WhtrResult {
        ratio,
        category: WhtrCategory::bands().classify(ratio),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMI Tests
    // =========================================================================

    #[test]
    fn test_bmi_calculation() {
        // 70kg, 170cm -> BMI 24.2, Normal
        let bmi = calculate_bmi(70.0, 170.0).unwrap();
        assert!((bmi - 24.2).abs() < 0.05);
        assert_eq!(classify_bmi(bmi), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_rejects_invalid_input() {
        assert!(calculate_bmi(0.0, 170.0).is_err());
        assert!(calculate_bmi(70.0, 0.0).is_err());
        assert!(calculate_bmi(f64::NAN, 170.0).is_err());
    }

    #[rstest]
    #[case(15.0, BmiCategory::SeverelyUnderweight)]
    #[case(17.0, BmiCategory::Underweight)]
    #[case(22.0, BmiCategory::Normal)]
    #[case(24.999, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)] // boundary belongs to the upper bucket
    #[case(27.0, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::ObeseClass1)]
    #[case(37.0, BmiCategory::ObeseClass2)]
    #[case(42.0, BmiCategory::ObeseClass3)]
    fn test_bmi_categories(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(classify_bmi(bmi), expected);
    }

    #[test]
    fn test_healthy_weight_range() {
        // For 175cm, healthy range should be ~56.7-76.6 kg
        let (min, max) = healthy_weight_range_kg(175.0).unwrap();
        assert!((min - 56.7).abs() < 0.5);
        assert!((max - 76.6).abs() < 0.5);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI is always positive for valid inputs
        #[test]
        fn prop_bmi_positive(weight in 20.0f64..500.0, height in 100.0f64..250.0) {
            let bmi = calculate_bmi(weight, height).unwrap();
            prop_assert!(bmi > 0.0 && bmi.is_finite());
        }

        /// Property: Heavier weight = higher BMI (same height)
        #[test]
        fn prop_bmi_increases_with_weight(
            weight1 in 50.0f64..100.0,
            weight2 in 100.1f64..150.0,
            height in 150.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(weight1, height).unwrap();
            let bmi2 = calculate_bmi(weight2, height).unwrap();
            prop_assert!(bmi2 > bmi1);
        }

        /// Property: Taller height = lower BMI (same weight)
        #[test]
        fn prop_bmi_decreases_with_height(
            weight in 60.0f64..100.0,
            height1 in 150.0f64..170.0,
            height2 in 180.0f64..200.0
        ) {
            let bmi1 = calculate_bmi(weight, height1).unwrap();
            let bmi2 = calculate_bmi(weight, height2).unwrap();
            prop_assert!(bmi1 > bmi2);
        }

        /// Property: every BMI value in the plausible output range maps to
        /// exactly one category
        #[test]
        fn prop_bmi_category_coverage(bmi in 5.0f64..80.0) {
            let category = classify_bmi(bmi);
            let spans = BmiCategory::bands().spans();
            let hits = spans.iter()
                .filter(|(_, lower, upper)| bmi >= *lower && bmi < *upper)
                .count();
            prop_assert_eq!(hits, 1);
            prop_assert!(spans.iter().any(|(c, _, _)| *c == category));
        }
    }

    // =========================================================================
    // Ideal Weight Tests
    // =========================================================================

    #[test]
    fn test_devine_male_72in() {
        // 72in = 182.88cm: 50 + 2.3×12 = 77.6 kg
        let result = calculate_ideal_weight(182.88, BiologicalSex::Male).unwrap();
        assert!((result.devine - 77.6).abs() < 0.05);
    }

    #[test]
    fn test_devine_female_72in() {
        // 45.5 + 2.3×12 = 73.1 kg
        let result = calculate_ideal_weight(182.88, BiologicalSex::Female).unwrap();
        assert!((result.devine - 73.1).abs() < 0.05);
    }

    #[test]
    fn test_ideal_weight_short_height_clamps_at_base() {
        // Below 5ft the inches-over term clamps to zero
        let result = calculate_ideal_weight(140.0, BiologicalSex::Male).unwrap();
        assert!((result.devine - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_ideal_weight_average() {
        let result = calculate_ideal_weight(180.0, BiologicalSex::Male).unwrap();
        assert!(result.average > 65.0 && result.average < 85.0);
    }

    // =========================================================================
    // Body Fat Tests
    // =========================================================================

    #[test]
    fn test_navy_body_fat_male() {
        // 180cm, waist 85cm, neck 38cm -> roughly 15-16%
        let m = NavyTapeMeasurements {
            sex: BiologicalSex::Male,
            height_cm: 180.0,
            waist_cm: 85.0,
            neck_cm: 38.0,
            hip_cm: None,
        };
        let percent = body_fat_navy(&m).unwrap();
        assert!(percent > 10.0 && percent < 20.0, "got {}", percent);
    }

    #[test]
    fn test_navy_body_fat_female_requires_hip() {
        let m = NavyTapeMeasurements {
            sex: BiologicalSex::Female,
            height_cm: 165.0,
            waist_cm: 70.0,
            neck_cm: 32.0,
            hip_cm: None,
        };
        assert!(matches!(
            body_fat_navy(&m),
            Err(CalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_navy_body_fat_female() {
        let m = NavyTapeMeasurements {
            sex: BiologicalSex::Female,
            height_cm: 165.0,
            waist_cm: 70.0,
            neck_cm: 32.0,
            hip_cm: Some(95.0),
        };
        let percent = body_fat_navy(&m).unwrap();
        assert!(percent > 15.0 && percent < 30.0, "got {}", percent);
    }

    #[test]
    fn test_navy_waist_not_above_neck_is_undefined() {
        let m = NavyTapeMeasurements {
            sex: BiologicalSex::Male,
            height_cm: 180.0,
            waist_cm: 37.0,
            neck_cm: 38.0,
            hip_cm: None,
        };
        assert!(matches!(
            body_fat_navy(&m),
            Err(CalcError::UndefinedResult { .. })
        ));
    }

    #[test]
    fn test_body_fat_classification() {
        assert_eq!(classify_body_fat(10.0, BiologicalSex::Male), BodyFatCategory::Athletic);
        assert_eq!(classify_body_fat(20.0, BiologicalSex::Male), BodyFatCategory::Average);
        assert_eq!(classify_body_fat(20.0, BiologicalSex::Female), BodyFatCategory::Athletic);
        assert_eq!(classify_body_fat(28.0, BiologicalSex::Female), BodyFatCategory::Average);
    }

    #[test]
    fn test_body_fat_result_mass_breakdown() {
        let m = NavyTapeMeasurements {
            sex: BiologicalSex::Male,
            height_cm: 180.0,
            waist_cm: 85.0,
            neck_cm: 38.0,
            hip_cm: None,
        };
        let result = body_fat_navy_result(&m, Some(80.0)).unwrap();
        let fat = result.fat_mass_kg.unwrap();
        let lean = result.lean_mass_kg.unwrap();
        assert!((fat + lean - 80.0).abs() < 0.001);
        assert!((fat - 80.0 * result.percent / 100.0).abs() < 0.001);
    }

    #[test]
    fn test_estimate_body_fat_from_bmi() {
        // Male branch subtracts 10.8 exactly once
        let male = estimate_body_fat_from_bmi(24.0, 30, BiologicalSex::Male);
        let female = estimate_body_fat_from_bmi(24.0, 30, BiologicalSex::Female);
        assert!((female - male - 10.8).abs() < 0.001);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Navy body fat never returns NaN for valid measurements
        #[test]
        fn prop_navy_finite_or_error(
            height in 150.0f64..210.0,
            waist in 60.0f64..140.0,
            neck in 30.0f64..50.0
        ) {
            let m = NavyTapeMeasurements {
                sex: BiologicalSex::Male,
                height_cm: height,
                waist_cm: waist,
                neck_cm: neck,
                hip_cm: None,
            };
            match body_fat_navy(&m) {
                Ok(percent) => prop_assert!(percent.is_finite()),
                Err(_) => {}
            }
        }
    }

    // =========================================================================
    // WHtR Tests
    // =========================================================================

    #[rstest]
    #[case(0.35, WhtrCategory::BelowRange)]
    #[case(0.40, WhtrCategory::Healthy)]
    #[case(0.49, WhtrCategory::Healthy)]
    #[case(0.50, WhtrCategory::IncreasedRisk)]
    #[case(0.59, WhtrCategory::IncreasedRisk)]
    #[case(0.60, WhtrCategory::HighRisk)]
    fn test_whtr_bands(#[case] ratio: f64, #[case] expected: WhtrCategory) {
        assert_eq!(WhtrCategory::bands().classify(ratio), expected);
    }

    #[test]
    fn test_whtr_calculation() {
        let result = waist_to_height_ratio(85.0, 170.0).unwrap();
        assert!((result.ratio - 0.5).abs() < 0.001);
        assert_eq!(result.category, WhtrCategory::IncreasedRisk);
    }

    #[test]
    fn test_whtr_rejects_zero_height() {
        assert!(waist_to_height_ratio(85.0, 0.0).is_err());
    }
}
