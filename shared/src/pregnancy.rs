//! Pregnancy calculators
//!
//! Weight-gain trajectory from the IOM total-gain recommendations by
//! pre-pregnancy BMI, plus due date and gestational age from the last
//! menstrual period.

use crate::body::calculate_bmi;
use crate::category::Bands;
use crate::errors::{CalcError, CalcResult};
use crate::series::{DerivedSeries, SeriesPoint};
use crate::validation::validate_gestational_week;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Gestation length used for the due date estimate (Naegele's rule)
const GESTATION_DAYS: i64 = 280;

/// Cumulative gain band at the end of the first trimester (week 13), in kg
const FIRST_TRIMESTER_GAIN_KG: (f64, f64) = (0.5, 2.0);

/// Pre-pregnancy BMI class used by the IOM recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IomBmiClass {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl IomBmiClass {
    /// The IOM table collapses the WHO BMI categories to four classes
    pub fn bands() -> Bands<IomBmiClass> {
        Bands::new(
            IomBmiClass::Underweight,
            vec![
                (18.5, IomBmiClass::NormalWeight),
                (25.0, IomBmiClass::Overweight),
                (30.0, IomBmiClass::Obese),
            ],
        )
    }

    pub fn from_bmi(bmi: f64) -> IomBmiClass {
        Self::bands().classify(bmi)
    }

    /// Recommended total gain over the full pregnancy as (min, max) kg
    pub fn total_gain_bounds_kg(&self) -> (f64, f64) {
        match self {
            IomBmiClass::Underweight => (12.5, 18.0),
            IomBmiClass::NormalWeight => (11.5, 16.0),
            IomBmiClass::Overweight => (7.0, 11.5),
            IomBmiClass::Obese => (5.0, 9.0),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IomBmiClass::Underweight => "Underweight (BMI below 18.5)",
            IomBmiClass::NormalWeight => "Normal Weight (BMI 18.5-24.9)",
            IomBmiClass::Overweight => "Overweight (BMI 25-29.9)",
            IomBmiClass::Obese => "Obese (BMI 30 and above)",
        }
    }
}

/// Cumulative recommended gain at a gestational week as (min, max) kg.
///
/// Piecewise linear: a slow climb to 0.5-2 kg by week 13, then a straight
/// line to the IOM total at week 40.
pub fn gain_bounds_at_week(class: IomBmiClass, week: u32) -> CalcResult<(f64, f64)> {
    validate_gestational_week(week)?;
    let week = week.min(40) as f64;
    let (total_min, total_max) = class.total_gain_bounds_kg();
    let (tri_min, tri_max) = FIRST_TRIMESTER_GAIN_KG;

    let bounds = if week <= 13.0 {
        let fraction = week / 13.0;
        (tri_min * fraction, tri_max * fraction)
    } else {
        let fraction = (week - 13.0) / 27.0;
        (
            tri_min + (total_min - tri_min) * fraction,
            tri_max + (total_max - tri_max) * fraction,
        )
    };
    Ok(bounds)
}

/// Full trajectory result for the pregnancy weight chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PregnancyTrajectory {
    pub pre_pregnancy_bmi: f64,
    pub bmi_class: IomBmiClass,
    /// Recommended total gain as (min, max) kg
    pub total_gain_bounds_kg: (f64, f64),
    /// Cumulative minimum recommended gain, sampled every two weeks
    pub lower: DerivedSeries,
    /// Cumulative maximum recommended gain, sampled every two weeks
    pub upper: DerivedSeries,
}

/// Build the recommended weight-gain trajectory from pre-pregnancy stats
pub fn weight_gain_trajectory(
    pre_pregnancy_weight_kg: f64,
    height_cm: f64,
) -> CalcResult<PregnancyTrajectory> {
    let bmi = calculate_bmi(pre_pregnancy_weight_kg, height_cm)?;
    let class = IomBmiClass::from_bmi(bmi);
    tracing::debug!("pre-pregnancy BMI {:.1} maps to {:?}", bmi, class);

    // sampled every two weeks; charts never need more than 40 points
    let weeks: Vec<u32> = (0..=40).step_by(2).collect();
    let mut lower = Vec::with_capacity(weeks.len());
    let mut upper = Vec::with_capacity(weeks.len());
    for week in weeks {
        let (min, max) = gain_bounds_at_week(class, week)?;
        lower.push(SeriesPoint { x: week as f64, y: min });
        upper.push(SeriesPoint { x: week as f64, y: max });
    }

    Ok(PregnancyTrajectory {
        pre_pregnancy_bmi: bmi,
        bmi_class: class,
        total_gain_bounds_kg: class.total_gain_bounds_kg(),
        lower: DerivedSeries {
            name: "Minimum recommended gain".to_string(),
            points: lower,
        },
        upper: DerivedSeries {
            name: "Maximum recommended gain".to_string(),
            points: upper,
        },
    })
}

/// Estimated due date from the last menstrual period (Naegele's rule)
pub fn due_date(last_period: NaiveDate) -> NaiveDate {
    last_period + Duration::days(GESTATION_DAYS)
}

/// Completed gestational weeks on a given date
pub fn gestational_week(last_period: NaiveDate, on: NaiveDate) -> CalcResult<u32> {
    let days = (on - last_period).num_days();
    if days < 0 {
        return Err(CalcError::invalid(
            "last_period",
            "must not be after the current date",
        ));
    }
    let week = (days / 7) as u32;
    validate_gestational_week(week)?;
    Ok(week)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(17.0, IomBmiClass::Underweight)]
    #[case(18.5, IomBmiClass::NormalWeight)]
    #[case(22.0, IomBmiClass::NormalWeight)]
    #[case(25.0, IomBmiClass::Overweight)]
    #[case(30.0, IomBmiClass::Obese)]
    #[case(45.0, IomBmiClass::Obese)]
    fn test_iom_classes(#[case] bmi: f64, #[case] expected: IomBmiClass) {
        assert_eq!(IomBmiClass::from_bmi(bmi), expected);
    }

    #[test]
    fn test_gain_endpoints() {
        // Week 0: nothing gained yet
        assert_eq!(
            gain_bounds_at_week(IomBmiClass::NormalWeight, 0).unwrap(),
            (0.0, 0.0)
        );
        // Week 13: first trimester band
        let (min, max) = gain_bounds_at_week(IomBmiClass::NormalWeight, 13).unwrap();
        assert!((min - 0.5).abs() < 1e-9);
        assert!((max - 2.0).abs() < 1e-9);
        // Week 40: the IOM totals
        let (min, max) = gain_bounds_at_week(IomBmiClass::NormalWeight, 40).unwrap();
        assert!((min - 11.5).abs() < 1e-9);
        assert!((max - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_gain_rejects_week_past_term() {
        assert!(gain_bounds_at_week(IomBmiClass::NormalWeight, 43).is_err());
    }

    #[test]
    fn test_trajectory_shape() {
        // 60kg at 165cm: BMI 22, normal class
        let result = weight_gain_trajectory(60.0, 165.0).unwrap();
        assert_eq!(result.bmi_class, IomBmiClass::NormalWeight);
        assert_eq!(result.lower.len(), 21);
        assert_eq!(result.upper.len(), 21);
        assert_eq!(result.total_gain_bounds_kg, (11.5, 16.0));

        // both curves rise monotonically and the band never inverts
        for series in [&result.lower, &result.upper] {
            assert!(series
                .points
                .windows(2)
                .all(|pair| pair[1].y >= pair[0].y));
        }
        for (lo, hi) in result.lower.points.iter().zip(result.upper.points.iter()) {
            assert!(hi.y >= lo.y);
        }
    }

    #[test]
    fn test_obese_class_gains_less() {
        let normal = weight_gain_trajectory(60.0, 165.0).unwrap();
        let obese = weight_gain_trajectory(90.0, 165.0).unwrap();
        assert_eq!(obese.bmi_class, IomBmiClass::Obese);
        let normal_final = normal.upper.points.last().unwrap().y;
        let obese_final = obese.upper.points.last().unwrap().y;
        assert!(obese_final < normal_final);
    }

    #[test]
    fn test_due_date() {
        let lmp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(due_date(lmp), NaiveDate::from_ymd_opt(2024, 10, 7).unwrap());
    }

    #[test]
    fn test_gestational_week() {
        let lmp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(); // 63 days
        assert_eq!(gestational_week(lmp, on).unwrap(), 9);
    }

    #[test]
    fn test_gestational_week_rejects_future_lmp() {
        let lmp = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let on = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(gestational_week(lmp, on).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: cumulative gain bounds are nondecreasing in the week,
        /// and the max bound never drops below the min bound
        #[test]
        fn prop_gain_monotone(week in 0u32..40) {
            for class in [
                IomBmiClass::Underweight,
                IomBmiClass::NormalWeight,
                IomBmiClass::Overweight,
                IomBmiClass::Obese,
            ] {
                let (min1, max1) = gain_bounds_at_week(class, week).unwrap();
                let (min2, max2) = gain_bounds_at_week(class, week + 1).unwrap();
                prop_assert!(min2 >= min1);
                prop_assert!(max2 >= max1);
                prop_assert!(max1 >= min1);
            }
        }
    }
}
