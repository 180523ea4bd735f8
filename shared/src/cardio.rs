//! Cardiovascular calculators
//!
//! Max heart rate, Karvonen target heart rate and training zones, mean
//! arterial pressure, blood pressure staging, and the Cooper 12-minute
//! VO2max test.

use crate::category::{Bands, Severity};
use crate::errors::{CalcError, CalcResult};
use crate::validation::{
    validate_age_years, validate_blood_pressure, validate_distance_meters, validate_heart_rate,
    validate_intensity,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Max Heart Rate
// ============================================================================

/// Max heart rate estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHrFormula {
    /// 220 − age
    #[default]
    Standard,
    /// Tanaka: 208 − 0.7 × age
    Tanaka,
}

/// Estimate maximum heart rate from age
pub fn max_heart_rate(age_years: i32, formula: MaxHrFormula) -> CalcResult<f64> {
    validate_age_years(age_years)?;
    let age = age_years as f64;
    Ok(match formula {
        MaxHrFormula::Standard => 220.0 - age,
        MaxHrFormula::Tanaka => 208.0 - 0.7 * age,
    })
}

// ============================================================================
// Karvonen Target Heart Rate
// ============================================================================

/// Target heart rate via the Karvonen heart-rate-reserve method
///
/// THR = (MHR − RHR) × intensity + RHR
pub fn karvonen_target_hr(max_hr: f64, resting_hr: f64, intensity: f64) -> CalcResult<f64> {
    validate_heart_rate("max_heart_rate", max_hr)?;
    validate_heart_rate("resting_heart_rate", resting_hr)?;
    validate_intensity(intensity)?;
    if resting_hr >= max_hr {
        return Err(CalcError::invalid(
            "resting_heart_rate",
            "must be below max heart rate",
        ));
    }
    Ok((max_hr - resting_hr) * intensity + resting_hr)
}

/// One training zone row for the zones table
#[derive(Debug, Clone, Serialize)]
pub struct HeartRateZone {
    /// Zone number, 1 (easiest) through 5
    pub zone: u8,
    pub name: &'static str,
    /// Intensity fraction at the zone floor
    pub intensity_low: f64,
    /// Intensity fraction at the zone ceiling
    pub intensity_high: f64,
    pub low_bpm: f64,
    pub high_bpm: f64,
}

const ZONE_DEFINITIONS: [(u8, &str, f64, f64); 5] = [
    (1, "Very Light", 0.50, 0.60),
    (2, "Light", 0.60, 0.70),
    (3, "Moderate", 0.70, 0.80),
    (4, "Hard", 0.80, 0.90),
    (5, "Maximum", 0.90, 1.00),
];

/// Build the five training zones.
///
/// With a resting heart rate the bounds use the Karvonen reserve method;
/// without one they fall back to straight percentages of max heart rate.
pub fn heart_rate_zones(max_hr: f64, resting_hr: Option<f64>) -> CalcResult<Vec<HeartRateZone>> {
    validate_heart_rate("max_heart_rate", max_hr)?;
    if resting_hr.is_none() {
        tracing::debug!("no resting HR supplied, falling back to %MHR zones");
    }

    let bpm_at = |intensity: f64| -> CalcResult<f64> {
        match resting_hr {
            Some(rhr) => karvonen_target_hr(max_hr, rhr, intensity),
            None => Ok(max_hr * intensity),
        }
    };

    ZONE_DEFINITIONS
        .iter()
        .map(|&(zone, name, low, high)| {
            Ok(HeartRateZone {
                zone,
                name,
                intensity_low: low,
                intensity_high: high,
                low_bpm: bpm_at(low)?,
                high_bpm: bpm_at(high)?,
            })
        })
        .collect()
}

// ============================================================================
// Mean Arterial Pressure
// ============================================================================

/// MAP band (normal perfusion pressure is roughly 70-100 mmHg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapCategory {
    Low,
    Normal,
    High,
}

impl MapCategory {
    pub fn bands() -> Bands<MapCategory> {
        Bands::new(
            MapCategory::Low,
            vec![(70.0, MapCategory::Normal), (100.0, MapCategory::High)],
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            MapCategory::Low => "Below Normal",
            MapCategory::Normal => "Normal",
            MapCategory::High => "Above Normal",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            MapCategory::Low => Severity::Warning,
            MapCategory::Normal => Severity::Good,
            MapCategory::High => Severity::Warning,
        }
    }
}

/// Mean arterial pressure result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapResult {
    pub map_mmhg: f64,
    pub category: MapCategory,
}

/// Mean arterial pressure
///
/// MAP = (SBP + 2×DBP) / 3
pub fn mean_arterial_pressure(systolic: f64, diastolic: f64) -> CalcResult<MapResult> {
    validate_blood_pressure(systolic, diastolic)?;
    let map_mmhg = (systolic + 2.0 * diastolic) / 3.0;
    Ok(MapResult {
        map_mmhg,
        category: MapCategory::bands().classify(map_mmhg),
    })
}

// ============================================================================
// Blood Pressure Staging
// ============================================================================

/// Blood pressure category (ACC/AHA 2017 staging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    /// Systolic < 120 and diastolic < 80
    Normal,
    /// Systolic 120-129 and diastolic < 80
    Elevated,
    /// Systolic 130-139 or diastolic 80-89
    HypertensionStage1,
    /// Systolic ≥ 140 or diastolic ≥ 90
    HypertensionStage2,
    /// Systolic > 180 or diastolic > 120
    HypertensiveCrisis,
}

impl BloodPressureCategory {
    pub fn description(&self) -> &'static str {
        match self {
            BloodPressureCategory::Normal => "Normal",
            BloodPressureCategory::Elevated => "Elevated",
            BloodPressureCategory::HypertensionStage1 => "Stage 1 Hypertension",
            BloodPressureCategory::HypertensionStage2 => "Stage 2 Hypertension",
            BloodPressureCategory::HypertensiveCrisis => "Hypertensive Crisis",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            BloodPressureCategory::Normal => Severity::Good,
            BloodPressureCategory::Elevated => Severity::Caution,
            BloodPressureCategory::HypertensionStage1 => Severity::Warning,
            BloodPressureCategory::HypertensionStage2 => Severity::Warning,
            BloodPressureCategory::HypertensiveCrisis => Severity::Danger,
        }
    }
}

/// Stage a blood pressure reading.
///
/// Unlike the scalar categorizers this classifies on two axes at once: the
/// reading takes the more severe stage implied by either number.
pub fn classify_blood_pressure(
    systolic: f64,
    diastolic: f64,
) -> CalcResult<BloodPressureCategory> {
    validate_blood_pressure(systolic, diastolic)?;
    let category = if systolic > 180.0 || diastolic > 120.0 {
        BloodPressureCategory::HypertensiveCrisis
    } else if systolic >= 140.0 || diastolic >= 90.0 {
        BloodPressureCategory::HypertensionStage2
    } else if systolic >= 130.0 || diastolic >= 80.0 {
        BloodPressureCategory::HypertensionStage1
    } else if systolic >= 120.0 {
        BloodPressureCategory::Elevated
    } else {
        BloodPressureCategory::Normal
    };
    Ok(category)
}

// ============================================================================
// Cooper VO2max
// ============================================================================

/// Aerobic fitness rating for a VO2max value (general adult bands)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vo2maxRating {
    Poor,
    Fair,
    Good,
    Excellent,
    Superior,
}

impl Vo2maxRating {
    pub fn bands() -> Bands<Vo2maxRating> {
        Bands::new(
            Vo2maxRating::Poor,
            vec![
                (25.0, Vo2maxRating::Fair),
                (35.0, Vo2maxRating::Good),
                (45.0, Vo2maxRating::Excellent),
                (55.0, Vo2maxRating::Superior),
            ],
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            Vo2maxRating::Poor => "Poor",
            Vo2maxRating::Fair => "Fair",
            Vo2maxRating::Good => "Good",
            Vo2maxRating::Excellent => "Excellent",
            Vo2maxRating::Superior => "Superior",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Vo2maxRating::Poor => Severity::Warning,
            Vo2maxRating::Fair => Severity::Caution,
            Vo2maxRating::Good => Severity::Info,
            Vo2maxRating::Excellent => Severity::Good,
            Vo2maxRating::Superior => Severity::Good,
        }
    }
}

/// Cooper test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vo2maxResult {
    /// ml/kg/min
    pub vo2max: f64,
    pub rating: Vo2maxRating,
}

/// Estimate VO2max from the Cooper 12-minute run test
///
/// Formula: VO2max = (distance(m) − 504.9) / 44.73
pub fn vo2max_cooper(distance_meters: f64) -> CalcResult<Vo2maxResult> {
    validate_distance_meters(distance_meters)?;
    let vo2max = (distance_meters - 504.9) / 44.73;
    if vo2max <= 0.0 {
        return Err(CalcError::undefined(
            "distance too short for the Cooper estimate",
        ));
    }
    Ok(Vo2maxResult {
        vo2max,
        rating: Vo2maxRating::bands().classify(vo2max),
    })
}
