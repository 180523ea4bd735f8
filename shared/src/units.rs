//! Unit conversion and normalization module
//!
//! This module provides type-safe unit handling with automatic conversion.
//! All calculator inputs are normalized to canonical units (kg, cm, mg/dL)
//! once on submission; unit toggles on the page are a display transform
//! applied with `from_*` at render time, never a mutation of the stored
//! canonical value.
//!
//! # Design Principles
//!
//! 1. **Canonical Storage**: All computation uses one unit system
//! 2. **Type Safety**: Units are explicit in types, not just f64
//! 3. **Conversion at Boundaries**: Convert on input/output, not in formulas
//! 4. **Round-Trip Safety**: A→B→A reproduces the value within float rounding

use crate::errors::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
    Stone, // For UK users
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * 0.453592,
            WeightUnit::Stone => value * 6.35029,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg / 0.453592,
            WeightUnit::Stone => kg / 6.35029,
        }
    }

    /// Convert a value expressed in this unit into a target unit
    pub fn convert(&self, value: f64, target: WeightUnit) -> f64 {
        target.from_kg(self.to_kg(value))
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
            WeightUnit::Stone => "st",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for WeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            "st" | "stone" | "stones" => Ok(WeightUnit::Stone),
            _ => Err(format!("Unknown weight unit: {}", s)),
        }
    }
}

// ============================================================================
// Height/Length Units
// ============================================================================

/// Height/length unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Meters,
    Inches,
    FeetInches, // Special case: stored as total inches
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Meters => value * 100.0,
            HeightUnit::Inches | HeightUnit::FeetInches => value * 2.54,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Meters => cm / 100.0,
            HeightUnit::Inches | HeightUnit::FeetInches => cm / 2.54,
        }
    }

    /// Convert a value expressed in this unit into a target unit
    pub fn convert(&self, value: f64, target: HeightUnit) -> f64 {
        target.from_cm(self.to_cm(value))
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Meters => "m",
            HeightUnit::Inches => "in",
            HeightUnit::FeetInches => "ft/in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl std::str::FromStr for HeightUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "m" | "meter" | "meters" => Ok(HeightUnit::Meters),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            "ft" | "feet" | "ft/in" | "feet/inches" => Ok(HeightUnit::FeetInches),
            _ => Err(format!("Unknown height unit: {}", s)),
        }
    }
}

// ============================================================================
// Distance Units (for exercise tests)
// ============================================================================

/// Distance unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[default]
    Km,
    Miles,
    Meters,
}

impl DistanceUnit {
    /// Convert from this unit to meters
    pub fn to_meters(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Meters => value,
            DistanceUnit::Km => value * 1000.0,
            DistanceUnit::Miles => value * 1609.344,
        }
    }

    /// Convert from meters to this unit
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            DistanceUnit::Meters => meters,
            DistanceUnit::Km => meters / 1000.0,
            DistanceUnit::Miles => meters / 1609.344,
        }
    }

    /// Convert a value expressed in this unit into a target unit
    pub fn convert(&self, value: f64, target: DistanceUnit) -> f64 {
        target.from_meters(self.to_meters(value))
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Meters => "m",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Energy Units
// ============================================================================

/// Energy unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnergyUnit {
    #[default]
    Kcal,
    Kj,
}

impl EnergyUnit {
    /// Convert from this unit to kcal
    pub fn to_kcal(&self, value: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => value,
            EnergyUnit::Kj => value / 4.184,
        }
    }

    /// Convert from kcal to this unit
    pub fn from_kcal(&self, kcal: f64) -> f64 {
        match self {
            EnergyUnit::Kcal => kcal,
            EnergyUnit::Kj => kcal * 4.184,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            EnergyUnit::Kcal => "kcal",
            EnergyUnit::Kj => "kJ",
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Volume Units (hydration)
// ============================================================================

/// Volume unit preference for fluid intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    Ml,
    Liters,
    FlOz,
    Cups, // 240 ml metric cup
}

impl VolumeUnit {
    /// Convert from this unit to milliliters
    pub fn to_ml(&self, value: f64) -> f64 {
        match self {
            VolumeUnit::Ml => value,
            VolumeUnit::Liters => value * 1000.0,
            VolumeUnit::FlOz => value * 29.5735,
            VolumeUnit::Cups => value * 240.0,
        }
    }

    /// Convert from milliliters to this unit
    pub fn from_ml(&self, ml: f64) -> f64 {
        match self {
            VolumeUnit::Ml => ml,
            VolumeUnit::Liters => ml / 1000.0,
            VolumeUnit::FlOz => ml / 29.5735,
            VolumeUnit::Cups => ml / 240.0,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            VolumeUnit::Ml => "ml",
            VolumeUnit::Liters => "L",
            VolumeUnit::FlOz => "fl oz",
            VolumeUnit::Cups => "cups",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Serum Creatinine Units (renal)
// ============================================================================

/// Laboratory unit for serum creatinine concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CreatinineUnit {
    /// Conventional units (US labs)
    #[default]
    MgDl,
    /// SI units (most other labs); 1 mg/dL = 88.4 µmol/L
    UmolL,
}

impl CreatinineUnit {
    /// Convert from this unit to mg/dL
    pub fn to_mg_dl(&self, value: f64) -> f64 {
        match self {
            CreatinineUnit::MgDl => value,
            CreatinineUnit::UmolL => value / 88.4,
        }
    }

    /// Convert from mg/dL to this unit
    pub fn from_mg_dl(&self, mg_dl: f64) -> f64 {
        match self {
            CreatinineUnit::MgDl => mg_dl,
            CreatinineUnit::UmolL => mg_dl * 88.4,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            CreatinineUnit::MgDl => "mg/dL",
            CreatinineUnit::UmolL => "µmol/L",
        }
    }
}

impl fmt::Display for CreatinineUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

// ============================================================================
// Unit System Presets
// ============================================================================

/// Which unit system a calculator form is toggled to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Display preferences for this system
    pub fn preferences(&self) -> UnitPreferences {
        match self {
            UnitSystem::Metric => UnitPreferences::metric(),
            UnitSystem::Imperial => UnitPreferences::imperial(),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

/// Complete display unit preferences for a calculator page
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UnitPreferences {
    pub weight: WeightUnit,
    pub height: HeightUnit,
    pub distance: DistanceUnit,
    pub energy: EnergyUnit,
    pub volume: VolumeUnit,
    pub creatinine: CreatinineUnit,
}

impl UnitPreferences {
    /// Create metric preferences (SI units)
    pub fn metric() -> Self {
        Self {
            weight: WeightUnit::Kg,
            height: HeightUnit::Cm,
            distance: DistanceUnit::Km,
            energy: EnergyUnit::Kcal,
            volume: VolumeUnit::Ml,
            creatinine: CreatinineUnit::UmolL,
        }
    }

    /// Create imperial preferences (US units)
    pub fn imperial() -> Self {
        Self {
            weight: WeightUnit::Lbs,
            height: HeightUnit::FeetInches,
            distance: DistanceUnit::Miles,
            energy: EnergyUnit::Kcal,
            volume: VolumeUnit::FlOz,
            creatinine: CreatinineUnit::MgDl,
        }
    }

    /// Create UK preferences
    pub fn uk() -> Self {
        Self {
            weight: WeightUnit::Stone,
            height: HeightUnit::FeetInches,
            distance: DistanceUnit::Miles,
            energy: EnergyUnit::Kcal,
            volume: VolumeUnit::Ml,
            creatinine: CreatinineUnit::UmolL,
        }
    }
}

// ============================================================================
// Height Display Helper
// ============================================================================

/// Represents height in feet and inches for display and form entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Create from total inches
    pub fn from_total_inches(total_inches: f64) -> Self {
        let feet = (total_inches / 12.0).floor() as i32;
        let inches = total_inches % 12.0;
        Self { feet, inches }
    }

    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    /// Create from centimeters
    pub fn from_cm(cm: f64) -> Self {
        let total_inches = cm / 2.54;
        Self::from_total_inches(total_inches)
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        self.to_total_inches() * 2.54
    }

    /// Parse a form-field string like `5'10"`, `5' 10`, or `5 ft 10 in`
    pub fn parse(input: &str) -> CalcResult<Self> {
        let re = regex_lite::Regex::new(
            r#"^\s*(\d{1,2})\s*(?:'|ft|feet)\s*(?:(\d{1,2}(?:\.\d+)?)\s*(?:"|in|inches)?)?\s*$"#,
        )
        .expect("static regex");

        let caps = re
            .captures(input)
            .ok_or_else(|| CalcError::invalid("height", format!("cannot parse '{}'", input)))?;

        let feet: i32 = caps[1]
            .parse()
            .map_err(|_| CalcError::invalid("height", "feet component is not a number"))?;
        let inches: f64 = caps
            .get(2)
            .map(|m| m.as_str().parse())
            .transpose()
            .map_err(|_| CalcError::invalid("height", "inches component is not a number"))?
            .unwrap_or(0.0);

        if inches >= 12.0 {
            return Err(CalcError::invalid("height", "inches must be below 12"));
        }

        Ok(Self { feet, inches })
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

impl std::str::FromStr for FeetInchesHeight {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
