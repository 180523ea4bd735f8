//! Shared profile types used across calculators

use crate::errors::{CalcError, CalcResult};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Biological sex for health calculations
/// Note: This is used for physiological formula branches only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl std::str::FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(BiologicalSex::Male),
            "female" | "f" => Ok(BiologicalSex::Female),
            _ => Err(format!("Unknown biological sex: {}", s)),
        }
    }
}

/// Activity level for TDEE and hydration calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" => Ok(ActivityLevel::VeryActive),
            "extra_active" => Ok(ActivityLevel::ExtraActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Profile data shared by the body-composition and energy calculators,
/// stored in canonical units
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HealthProfile {
    /// Height in centimeters
    #[validate(range(min = 50.0, max = 300.0))]
    pub height_cm: f64,
    /// Current weight in kilograms
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight_kg: f64,
    /// Age in years
    #[validate(range(min = 1, max = 120))]
    pub age_years: i32,
    /// Biological sex for physiological calculations
    pub sex: BiologicalSex,
    /// Activity level for TDEE
    pub activity_level: ActivityLevel,
}

impl HealthProfile {
    /// Run the derive-based range checks, folding failures into the library
    /// error type
    pub fn check_ranges(&self) -> CalcResult<()> {
        self.validate()
            .map_err(|errors| CalcError::invalid("profile", errors.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::LightlyActive.multiplier(), 1.375);
        assert_eq!(ActivityLevel::ModeratelyActive.multiplier(), 1.55);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.725);
        assert_eq!(ActivityLevel::ExtraActive.multiplier(), 1.9);
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("male".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
        assert_eq!("Female".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);
        assert!("other".parse::<BiologicalSex>().is_err());
    }

    #[test]
    fn test_profile_range_checks() {
        let mut profile = HealthProfile {
            height_cm: 180.0,
            weight_kg: 80.0,
            age_years: 30,
            sex: BiologicalSex::Male,
            activity_level: ActivityLevel::ModeratelyActive,
        };
        assert!(profile.check_ranges().is_ok());

        profile.height_cm = 20.0;
        assert!(profile.check_ranges().is_err());
    }

    #[test]
    fn test_activity_parsing() {
        assert_eq!(
            "moderately_active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert!("super_active".parse::<ActivityLevel>().is_err());
    }
}
