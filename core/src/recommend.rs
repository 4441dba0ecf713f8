//! BMI based training advice.
//!
//! The real line is split at 18.5 and 24.9. Each bound belongs to the range
//! above it, so every BMI value lands in exactly one [`BmiCategory`], and each
//! category carries three recommendations in a fixed order.

use std::fmt;

use coachr_common::CoachError;
use coachr_common::coaching::profile::Profile;
use coachr_common::config::Language;

pub const UNDERWEIGHT_BELOW: f64 = 18.5;
pub const OVERWEIGHT_FROM: f64 = 24.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
}

impl BmiCategory {
    /// Classifies a BMI value. NaN compares false against both bounds and
    /// therefore ends up as [`BmiCategory::Overweight`].
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if bmi < OVERWEIGHT_FROM {
            BmiCategory::Normal
        } else {
            BmiCategory::Overweight
        }
    }

    pub fn recommendations(self, language: Language) -> [&'static str; 3] {
        match (self, language) {
            (BmiCategory::Underweight, Language::English) => [
                "Gain muscle mass with weights.",
                "Strength routine 3x/week.",
                "High-protein diet.",
            ],
            (BmiCategory::Normal, Language::English) => [
                "Maintain with cardio exercises.",
                "Endurance routine 4x/week.",
                "Balanced calorie-controlled diet.",
            ],
            (BmiCategory::Overweight, Language::English) => [
                "Weight loss with aerobic exercises.",
                "HIIT routine 5x/week.",
                "Low-calorie, low-fat diet.",
            ],
            (BmiCategory::Underweight, Language::Spanish) => [
                "Ganar masa muscular con pesas.",
                "Rutina de fuerza 3 veces por semana.",
                "Dieta rica en proteínas.",
            ],
            (BmiCategory::Normal, Language::Spanish) => [
                "Mantener con ejercicios de cardio.",
                "Rutina de resistencia 4 veces por semana.",
                "Dieta balanceada con control calórico.",
            ],
            (BmiCategory::Overweight, Language::Spanish) => [
                "Pérdida de peso con ejercicios aeróbicos.",
                "Rutina HIIT 5 veces por semana.",
                "Dieta baja en calorías y grasas.",
            ],
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
        };
        f.write_str(name)
    }
}

/// Computes the profile's BMI and returns the advice for its category.
///
/// # Errors
/// * [`CoachError::InvalidHeight`] - The BMI cannot be computed.
pub fn recommendations_for(
    profile: &Profile,
    language: Language,
) -> Result<[&'static str; 3], CoachError> {
    let bmi: f64 = profile.bmi()?;
    Ok(BmiCategory::from_bmi(bmi).recommendations(language))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_belong_to_the_upper_range() {
        assert_eq!(BmiCategory::from_bmi(18.499), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.899), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Overweight);
    }

    #[test]
    fn partition_covers_extremes() {
        assert_eq!(BmiCategory::from_bmi(f64::NEG_INFINITY), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(-4.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(0.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(80.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(f64::INFINITY), BmiCategory::Overweight);
    }

    #[test]
    fn every_category_has_three_distinct_entries() {
        let categories = [BmiCategory::Underweight, BmiCategory::Normal, BmiCategory::Overweight];
        for language in [Language::English, Language::Spanish] {
            let mut seen: Vec<&str> = Vec::new();
            for category in categories {
                let recs = category.recommendations(language);
                assert_eq!(recs.len(), 3);
                for rec in recs {
                    assert!(!seen.contains(&rec), "{rec} appears in two categories");
                    seen.push(rec);
                }
            }
        }
    }

    #[test]
    fn recommendations_for_reference_profile() {
        let profile = Profile::new("Carlos Perez", 70.5, 1.75, 28, "Tres días a la semana");
        assert_eq!(
            recommendations_for(&profile, Language::English).unwrap(),
            [
                "Maintain with cardio exercises.",
                "Endurance routine 4x/week.",
                "Balanced calorie-controlled diet."
            ]
        );
        assert_eq!(
            recommendations_for(&profile, Language::Spanish).unwrap()[0],
            "Mantener con ejercicios de cardio."
        );
    }

    #[test]
    fn low_and_high_bmi_profiles() {
        let light = Profile::new("Light", 50.0, 1.80, 20, "");
        let heavy = Profile::new("Heavy", 95.0, 1.70, 45, "");
        assert_eq!(
            recommendations_for(&light, Language::English).unwrap()[1],
            "Strength routine 3x/week."
        );
        assert_eq!(
            recommendations_for(&heavy, Language::English).unwrap()[1],
            "HIIT routine 5x/week."
        );
    }

    #[test]
    fn zero_height_is_an_error() {
        let profile = Profile::new("Nobody", 70.0, 0.0, 30, "");
        assert!(recommendations_for(&profile, Language::English).is_err());
    }
}
