//! BMI computation and classification
//!
//! Pure functions only, no side effects. Height is handled in centimeters
//! at the API boundary and converted to meters inside the formula.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// BMI category classification
///
/// The string form (capitalized variant name) is also the persisted
/// representation in the measurements table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// All categories, in classification order
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// User-facing message for this category
    pub fn message(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "You are underweight. Click the button for a personalized diet and exercise plan."
            }
            BmiCategory::Normal => {
                "You have a normal BMI. Continue to maintain your current diet and lifestyle."
            }
            BmiCategory::Overweight => {
                "You are overweight. Click the button for a personalized diet and exercise plan."
            }
            BmiCategory::Obese => {
                "You are obese. Click the button for a personalized diet and exercise plan."
            }
        }
    }

    /// Whether a personalized diet/exercise chart should be offered.
    /// False only for Normal.
    pub fn needs_advice(&self) -> bool {
        !matches!(self, BmiCategory::Normal)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing an unknown category string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown BMI category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for BmiCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Underweight" => Ok(BmiCategory::Underweight),
            "Normal" => Ok(BmiCategory::Normal),
            "Overweight" => Ok(BmiCategory::Overweight),
            "Obese" => Ok(BmiCategory::Obese),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
///
/// Thresholds are checked in order, first match wins. The literals are kept
/// exactly as shipped: Normal ends at 24.9 while Overweight starts at 25.0,
/// so [24.9, 25) falls through to Obese. Observed behavior, not to be
/// changed without a product decision.
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 24.9 {
        BmiCategory::Normal
    } else if (25.0..29.9).contains(&bmi) {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Full assessment of a single submission
#[derive(Debug, Clone, Serialize)]
pub struct BmiAssessment {
    /// BMI value
    pub bmi: f64,
    /// BMI category
    pub category: BmiCategory,
    /// User-facing message for the category
    pub message: &'static str,
    /// Whether personalized advice should be offered
    pub advice: bool,
}

/// Compute BMI and classify in one step
///
/// No range validation is performed: zero, negative, or absurd inputs are
/// processed as-is (accepted behavior carried over from the shipped system).
pub fn assess(weight_kg: f64, height_cm: f64) -> BmiAssessment {
    let bmi = calculate_bmi(weight_kg, height_cm);
    let category = classify_bmi(bmi);
    BmiAssessment {
        bmi,
        category,
        message: category.message(),
        advice: category.needs_advice(),
    }
}
