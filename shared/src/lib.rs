//! PowerFit Shared Library
//!
//! Pure domain logic shared across the workspace: BMI computation,
//! category classification, and the static recommendation catalog.

pub mod bmi;
pub mod recommendations;

// Re-export commonly used items
pub use bmi::{assess, calculate_bmi, classify_bmi, BmiAssessment, BmiCategory};
pub use recommendations::{lookup, RecommendationChart};
