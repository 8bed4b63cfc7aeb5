//! BMI calculator API routes
//!
//! Handles the measurement submission, the record listing, the aggregate
//! statistics view, and the per-category recommendation chart.

use crate::error::ApiError;
use crate::repositories::MeasurementRecord;
use crate::services::Statistics;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Form, Json,
};
use powerfit_shared::bmi::BmiAssessment;
use powerfit_shared::recommendations::{self, RecommendationChart};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Raw form submission; fields arrive as strings and are parsed here
#[derive(Debug, Deserialize)]
pub struct CalculateForm {
    pub age: String,
    pub height: String,
    pub weight: String,
}

/// Statistics response
#[derive(Serialize)]
pub struct StatisticsResponse {
    pub total_count: i64,
    /// Absent when no records exist
    pub average_bmi: Option<f64>,
    pub counts_by_category: CountsByCategory,
}

/// Per-category counts, zero-filled for the four fixed categories
#[derive(Serialize)]
pub struct CountsByCategory {
    pub underweight: i64,
    pub normal: i64,
    pub overweight: i64,
    pub obese: i64,
}

/// Recommendation chart response; chart is null for categories without one
#[derive(Serialize)]
pub struct ChartResponse {
    pub category: String,
    pub chart: Option<&'static RecommendationChart>,
}

/// Parse one form field into its numeric type
///
/// No range validation follows: the only failure mode is a value that is
/// not convertible to the target type.
fn parse_field<T: FromStr>(name: &str, raw: &str) -> Result<T, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("field '{name}' is not a valid number")))
}

/// POST /calculate - submit a measurement
///
/// Computes BMI and category, persists the record (best effort), and
/// returns the assessment. A persistence failure never fails the request.
pub async fn calculate(
    State(state): State<AppState>,
    Form(form): Form<CalculateForm>,
) -> Result<Json<BmiAssessment>, ApiError> {
    let age: i32 = parse_field("age", &form.age)?;
    let height_cm: f64 = parse_field("height", &form.height)?;
    let weight_kg: f64 = parse_field("weight", &form.weight)?;

    let assessment = state.measurements.submit(age, height_cm, weight_kg).await;

    Ok(Json(assessment))
}

/// GET /users - list all measurement records in insertion order
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<MeasurementRecord>>, ApiError> {
    let records = state.measurements.list_all().await?;
    Ok(Json(records))
}

/// GET /statistics - aggregate counts and average BMI
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let stats: Statistics = state.measurements.statistics().await?;

    Ok(Json(StatisticsResponse {
        total_count: stats.total_count,
        average_bmi: stats.average_bmi,
        counts_by_category: CountsByCategory {
            underweight: stats.counts.underweight,
            normal: stats.counts.normal,
            overweight: stats.counts.overweight,
            obese: stats.counts.obese,
        },
    }))
}

/// GET /personalized-chart/{category} - diet and exercise recommendations
///
/// Unknown categories (and "Normal", which has no chart by design) return
/// a null chart with status 200, an empty state rather than an error.
pub async fn personalized_chart(Path(category): Path<String>) -> Json<ChartResponse> {
    let chart = recommendations::lookup(&category);
    Json(ChartResponse { category, chart })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_numbers() {
        assert_eq!(parse_field::<i32>("age", "30").unwrap(), 30);
        assert_eq!(parse_field::<f64>("height", "170.5").unwrap(), 170.5);
        assert_eq!(parse_field::<f64>("weight", " 70 ").unwrap(), 70.0);
    }

    #[test]
    fn test_parse_field_accepts_out_of_range_values() {
        // Range validation is intentionally absent
        assert_eq!(parse_field::<i32>("age", "-5").unwrap(), -5);
        assert_eq!(parse_field::<f64>("height", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_field_rejects_non_numeric() {
        let err = parse_field::<i32>("age", "thirty").unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg.contains("age")));

        assert!(parse_field::<f64>("weight", "").is_err());
        assert!(parse_field::<i32>("age", "30.5").is_err()); // integer field
    }

    #[tokio::test]
    async fn test_chart_for_unknown_category_is_null() {
        let response = personalized_chart(Path("Unknown".to_string())).await;
        assert!(response.chart.is_none());
        assert_eq!(response.category, "Unknown");
    }

    #[tokio::test]
    async fn test_chart_for_obese_is_present() {
        let response = personalized_chart(Path("Obese".to_string())).await;
        let chart = response.chart.expect("chart should exist");
        assert!(!chart.diet.is_empty());
        assert!(!chart.exercise.is_empty());
    }
}
