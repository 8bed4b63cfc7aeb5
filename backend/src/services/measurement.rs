//! Measurement service
//!
//! Business logic for the BMI calculator: compute and classify a
//! submission, persist the record, and answer the two read queries
//! (list all records, aggregate statistics).

use crate::error::ApiError;
use crate::repositories::{MeasurementRecord, MeasurementStore, NewMeasurement};
use powerfit_shared::bmi::{assess, BmiAssessment, BmiCategory};
use std::sync::Arc;
use tracing::error;

/// Aggregate statistics over all measurements
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_count: i64,
    /// Absent when no records exist
    pub average_bmi: Option<f64>,
    pub counts: CategoryCounts,
}

/// Record counts for each of the four fixed categories, zero-filled
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub underweight: i64,
    pub normal: i64,
    pub overweight: i64,
    pub obese: i64,
}

impl CategoryCounts {
    pub fn get(&self, category: BmiCategory) -> i64 {
        match category {
            BmiCategory::Underweight => self.underweight,
            BmiCategory::Normal => self.normal,
            BmiCategory::Overweight => self.overweight,
            BmiCategory::Obese => self.obese,
        }
    }
}

/// Measurement service holding its injected store
#[derive(Clone)]
pub struct MeasurementService {
    store: Arc<dyn MeasurementStore>,
}

impl MeasurementService {
    pub fn new(store: Arc<dyn MeasurementStore>) -> Self {
        Self { store }
    }

    /// Process one submission: compute BMI, classify, persist.
    ///
    /// Persistence failure is logged and absorbed; the computed assessment
    /// is returned to the caller either way. Inputs are not range-checked
    /// (accepted behavior: zero and negative values pass through).
    pub async fn submit(&self, age: i32, height_cm: f64, weight_kg: f64) -> BmiAssessment {
        let assessment = assess(weight_kg, height_cm);

        let record = NewMeasurement {
            age,
            height: height_cm,
            weight: weight_kg,
            bmi: assessment.bmi,
            category: assessment.category.as_str().to_string(),
        };

        if let Err(e) = self.store.insert(record).await {
            error!(error = %e, "failed to persist measurement, returning computed result");
        }

        assessment
    }

    /// All persisted records in insertion order
    pub async fn list_all(&self) -> Result<Vec<MeasurementRecord>, ApiError> {
        self.store.list_all().await.map_err(ApiError::Internal)
    }

    /// Total count, average BMI, and zero-filled per-category counts
    pub async fn statistics(&self) -> Result<Statistics, ApiError> {
        let aggregates = self.store.aggregates().await.map_err(ApiError::Internal)?;

        let mut counts = CategoryCounts::default();
        for row in &aggregates.per_category {
            match row.category.parse::<BmiCategory>() {
                Ok(BmiCategory::Underweight) => counts.underweight = row.count,
                Ok(BmiCategory::Normal) => counts.normal = row.count,
                Ok(BmiCategory::Overweight) => counts.overweight = row.count,
                Ok(BmiCategory::Obese) => counts.obese = row.count,
                Err(e) => error!(error = %e, "measurement row with unknown category"),
            }
        }

        Ok(Statistics {
            total_count: aggregates.total_count,
            average_bmi: aggregates.average_bmi,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{CategoryCount, StoreAggregates};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory store used in place of Postgres
    #[derive(Default)]
    struct InMemoryStore {
        records: Mutex<Vec<MeasurementRecord>>,
    }

    #[async_trait]
    impl MeasurementStore for InMemoryStore {
        async fn insert(&self, input: NewMeasurement) -> anyhow::Result<MeasurementRecord> {
            let mut records = self.records.lock().unwrap();
            let record = MeasurementRecord {
                id: records.len() as i64 + 1,
                age: input.age,
                height: input.height,
                weight: input.weight,
                bmi: input.bmi,
                category: input.category,
            };
            records.push(record.clone());
            Ok(record)
        }

        async fn list_all(&self) -> anyhow::Result<Vec<MeasurementRecord>> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn aggregates(&self) -> anyhow::Result<StoreAggregates> {
            let records = self.records.lock().unwrap();
            let total_count = records.len() as i64;
            let average_bmi = if records.is_empty() {
                None
            } else {
                Some(records.iter().map(|r| r.bmi).sum::<f64>() / records.len() as f64)
            };
            let mut per_category: Vec<CategoryCount> = Vec::new();
            for record in records.iter() {
                match per_category.iter_mut().find(|c| c.category == record.category) {
                    Some(entry) => entry.count += 1,
                    None => per_category.push(CategoryCount {
                        category: record.category.clone(),
                        count: 1,
                    }),
                }
            }
            Ok(StoreAggregates {
                total_count,
                average_bmi,
                per_category,
            })
        }
    }

    /// Store whose writes always fail
    struct FailingStore;

    #[async_trait]
    impl MeasurementStore for FailingStore {
        async fn insert(&self, _input: NewMeasurement) -> anyhow::Result<MeasurementRecord> {
            Err(anyhow!("connection lost"))
        }

        async fn list_all(&self) -> anyhow::Result<Vec<MeasurementRecord>> {
            Ok(Vec::new())
        }

        async fn aggregates(&self) -> anyhow::Result<StoreAggregates> {
            Ok(StoreAggregates {
                total_count: 0,
                average_bmi: None,
                per_category: Vec::new(),
            })
        }
    }

    fn service_with(store: Arc<dyn MeasurementStore>) -> MeasurementService {
        MeasurementService::new(store)
    }

    #[tokio::test]
    async fn test_submit_persists_record_with_height_in_cm() {
        let store = Arc::new(InMemoryStore::default());
        let service = service_with(store.clone());

        let assessment = service.submit(30, 170.0, 70.0).await;

        assert!((assessment.bmi - 24.22).abs() < 0.01);
        assert_eq!(assessment.category, BmiCategory::Normal);
        assert!(!assessment.advice);

        let records = service.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].height, 170.0); // cm, not meters
        assert_eq!(records[0].category, "Normal");
    }

    #[tokio::test]
    async fn test_submit_survives_persistence_failure() {
        let service = service_with(Arc::new(FailingStore));

        let assessment = service.submit(30, 170.0, 70.0).await;

        // Computed result is returned even though nothing was written
        assert_eq!(assessment.category, BmiCategory::Normal);
        assert_eq!(service.list_all().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_submit_accepts_unvalidated_input() {
        let store = Arc::new(InMemoryStore::default());
        let service = service_with(store);

        // No range validation: negative age and tiny height go through
        let assessment = service.submit(-5, 1.0, 70.0).await;
        assert_eq!(assessment.category, BmiCategory::Obese);
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_statistics_empty_store() {
        let service = service_with(Arc::new(InMemoryStore::default()));

        let stats = service.statistics().await.unwrap();

        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.average_bmi, None);
        assert_eq!(stats.counts, CategoryCounts::default());
    }

    #[tokio::test]
    async fn test_statistics_counts_sum_to_total() {
        let service = service_with(Arc::new(InMemoryStore::default()));

        service.submit(25, 180.0, 50.0).await; // Underweight
        service.submit(30, 170.0, 70.0).await; // Normal
        service.submit(40, 170.0, 80.0).await; // Overweight
        service.submit(50, 160.0, 100.0).await; // Obese
        service.submit(35, 175.0, 68.0).await; // Normal

        let stats = service.statistics().await.unwrap();

        assert_eq!(stats.total_count, 5);
        let sum: i64 = BmiCategory::ALL.iter().map(|c| stats.counts.get(*c)).sum();
        assert_eq!(sum, stats.total_count);
        assert_eq!(stats.counts.normal, 2);
        assert!(stats.average_bmi.is_some());
    }
}
