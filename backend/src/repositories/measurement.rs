//! Measurement storage: trait and PostgreSQL implementation
//!
//! The store is an injected dependency of the measurement service rather
//! than an ambient session. Records are immutable once written; there is
//! no update or delete path.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;

/// Measurement record from the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MeasurementRecord {
    pub id: i64,
    pub age: i32,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    pub bmi: f64,
    pub category: String,
}

/// Input for creating a measurement record
///
/// bmi and category are derived from height/weight before insertion and
/// never recomputed afterwards.
#[derive(Debug, Clone)]
pub struct NewMeasurement {
    pub age: i32,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub category: String,
}

/// Per-category row count
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregates over the whole store
#[derive(Debug, Clone)]
pub struct StoreAggregates {
    pub total_count: i64,
    /// NULL (None) when the store is empty
    pub average_bmi: Option<f64>,
    /// Only categories with at least one row appear here
    pub per_category: Vec<CategoryCount>,
}

/// Storage abstraction for measurement records
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Append one immutable record, returning it with its assigned id
    async fn insert(&self, input: NewMeasurement) -> Result<MeasurementRecord>;

    /// All records in insertion order
    async fn list_all(&self) -> Result<Vec<MeasurementRecord>>;

    /// Count, average BMI, and per-category counts
    async fn aggregates(&self) -> Result<StoreAggregates>;
}

/// PostgreSQL-backed measurement store
#[derive(Clone)]
pub struct PgMeasurementStore {
    pool: PgPool,
}

impl PgMeasurementStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeasurementStore for PgMeasurementStore {
    async fn insert(&self, input: NewMeasurement) -> Result<MeasurementRecord> {
        // Explicit transaction lifecycle: commit on success, roll back the
        // attempted write on any failure.
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            INSERT INTO measurements (age, height, weight, bmi, category)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, age, height, weight, bmi, category
            "#,
        )
        .bind(input.age)
        .bind(input.height)
        .bind(input.weight)
        .bind(input.bmi)
        .bind(&input.category)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(record) => {
                tx.commit().await?;
                Ok(record)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e.into())
            }
        }
    }

    async fn list_all(&self) -> Result<Vec<MeasurementRecord>> {
        let records = sqlx::query_as::<_, MeasurementRecord>(
            r#"
            SELECT id, age, height, weight, bmi, category
            FROM measurements
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn aggregates(&self) -> Result<StoreAggregates> {
        let (total_count, average_bmi): (i64, Option<f64>) =
            sqlx::query_as("SELECT COUNT(*), AVG(bmi) FROM measurements")
                .fetch_one(&self.pool)
                .await?;

        let per_category = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM measurements
            GROUP BY category
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(StoreAggregates {
            total_count,
            average_bmi,
            per_category,
        })
    }
}
