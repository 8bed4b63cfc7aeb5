//! Database repositories
//!
//! Provides the data access layer for measurement records.

pub mod measurement;

pub use measurement::{
    CategoryCount, MeasurementRecord, MeasurementStore, NewMeasurement, PgMeasurementStore,
    StoreAggregates,
};
