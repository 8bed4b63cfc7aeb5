//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the domain core and the storage layer.

pub mod measurement;

pub use measurement::{CategoryCounts, MeasurementService, Statistics};
