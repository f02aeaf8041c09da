//! Data shapes exchanged with the GAS data source.

pub mod models;

pub use models::{Category, RedemptionEvent, Snapshot, Task, TaskPoints, ThresholdRule};
