//! # statushub-health
//!
//! On-demand reachability checks for the paired external endpoints.
//! Provides:
//!
//! - [`probe`]: a single bounded GET with latency measurement and
//!   data-level result classification
//! - [`aggregator`]: concurrent fan-out over a fixed target list under one
//!   shared absolute deadline, merging partial failures into a report
//! - [`report`]: the result/report types and their human-readable rendering

pub mod aggregator;
pub mod probe;
pub mod report;

pub use aggregator::HealthAggregator;
pub use probe::ProbeTarget;
pub use report::{HealthCheckResult, HealthReport};
