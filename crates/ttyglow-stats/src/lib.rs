//! Host metrics for the dashboard.
//!
//! [`SystemCollector`] wraps `sysinfo` and implements
//! [`ttyglow_core::snapshot::MetricsSource`]. Interface selection lives in
//! [`net`] so it can be tested without real hardware.

pub mod net;
pub mod telemetry;

pub use telemetry::SystemCollector;
