//! Observability: assignment telemetry and the sink it flows through.
//!
//! Field code never touches the counters directly; every checked
//! assignment is reported as an `AssignEvent` to the active `AssignSink`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{AssignReport, FieldCounters, FieldKey};
pub use sink::{AssignEvent, AssignSink, assign_report, assign_reset, with_assign_sink};
