/*!
 * Scheduling Simulation
 * Deterministic multi-policy CPU scheduling engine
 */

mod engine;
mod metrics;
mod policy;
mod timeline;
mod types;
mod validation;

pub use engine::simulate;
pub use timeline::Timeline;
pub use types::{
    Interval, IntervalKind, Metrics, Policy, PolicyParams, PriorityBounds, Process,
    ProcessMetrics, SchedulingError, SimResult, SimulationReport,
};
