/*!
 * Sched-Sim Library
 * Deterministic CPU scheduling simulation exposed as a library
 */

pub mod core;
pub mod sim;

// Re-exports
pub use sim::{
    simulate, Interval, IntervalKind, Metrics, Policy, PolicyParams, PriorityBounds, Process,
    ProcessMetrics, SchedulingError, SimResult, SimulationReport, Timeline,
};
