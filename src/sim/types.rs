/*!
 * Simulation Types
 * Domain types for scheduling simulation runs
 */

use super::timeline::Timeline;
use crate::core::types::{Pid, Priority, SimTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Simulation operation result
pub type SimResult<T> = Result<T, SchedulingError>;

/// Validation errors, all detected before the simulation loop starts.
/// A failed run emits no partial timeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("process set is empty")]
    EmptyProcessSet,

    #[error("process {pid}: burst time {burst} must be greater than zero")]
    InvalidBurstTime { pid: Pid, burst: i64 },

    #[error("process {pid}: arrival time {arrival} must not be negative")]
    InvalidArrivalTime { pid: Pid, arrival: i64 },

    #[error("duplicate process id {pid}")]
    DuplicateProcessId { pid: Pid },

    #[error("process {pid}: priority {priority} outside declared bounds [{highest}, {lowest}]")]
    PriorityOutOfRange {
        pid: Pid,
        priority: Priority,
        highest: Priority,
        lowest: Priority,
    },

    #[error("{policy} requires declared priority bounds")]
    MissingPriorityBounds { policy: Policy },

    #[error("round robin requires a quantum greater than zero, got {quantum:?}")]
    InvalidQuantum { quantum: Option<i64> },
}

/// Scheduling policy
///
/// Closed variant set: each policy carries its own dispatch ordering and
/// preemption rule (see `policy.rs`), selected by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First come, first served; never preempts
    Fcfs,
    /// Shortest job first, non-preemptive
    SjfNonPreemptive,
    /// Shortest remaining time first (preemptive SJF)
    SjfPreemptive,
    /// Priority scheduling, non-preemptive
    PriorityNonPreemptive,
    /// Priority scheduling, preemptive
    PriorityPreemptive,
    /// Round robin with a fixed time quantum
    RoundRobin,
}

impl Policy {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "fcfs" | "first_come_first_served" => Ok(Self::Fcfs),
            "sjf" | "sjf_np" | "shortest_job_first" => Ok(Self::SjfNonPreemptive),
            "srtf" | "sjf_p" | "shortest_remaining_time_first" => Ok(Self::SjfPreemptive),
            "priority" | "priority_np" => Ok(Self::PriorityNonPreemptive),
            "priority_preemptive" | "priority_p" => Ok(Self::PriorityPreemptive),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(format!(
                "Invalid policy '{}'. Valid: fcfs, sjf, srtf, priority, priority_preemptive, round_robin",
                s
            )),
        }
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::SjfNonPreemptive => "sjf",
            Self::SjfPreemptive => "srtf",
            Self::PriorityNonPreemptive => "priority",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::RoundRobin => "round_robin",
        }
    }

    /// All policies, in display order
    pub const fn all() -> [Policy; 6] {
        [
            Self::Fcfs,
            Self::SjfNonPreemptive,
            Self::SjfPreemptive,
            Self::PriorityNonPreemptive,
            Self::PriorityPreemptive,
            Self::RoundRobin,
        ]
    }

    /// Whether the run must declare priority bounds
    pub const fn needs_priority_bounds(&self) -> bool {
        matches!(self, Self::PriorityNonPreemptive | Self::PriorityPreemptive)
    }

    /// Whether the run must declare a time quantum
    pub const fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Whether a running process can lose the CPU before completing or
    /// exhausting a quantum
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::PriorityPreemptive | Self::RoundRobin
        )
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Caller-declared priority range.
///
/// `highest` is the most urgent value and `lowest` the least urgent; the
/// numeric direction follows from which bound is smaller, the engine never
/// assumes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBounds {
    pub highest: Priority,
    pub lowest: Priority,
}

impl PriorityBounds {
    pub fn new(highest: Priority, lowest: Priority) -> Self {
        Self { highest, lowest }
    }

    /// Whether a priority value falls inside the declared range (inclusive)
    pub fn contains(&self, priority: Priority) -> bool {
        let lo = self.highest.min(self.lowest);
        let hi = self.highest.max(self.lowest);
        (lo..=hi).contains(&priority)
    }

    /// Urgency rank of a priority value: 0 is the most urgent, increasing
    /// toward the `lowest` bound regardless of numeric direction.
    pub(super) fn rank(&self, priority: Priority) -> i64 {
        if self.highest <= self.lowest {
            priority as i64 - self.highest as i64
        } else {
            self.highest as i64 - priority as i64
        }
    }
}

/// Policy-specific parameters.
///
/// Only the fields the chosen policy needs have to be populated; omitting a
/// required one fails validation instead of silently defaulting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_bounds: Option<PriorityBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl PolicyParams {
    /// No parameters; enough for FCFS and both SJF variants
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_quantum(quantum: i64) -> Self {
        Self {
            quantum: Some(quantum),
            ..Self::default()
        }
    }

    pub fn with_priority_bounds(highest: Priority, lowest: Priority) -> Self {
        Self {
            priority_bounds: Some(PriorityBounds::new(highest, lowest)),
            ..Self::default()
        }
    }
}

/// Process descriptor, immutable once submitted to a run.
///
/// Fields are signed so that caller-supplied data (for instance a JSON
/// scenario) is validated rather than coerced; the engine works on its own
/// unsigned copies after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub pid: Pid,
    pub arrival_time: i64,
    pub burst_time: i64,
    /// Meaningful only for priority policies
    #[serde(default)]
    pub priority: Priority,
}

impl Process {
    pub fn new(pid: Pid, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Owner of a timeline interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    /// The process with this pid held the CPU
    Process(Pid),
    /// No process was ready to run
    Idle,
}

/// One contiguous slice of simulated time, `end > start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub kind: IntervalKind,
    pub start: SimTime,
    pub end: SimTime,
}

impl Interval {
    pub fn busy(pid: Pid, start: SimTime, end: SimTime) -> Self {
        Self {
            kind: IntervalKind::Process(pid),
            start,
            end,
        }
    }

    pub fn idle(start: SimTime, end: SimTime) -> Self {
        Self {
            kind: IntervalKind::Idle,
            start,
            end,
        }
    }

    pub fn pid(&self) -> Option<Pid> {
        match self.kind {
            IntervalKind::Process(pid) => Some(pid),
            IntervalKind::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.kind, IntervalKind::Idle)
    }

    pub fn duration(&self) -> SimTime {
        self.end - self.start
    }
}

/// Per-process timings, stamped once the process finishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    pub pid: Pid,
    pub arrival_time: SimTime,
    pub burst_time: SimTime,
    pub completion_time: SimTime,
    /// completion - arrival
    pub turnaround_time: SimTime,
    /// turnaround - burst
    pub waiting_time: SimTime,
    /// first dispatch - arrival
    pub response_time: SimTime,
}

/// Per-process timings plus run-level averages.
///
/// Averages are rounded to two decimal places for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub per_process: Vec<ProcessMetrics>,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
}

/// Output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub policy: Policy,
    pub timeline: Timeline,
    pub metrics: Metrics,
}
