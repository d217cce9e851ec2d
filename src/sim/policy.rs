/*!
 * Policy Dispatch Rules
 * Per-policy selection ordering and preemption decisions
 */

use super::engine::Task;
use super::types::Policy;
use crate::core::types::Pid;

/// Dispatch ordering key; the ready task with the smallest key runs next.
/// Arrival time and pid fully specify every tie, so selection is
/// deterministic for identical inputs.
pub(super) type DispatchKey = (i64, u64, Pid);

impl Policy {
    /// Ordering key of a ready task under this policy.
    ///
    /// Round robin dispatches from its explicit FIFO queue instead; its key
    /// degenerates to plain arrival order.
    pub(super) fn dispatch_key(self, task: &Task) -> DispatchKey {
        let primary = match self {
            Policy::Fcfs | Policy::RoundRobin => 0,
            Policy::SjfNonPreemptive | Policy::SjfPreemptive => task.remaining as i64,
            Policy::PriorityNonPreemptive | Policy::PriorityPreemptive => task.rank,
        };
        (primary, task.arrival, task.pid)
    }

    /// Whether a newly arrived task takes the CPU from the running one.
    /// Ties never preempt.
    pub(super) fn preempts(self, challenger: &Task, running: &Task) -> bool {
        match self {
            Policy::SjfPreemptive => challenger.remaining < running.remaining,
            Policy::PriorityPreemptive => challenger.rank < running.rank,
            Policy::Fcfs
            | Policy::SjfNonPreemptive
            | Policy::PriorityNonPreemptive
            | Policy::RoundRobin => false,
        }
    }
}
