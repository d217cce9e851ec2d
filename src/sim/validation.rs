/*!
 * Run Validation
 * Fail-fast checks performed before the simulation loop starts
 */

use super::types::{Policy, PolicyParams, Process, SchedulingError, SimResult};
use std::collections::HashSet;

/// Validate a run request. Any error here is reported before the engine
/// touches its own state, so a failed run emits nothing.
pub(super) fn validate(
    processes: &[Process],
    policy: Policy,
    params: &PolicyParams,
) -> SimResult<()> {
    if processes.is_empty() {
        return Err(SchedulingError::EmptyProcessSet);
    }

    let mut seen = HashSet::with_capacity(processes.len());
    for process in processes {
        if !seen.insert(process.pid) {
            return Err(SchedulingError::DuplicateProcessId { pid: process.pid });
        }
        if process.burst_time <= 0 {
            return Err(SchedulingError::InvalidBurstTime {
                pid: process.pid,
                burst: process.burst_time,
            });
        }
        if process.arrival_time < 0 {
            return Err(SchedulingError::InvalidArrivalTime {
                pid: process.pid,
                arrival: process.arrival_time,
            });
        }
    }

    if policy.needs_priority_bounds() {
        let bounds = params
            .priority_bounds
            .ok_or(SchedulingError::MissingPriorityBounds { policy })?;
        for process in processes {
            if !bounds.contains(process.priority) {
                return Err(SchedulingError::PriorityOutOfRange {
                    pid: process.pid,
                    priority: process.priority,
                    highest: bounds.highest,
                    lowest: bounds.lowest,
                });
            }
        }
    }

    if policy.needs_quantum() {
        match params.quantum {
            Some(quantum) if quantum > 0 => {}
            quantum => return Err(SchedulingError::InvalidQuantum { quantum }),
        }
    }

    Ok(())
}
