/*!
 * Metrics Derivation
 * Per-process timings and run-level averages
 */

use super::engine::Task;
use super::types::{Metrics, ProcessMetrics};

/// Round to two decimal places for display
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive per-process timings and run averages from completed runtime state.
/// The engine stamps completion and first-dispatch times for every task
/// before this runs.
pub(super) fn derive(tasks: &[Task]) -> Metrics {
    let mut per_process: Vec<ProcessMetrics> = tasks
        .iter()
        .map(|task| {
            debug_assert!(task.completion.is_some() && task.started_at.is_some());
            let completion = task.completion.unwrap_or(task.arrival + task.burst);
            let started_at = task.started_at.unwrap_or(task.arrival);
            let turnaround = completion - task.arrival;
            ProcessMetrics {
                pid: task.pid,
                arrival_time: task.arrival,
                burst_time: task.burst,
                completion_time: completion,
                turnaround_time: turnaround,
                waiting_time: turnaround - task.burst,
                response_time: started_at - task.arrival,
            }
        })
        .collect();
    per_process.sort_by_key(|m| m.pid);

    let count = per_process.len() as f64;
    let avg_turnaround = round2(
        per_process
            .iter()
            .map(|m| m.turnaround_time)
            .sum::<u64>() as f64
            / count,
    );
    let avg_waiting =
        round2(per_process.iter().map(|m| m.waiting_time).sum::<u64>() as f64 / count);
    let avg_response =
        round2(per_process.iter().map(|m| m.response_time).sum::<u64>() as f64 / count);

    Metrics {
        per_process,
        avg_turnaround,
        avg_waiting,
        avg_response,
    }
}
