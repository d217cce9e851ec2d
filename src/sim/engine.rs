/*!
 * Simulation Engine
 * Discrete-time dispatch loop shared by all scheduling policies
 */

use super::metrics;
use super::timeline::Timeline;
use super::types::{Interval, Policy, PolicyParams, Process, SimResult, SimulationReport};
use super::validation;
use crate::core::types::{Pid, SimTime};
use log::{debug, trace};
use std::collections::VecDeque;

/// Engine-owned runtime state of one process, discarded after the run.
/// Caller-owned `Process` values are never mutated.
#[derive(Debug, Clone)]
pub(super) struct Task {
    pub(super) pid: Pid,
    pub(super) arrival: SimTime,
    pub(super) burst: SimTime,
    /// Urgency rank under the run's declared priority bounds; 0 when the
    /// policy ignores priority
    pub(super) rank: i64,
    pub(super) remaining: SimTime,
    pub(super) started_at: Option<SimTime>,
    pub(super) completion: Option<SimTime>,
}

impl Task {
    fn new(process: &Process, rank: i64) -> Self {
        // Validation guarantees arrival >= 0 and burst > 0
        let arrival = process.arrival_time as SimTime;
        let burst = process.burst_time as SimTime;
        Self {
            pid: process.pid,
            arrival,
            burst,
            rank,
            remaining: burst,
            started_at: None,
            completion: None,
        }
    }
}

/// Run one simulation to completion.
///
/// Pure and deterministic: identical inputs always produce an identical
/// timeline and metrics. Concurrent runs share no state.
pub fn simulate(
    processes: &[Process],
    policy: Policy,
    params: &PolicyParams,
) -> SimResult<SimulationReport> {
    validation::validate(processes, policy, params)?;

    let mut sim = Simulation::new(processes, policy, params);
    debug!("simulating {} processes under {}", processes.len(), policy);

    match policy {
        Policy::Fcfs | Policy::SjfNonPreemptive | Policy::PriorityNonPreemptive => {
            sim.run_non_preemptive()
        }
        Policy::SjfPreemptive | Policy::PriorityPreemptive => sim.run_preemptive(),
        Policy::RoundRobin => sim.run_round_robin(),
    }

    let metrics = metrics::derive(&sim.tasks);
    debug!(
        "{}: {} intervals, {} idle time units",
        policy,
        sim.timeline.len(),
        sim.timeline.idle_time()
    );

    Ok(SimulationReport {
        policy,
        timeline: sim.timeline,
        metrics,
    })
}

struct Simulation {
    policy: Policy,
    /// Sorted by (arrival, pid); the order never changes during a run
    tasks: Vec<Task>,
    timeline: Timeline,
    clock: SimTime,
    quantum: SimTime,
}

impl Simulation {
    fn new(processes: &[Process], policy: Policy, params: &PolicyParams) -> Self {
        let bounds = params.priority_bounds;
        let mut tasks: Vec<Task> = processes
            .iter()
            .map(|p| Task::new(p, bounds.map_or(0, |b| b.rank(p.priority))))
            .collect();
        tasks.sort_by_key(|t| (t.arrival, t.pid));

        // The timeline starts at the earliest arrival, not at zero
        let clock = tasks.first().map_or(0, |t| t.arrival);
        // Read only by round robin; validation guarantees it is positive there
        let quantum = params.quantum.unwrap_or(0).max(0) as SimTime;

        Self {
            policy,
            tasks,
            timeline: Timeline::new(),
            clock,
            quantum,
        }
    }

    /// Earliest arrival strictly after `after`. Tasks past the clock have
    /// never run, so they are all unfinished.
    fn next_arrival_after(&self, after: SimTime) -> Option<SimTime> {
        self.tasks
            .iter()
            .find(|t| t.arrival > after)
            .map(|t| t.arrival)
    }

    /// Index of the ready task with the smallest dispatch key
    fn best_ready(&self) -> Option<usize> {
        let mut best: Option<((i64, u64, Pid), usize)> = None;
        for (i, task) in self.tasks.iter().enumerate() {
            if task.remaining == 0 || task.arrival > self.clock {
                continue;
            }
            let key = self.policy.dispatch_key(task);
            if best.map_or(true, |(k, _)| key < k) {
                best = Some((key, i));
            }
        }
        best.map(|(_, i)| i)
    }

    fn idle_until(&mut self, until: SimTime) {
        trace!("cpu idle from {} to {}", self.clock, until);
        self.timeline.push(Interval::idle(self.clock, until));
        self.clock = until;
    }

    /// FCFS, SJF and priority non-preemptive: once dispatched, a process
    /// runs to completion in a single interval.
    fn run_non_preemptive(&mut self) {
        loop {
            let Some(i) = self.best_ready() else {
                match self.next_arrival_after(self.clock) {
                    Some(at) => {
                        self.idle_until(at);
                        continue;
                    }
                    None => break,
                }
            };

            let start = self.clock;
            let task = &mut self.tasks[i];
            let end = start + task.remaining;
            task.started_at = Some(start);
            task.remaining = 0;
            task.completion = Some(end);
            let pid = task.pid;
            trace!("dispatch P{} [{}, {}] to completion", pid, start, end);

            self.clock = end;
            self.timeline.push(Interval::busy(pid, start, end));
        }
    }

    /// SRTF and preemptive priority: the running process is re-examined at
    /// every arrival event and loses the CPU only to a strictly better
    /// newcomer; equal keys never cause a switch.
    fn run_preemptive(&mut self) {
        loop {
            let Some(i) = self.best_ready() else {
                match self.next_arrival_after(self.clock) {
                    Some(at) => {
                        self.idle_until(at);
                        continue;
                    }
                    None => break,
                }
            };

            let slice_start = self.clock;
            if self.tasks[i].started_at.is_none() {
                self.tasks[i].started_at = Some(slice_start);
            }

            // Run task i until it completes or a newcomer preempts it. An
            // arrival that does not preempt leaves the interval open.
            loop {
                let completion_at = self.clock + self.tasks[i].remaining;
                let event = self
                    .next_arrival_after(self.clock)
                    .filter(|&at| at < completion_at);

                let Some(at) = event else {
                    let task = &mut self.tasks[i];
                    task.remaining = 0;
                    task.completion = Some(completion_at);
                    let pid = task.pid;
                    self.clock = completion_at;
                    self.timeline.push(Interval::busy(pid, slice_start, completion_at));
                    trace!("P{} completed at {}", pid, completion_at);
                    break;
                };

                self.tasks[i].remaining -= at - self.clock;
                self.clock = at;

                let running = self.tasks[i].clone();
                let preempted = self
                    .tasks
                    .iter()
                    .any(|t| t.arrival == at && self.policy.preempts(t, &running));
                if preempted {
                    self.timeline
                        .push(Interval::busy(running.pid, slice_start, at));
                    trace!("P{} preempted at {}", running.pid, at);
                    break;
                }
            }
        }
    }

    /// Round robin: explicit FIFO ready queue in arrival order. Arrivals
    /// during a slice (including at the expiry instant) enqueue ahead of the
    /// requeued process. Quantum expiry always closes the interval, so no
    /// interval exceeds the quantum unless completion ends it early.
    fn run_round_robin(&mut self) {
        let mut queue: VecDeque<usize> = VecDeque::new();
        let mut cursor = 0usize;
        self.enqueue_arrivals(&mut queue, &mut cursor);

        loop {
            let Some(i) = queue.pop_front() else {
                if cursor >= self.tasks.len() {
                    break;
                }
                let at = self.tasks[cursor].arrival;
                self.idle_until(at);
                self.enqueue_arrivals(&mut queue, &mut cursor);
                continue;
            };

            let start = self.clock;
            if self.tasks[i].started_at.is_none() {
                self.tasks[i].started_at = Some(start);
            }
            let slice = self.quantum.min(self.tasks[i].remaining);
            let end = start + slice;
            self.tasks[i].remaining -= slice;
            self.clock = end;
            let pid = self.tasks[i].pid;
            self.timeline.push(Interval::busy(pid, start, end));

            self.enqueue_arrivals(&mut queue, &mut cursor);
            if self.tasks[i].remaining == 0 {
                self.tasks[i].completion = Some(end);
                trace!("P{} completed at {}", pid, end);
            } else {
                queue.push_back(i);
                trace!("P{} quantum expired at {}, requeued", pid, end);
            }
        }
    }

    /// Move every task that has arrived by the current clock into the ready
    /// queue, preserving (arrival, pid) order.
    fn enqueue_arrivals(&self, queue: &mut VecDeque<usize>, cursor: &mut usize) {
        while *cursor < self.tasks.len() && self.tasks[*cursor].arrival <= self.clock {
            queue.push_back(*cursor);
            *cursor += 1;
        }
    }
}
