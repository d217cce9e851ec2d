/*!
 * Validation Tests
 * Fail-fast error reporting before any simulation state is built
 */

use pretty_assertions::assert_eq;
use sched_sim::{simulate, Policy, PolicyParams, Process, SchedulingError};

#[test]
fn test_empty_process_set() {
    let result = simulate(&[], Policy::Fcfs, &PolicyParams::none());
    assert_eq!(result.unwrap_err(), SchedulingError::EmptyProcessSet);
}

#[test]
fn test_zero_burst_rejected() {
    let processes = [Process::new(1, 0, 0)];
    let result = simulate(&processes, Policy::Fcfs, &PolicyParams::none());
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::InvalidBurstTime { pid: 1, burst: 0 }
    );
}

#[test]
fn test_negative_burst_rejected() {
    let processes = [Process::new(1, 0, -3)];
    let result = simulate(&processes, Policy::RoundRobin, &PolicyParams::with_quantum(2));
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::InvalidBurstTime { pid: 1, burst: -3 }
    );
}

#[test]
fn test_negative_arrival_rejected() {
    let processes = [Process::new(1, -1, 5)];
    let result = simulate(&processes, Policy::Fcfs, &PolicyParams::none());
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::InvalidArrivalTime { pid: 1, arrival: -1 }
    );
}

#[test]
fn test_duplicate_pid_rejected() {
    let processes = [Process::new(1, 0, 2), Process::new(1, 1, 3)];
    let result = simulate(&processes, Policy::Fcfs, &PolicyParams::none());
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::DuplicateProcessId { pid: 1 }
    );
}

#[test]
fn test_priority_policy_requires_bounds() {
    let processes = [Process::new(1, 0, 2).with_priority(3)];
    for policy in [Policy::PriorityNonPreemptive, Policy::PriorityPreemptive] {
        let result = simulate(&processes, policy, &PolicyParams::none());
        assert_eq!(
            result.unwrap_err(),
            SchedulingError::MissingPriorityBounds { policy }
        );
    }
}

#[test]
fn test_priority_out_of_declared_range() {
    let processes = [Process::new(1, 0, 2).with_priority(7)];
    let params = PolicyParams::with_priority_bounds(1, 5);
    let result = simulate(&processes, Policy::PriorityNonPreemptive, &params);
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::PriorityOutOfRange {
            pid: 1,
            priority: 7,
            highest: 1,
            lowest: 5,
        }
    );
}

#[test]
fn test_inverted_bounds_accept_their_range() {
    // 10 is declared most urgent; 4 sits inside [2, 10] regardless of order
    let processes = [Process::new(1, 0, 2).with_priority(4)];
    let params = PolicyParams::with_priority_bounds(10, 2);
    assert!(simulate(&processes, Policy::PriorityNonPreemptive, &params).is_ok());
}

#[test]
fn test_round_robin_requires_quantum() {
    let processes = [Process::new(1, 0, 2)];
    let result = simulate(&processes, Policy::RoundRobin, &PolicyParams::none());
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::InvalidQuantum { quantum: None }
    );

    let result = simulate(&processes, Policy::RoundRobin, &PolicyParams::with_quantum(0));
    assert_eq!(
        result.unwrap_err(),
        SchedulingError::InvalidQuantum { quantum: Some(0) }
    );
}

#[test]
fn test_non_priority_policies_ignore_priorities() {
    // Priorities outside any sensible range are fine when the policy does
    // not use them and no bounds are declared.
    let processes = [
        Process::new(1, 0, 2).with_priority(-50),
        Process::new(2, 0, 2).with_priority(999),
    ];
    for policy in [Policy::Fcfs, Policy::SjfNonPreemptive, Policy::SjfPreemptive] {
        assert!(simulate(&processes, policy, &PolicyParams::none()).is_ok());
    }
}

#[test]
fn test_error_messages_name_the_offender() {
    let processes = [Process::new(4, 0, 0)];
    let err = simulate(&processes, Policy::Fcfs, &PolicyParams::none()).unwrap_err();
    assert_eq!(err.to_string(), "process 4: burst time 0 must be greater than zero");
}
