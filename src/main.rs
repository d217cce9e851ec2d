/*!
 * Sched-Sim - Main Entry Point
 *
 * Command-line scenario runner:
 * - loads process rows and policy parameters from a JSON scenario file
 * - runs one policy, or every policy the scenario parameterizes
 * - prints the execution timeline and the per-process metrics table
 */

use log::info;
use sched_sim::{simulate, IntervalKind, Policy, PolicyParams, Process, SimulationReport};
use serde::Deserialize;
use std::error::Error;
use std::fs;

#[derive(Debug, Deserialize)]
struct Scenario {
    processes: Vec<Process>,
    #[serde(default)]
    policy: Option<Policy>,
    #[serde(default)]
    params: PolicyParams,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: schedsim <scenario.json> [policy]");
        std::process::exit(2);
    };

    let scenario: Scenario = serde_json::from_str(&fs::read_to_string(&path)?)?;
    info!(
        "loaded scenario from {}: {} processes",
        path,
        scenario.processes.len()
    );

    let policies: Vec<Policy> = match args.next() {
        Some(name) => vec![Policy::from_str(&name)?],
        None => match scenario.policy {
            Some(policy) => vec![policy],
            // No policy selected: compare every policy the scenario has
            // parameters for.
            None => Policy::all()
                .into_iter()
                .filter(|p| !p.needs_priority_bounds() || scenario.params.priority_bounds.is_some())
                .filter(|p| !p.needs_quantum() || scenario.params.quantum.is_some())
                .collect(),
        },
    };

    for policy in policies {
        let report = simulate(&scenario.processes, policy, &scenario.params)?;
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &SimulationReport) {
    println!("=== {} ===", report.policy);

    println!("timeline:");
    for interval in &report.timeline {
        match interval.kind {
            IntervalKind::Process(pid) => {
                println!("  [{:>4} - {:>4}] P{}", interval.start, interval.end, pid)
            }
            IntervalKind::Idle => {
                println!("  [{:>4} - {:>4}] idle", interval.start, interval.end)
            }
        }
    }

    println!(
        "{:>5} {:>8} {:>6} {:>11} {:>11} {:>8} {:>9}",
        "pid", "arrival", "burst", "completion", "turnaround", "waiting", "response"
    );
    for m in &report.metrics.per_process {
        println!(
            "{:>5} {:>8} {:>6} {:>11} {:>11} {:>8} {:>9}",
            format!("P{}", m.pid),
            m.arrival_time,
            m.burst_time,
            m.completion_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        );
    }
    println!(
        "averages: turnaround {:.2}, waiting {:.2}, response {:.2}",
        report.metrics.avg_turnaround, report.metrics.avg_waiting, report.metrics.avg_response
    );

    let span = report
        .timeline
        .end()
        .unwrap_or(0)
        .saturating_sub(report.timeline.start().unwrap_or(0));
    if span > 0 {
        println!(
            "cpu utilization: {:.2}% over [{} - {}]",
            report.timeline.busy_time() as f64 / span as f64 * 100.0,
            report.timeline.start().unwrap_or(0),
            report.timeline.end().unwrap_or(0)
        );
    }
    println!();
}
