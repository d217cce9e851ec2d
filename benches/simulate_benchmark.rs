/*!
 * Simulation Benchmarks
 * Engine throughput across policies and workload sizes
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use sched_sim::{simulate, Policy, PolicyParams, PriorityBounds, Process};

fn workload(size: usize, seed: u64) -> Vec<Process> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|i| Process {
            pid: i as u32 + 1,
            arrival_time: rng.gen_range(0..size as i64 * 2),
            burst_time: rng.gen_range(1..20),
            priority: rng.gen_range(1..=9),
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let params = PolicyParams {
        priority_bounds: Some(PriorityBounds::new(1, 9)),
        quantum: Some(4),
    };

    let mut group = c.benchmark_group("simulate");
    for &size in &[10usize, 100, 1000] {
        let processes = workload(size, 42);
        group.throughput(Throughput::Elements(size as u64));
        for policy in Policy::all() {
            group.bench_with_input(
                BenchmarkId::new(policy.as_str(), size),
                &processes,
                |b, processes| b.iter(|| simulate(black_box(processes), policy, &params).unwrap()),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
