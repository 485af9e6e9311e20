//! Benchmarks for the allocation decision path.
//!
//! Benchmarks cover:
//! - Capacity planner recompute at several tenant counts
//! - Full allocation rounds (recompute + round-robin selection)
//! - The worst case: a full circular scan over a saturated snapshot

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use tenant_fairshare::core::{
    recompute, AllocationSnapshot, Allocator, TenantId, TenantQueue,
};

fn tenants(n: usize) -> Vec<TenantId> {
    (0..n).map(|i| TenantId::from(format!("tenant-{i}"))).collect()
}

fn saturated_snapshot(active: &[TenantId], max_size: u32) -> AllocationSnapshot {
    AllocationSnapshot::new(
        active
            .iter()
            .map(|t| TenantQueue::new(t.clone(), max_size, max_size))
            .collect(),
    )
}

fn bench_planner_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner_recompute");
    for n in [10usize, 100, 1000] {
        let active = tenants(n);
        let previous = recompute(&active, &AllocationSnapshot::default(), 1000);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| recompute(black_box(&active), black_box(&previous), black_box(1000)));
        });
    }
    group.finish();
}

fn bench_allocate_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_round");
    for n in [10usize, 100, 1000] {
        let allocator = Allocator::new();
        let active = tenants(n);
        let previous = recompute(&active, &AllocationSnapshot::default(), 1000);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| allocator.allocate(black_box(&active), black_box(&previous), black_box(1000)));
        });
    }
    group.finish();
}

fn bench_allocate_saturated_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocate_saturated_scan");
    for n in [10usize, 100, 1000] {
        let allocator = Allocator::new();
        let active = tenants(n);
        let previous = saturated_snapshot(&active, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| allocator.allocate(black_box(&active), black_box(&previous), black_box(n as u32)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_planner_recompute,
    bench_allocate_round,
    bench_allocate_saturated_scan
);
criterion_main!(benches);
