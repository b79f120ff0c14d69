//! Criterion benchmarks for the core heap operations
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only the decrease-key workloads
//! cargo bench --bench heap_ops -- decrease_key
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fibo_heap::{FibonacciHeap, HeapConfig, MinRefresh};

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 17];

/// Scrambled but deterministic keys
fn keys(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| ((i as u64).wrapping_mul(2654435761) % 1_000_003) as f64)
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &SIZES {
        let keys = keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let config = HeapConfig::default().with_capacity(keys.len());
                let mut heap = FibonacciHeap::with_config(config);
                for (i, &k) in keys.iter().enumerate() {
                    heap.insert(k, i).unwrap();
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

fn bench_insert_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_extract_all");
    group.sample_size(20);
    for &n in &SIZES {
        let keys = keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = FibonacciHeap::new();
                for (i, &k) in keys.iter().enumerate() {
                    heap.insert(k, i).unwrap();
                }
                while let Some(entry) = heap.pop() {
                    black_box(entry);
                }
            })
        });
    }
    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    group.sample_size(20);
    let policies = [
        ("rescan", MinRefresh::Rescan),
        ("incremental", MinRefresh::Incremental),
    ];
    for (label, refresh) in policies {
        for &n in &SIZES[..2] {
            let keys = keys(n);
            group.bench_with_input(BenchmarkId::new(label, n), &keys, |b, keys| {
                b.iter(|| {
                    let config = HeapConfig::default().with_min_refresh(refresh);
                    let mut heap = FibonacciHeap::with_config(config);
                    let handles: Vec<_> = keys
                        .iter()
                        .enumerate()
                        .map(|(i, &k)| heap.insert(k + 2_000_000.0, i).unwrap())
                        .collect();
                    // Consolidate once so the decreases hit real trees
                    heap.insert(f64::MIN, usize::MAX).unwrap();
                    heap.extract_min().unwrap();

                    for (h, &k) in handles.iter().zip(keys) {
                        heap.decrease_key(h, k).unwrap();
                    }
                    black_box(heap.peek_min().ok())
                })
            });
        }
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &n in &SIZES[..2] {
        let keys = keys(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut merged = FibonacciHeap::new();
                for chunk in keys.chunks(64) {
                    let mut heap = FibonacciHeap::new();
                    for (i, &k) in chunk.iter().enumerate() {
                        heap.insert(k, i).unwrap();
                    }
                    merged.merge(heap);
                }
                black_box(merged.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_insert_extract,
    bench_decrease_key,
    bench_merge
);
criterion_main!(benches);
