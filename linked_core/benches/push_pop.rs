// benches/push_pop.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linked_core::{Deep, Queue, Shallow, Stack};
use std::collections::VecDeque;

#[derive(Clone, Copy)]
struct Point3D {
    x: f64,
    y: f64,
    z: f64,
}

fn point(i: usize) -> Point3D {
    Point3D {
        x: i as f64,
        y: (i * 2) as f64,
        z: (i * 3) as f64,
    }
}

fn bench_queue_fill_drain(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("queue_fill_drain");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut q: Queue<Point3D, Shallow> = Queue::new();
                for i in 0..size {
                    q.push(point(i));
                }
                let mut sum = 0.0;
                while let Some(p) = q.pop() {
                    sum += black_box(p.x + p.y + p.z);
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_stack_fill_drain(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("stack_fill_drain");
    for size in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let mut s: Stack<Point3D, Shallow> = Stack::new();
                for i in 0..size {
                    s.push(point(i));
                }
                let mut sum = 0.0;
                while let Some(p) = s.pop() {
                    sum += black_box(p.x);
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_copy_in(c: &mut Criterion) {
    let size = 1_000;
    let names: Vec<String> = (0..size).map(|i| format!("item-{i}")).collect();
    let mut group = c.benchmark_group("copy_in");

    group.bench_function("deep_push_copy", |b| {
        b.iter(|| {
            let mut q: Queue<String, Deep> = Queue::new();
            for n in &names {
                q.push_copy(n);
            }
            black_box(q.len())
        });
    });

    group.bench_function("typed_push_copy", |b| {
        b.iter(|| {
            let mut q: Queue<String> = Queue::new();
            for n in &names {
                q.push_copy(n);
            }
            black_box(q.len())
        });
    });

    group.finish();
}

fn bench_vs_vecdeque(c: &mut Criterion) {
    let size = 10_000;
    let mut group = c.benchmark_group("vs_vecdeque");

    group.bench_function("linked_queue", |b| {
        b.iter(|| {
            let mut q: Queue<usize, Shallow> = Queue::new();
            for i in 0..size {
                q.push(i);
            }
            while q.pop_discard() {}
        });
    });

    group.bench_function("std_vecdeque", |b| {
        b.iter(|| {
            let mut q = VecDeque::new();
            for i in 0..size {
                q.push_back(i);
            }
            while q.pop_front().is_some() {}
        });
    });

    group.finish();
}

criterion_group!(
    engine_benches,
    bench_queue_fill_drain,
    bench_stack_fill_drain,
    bench_copy_in
);

criterion_group!(baseline_benches, bench_vs_vecdeque);

criterion_main!(engine_benches, baseline_benches);
