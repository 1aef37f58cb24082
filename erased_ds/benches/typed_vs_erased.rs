// benches/typed_vs_erased.rs

use bytemuck_derive::{Pod, Zeroable};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use erased_ds::{ErasedHelper, ErasedQueue, ErasedStack};
use linked_core::{Queue, Shallow, Stack};

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
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

fn bench_queue(c: &mut Criterion) {
    let sizes = vec![100, 1_000, 10_000];
    let helper = ErasedHelper::of::<Point3D>();

    let mut group = c.benchmark_group("queue_typed_vs_erased");
    for size in sizes {
        group.bench_with_input(BenchmarkId::new("typed", size), &size, |b, &size| {
            b.iter(|| {
                let mut q: Queue<Point3D, Shallow> = Queue::new();
                for i in 0..size {
                    q.push_copy(&point(i));
                }
                let mut sum = 0.0;
                while let Some(p) = q.pop() {
                    sum += black_box(p.x);
                }
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("erased", size), &size, |b, &size| {
            b.iter(|| {
                let mut q = ErasedQueue::new(Some(&helper)).unwrap();
                for i in 0..size {
                    q.push_pod(&point(i)).unwrap();
                }
                let mut sum = 0.0;
                while let Ok(Some(p)) = q.pop_pod::<Point3D>() {
                    sum += black_box(p.x);
                }
                sum
            });
        });
    }
    group.finish();
}

fn bench_stack(c: &mut Criterion) {
    let size = 10_000;
    let helper = ErasedHelper::new(24);
    let raw: Vec<[u8; 24]> = (0..size)
        .map(|i| bytemuck::cast(point(i)))
        .collect();

    let mut group = c.benchmark_group("stack_typed_vs_erased");

    group.bench_function("typed", |b| {
        b.iter(|| {
            let mut s: Stack<[u8; 24], Shallow> = Stack::new();
            for r in &raw {
                s.push_copy(r);
            }
            while s.pop_discard() {}
        });
    });

    group.bench_function("erased", |b| {
        b.iter(|| {
            let mut s = ErasedStack::new(Some(&helper)).unwrap();
            for r in &raw {
                s.push(r).unwrap();
            }
            while s.pop_discard() {}
        });
    });

    group.finish();
}

criterion_group!(benches, bench_queue, bench_stack);
criterion_main!(benches);
