use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use regpoly_editor::{compute_vertices, PolygonList, PolygonRecord, Viewport};
use std::hint::black_box;

fn bench_vertices(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_vertices");
    let viewport = Viewport::new(1280, 720);

    for &sides in &[8u32, 1_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("sides", sides), &sides, |b, &sides| {
            b.iter(|| {
                let vertices = compute_vertices(black_box(sides), 0.25, 200.0, viewport);
                black_box(vertices.len())
            })
        });
    }

    group.finish();
}

fn build_shuffled_list(count: u32) -> PolygonList {
    let mut list = PolygonList::new();
    for index in 0..count {
        // Multiplikative Streuung über den 6-stelligen ID-Raum
        let id = (index.wrapping_mul(7919) % 900_000) + 100_000;
        list.append(PolygonRecord::new(id, 3 + index % 10, 0.0, 10.0, None));
    }
    list
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_polygons");

    for &count in &[1_000u32, 50_000] {
        let list = build_shuffled_list(count);
        group.bench_with_input(BenchmarkId::new("count", count), &list, |b, list| {
            b.iter(|| {
                let mut list = list.clone();
                list.sort_in_place();
                black_box(list.len())
            })
        });
    }

    group.finish();
}

criterion_group!(core_benches, bench_vertices, bench_sort);
criterion_main!(core_benches);
