//! Benchmarks for polygon intersection and polyline decoding.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use geo::Polygon;
use isochrone_core::polyline::decode;
use isochrone_core::{Geometry, OverlapResolver, Point, PolygonKernel, Ring};

/// Regular polygon approximating a circle of `radius` degrees.
fn circle(lat: f64, lng: f64, radius: f64, vertices: usize) -> Polygon<f64> {
    let exterior: Vec<(f64, f64)> = (0..vertices)
        .map(|step| {
            let angle = std::f64::consts::TAU * step as f64 / vertices as f64;
            (lng + radius * angle.cos(), lat + radius * angle.sin())
        })
        .collect();
    Polygon::new(exterior.into(), Vec::new())
}

fn circle_ring(lat: f64, lng: f64, radius: f64, vertices: usize) -> Ring {
    let points = circle(lat, lng, radius, vertices)
        .exterior()
        .coords()
        .map(|coord| Point::new(coord.y, coord.x))
        .collect();
    Ring::new(points).expect("circle has enough vertices")
}

fn bench_intersect(c: &mut Criterion) {
    let kernel = PolygonKernel::default();
    let mut group = c.benchmark_group("intersect");

    for vertices in [16, 64, 256, 1024] {
        let a = Geometry::Polygon(circle(40.0, -75.0, 0.2, vertices));
        let b = Geometry::Polygon(circle(40.1, -74.9, 0.2, vertices));
        group.throughput(Throughput::Elements(vertices as u64));
        group.bench_with_input(BenchmarkId::new("circles", vertices), &(a, b), |bench, (a, b)| {
            bench.iter(|| kernel.intersect(black_box(a), black_box(b)));
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = OverlapResolver::default();
    let mut group = c.benchmark_group("resolve");

    for locations in [2, 4, 8] {
        let rings: Vec<Ring> = (0..locations)
            .map(|index| {
                let offset = 0.02 * index as f64;
                circle_ring(40.0 + offset, -75.0 - offset, 0.2, 128)
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("circles", locations), &rings, |bench, rings| {
            bench.iter(|| resolver.resolve(black_box(rings), None));
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for points in [100, 1_000, 10_000] {
        // Each repetition moves one degree north-east at precision 5.
        let encoded = format!("BF{}", "gqjGgqjG".repeat(points));
        group.throughput(Throughput::Elements(points as u64));
        group.bench_with_input(BenchmarkId::new("diagonal", points), &encoded, |bench, encoded| {
            bench.iter(|| decode(black_box(encoded)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_intersect, bench_resolve, bench_decode);
criterion_main!(benches);
