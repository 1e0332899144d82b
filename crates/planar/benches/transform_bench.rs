//! Criterion benchmarks for `Matrix3` composition and point transforms.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use planar::{Matrix3, Point2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat3");
    let mut rng = StdRng::seed_from_u64(44);
    let pts: Vec<Point2> = (0..1024)
        .map(|_| Point2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();

    group.bench_function("compose_trs", |b| {
        b.iter(|| {
            Matrix3::identity()
                .translate(black_box(1.5), black_box(-2.0))
                .rotate(black_box(0.3))
                .scale(black_box(2.0), black_box(0.5))
        })
    });

    group.bench_function("matrix_product", |b| {
        let m = Matrix3::rotation(0.7).translate(1.0, 2.0);
        let n = Matrix3::scaling(2.0, 3.0).rotate(-0.2);
        b.iter(|| black_box(m) * black_box(n))
    });

    group.bench_function("transform_points_1024", |b| {
        let m = Matrix3::translation(3.0, -1.0).rotate(0.4).scale(1.2, 0.8);
        b.iter_batched(
            || pts.clone(),
            |mut ps| {
                for p in &mut ps {
                    *p = m * *p;
                }
                ps
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("inverse", |b| {
        let m = Matrix3::translation(3.0, -1.0).rotate(0.4).scale(1.2, 0.8);
        b.iter(|| black_box(m).inverse())
    });
    group.finish();
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
