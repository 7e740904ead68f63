use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use chartxyz_core::{ClipPlanes, Point3f, Transform3D, VisibilityFilter, VisibleSet};
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};

const POINT_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

fn random_points(n: usize) -> (Vec<Point3f>, Vec<u8>) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let points = (0..n)
        .map(|_| Point3f::new(rng.gen_range(-0.2..1.2), rng.gen_range(-0.2..1.2), rng.gen_range(-0.2..1.2)))
        .collect();
    let colors = (0..n * 3).map(|_| rng.gen()).collect();
    (points, colors)
}

fn visibility(c: &mut Criterion) {
    let mut box_transform = Transform3D::identity();
    box_transform.post_translate(Vector3::repeat(-0.5));
    box_transform.post_concatenate(&Transform3D::rotation_y(30.0));
    box_transform.post_translate(Vector3::repeat(0.5));
    box_transform.post_scale(Vector3::repeat(400.0));
    let planes = ClipPlanes::from_box_transform(&box_transform);

    let mut g = c.benchmark_group("visibility filter");
    for n in POINT_COUNTS {
        let (points, colors) = random_points(n);
        let mut out = VisibleSet::new();
        g.bench_with_input(BenchmarkId::from_parameter(n), &(&points, &colors), |b, &(points, colors)| {
            b.iter(|| {
                VisibilityFilter::new(&box_transform, &planes).filter_into(
                    std::hint::black_box(points),
                    Some(colors),
                    &mut out,
                );
            });
        });
    }
    g.finish();
}

criterion_group!(benches, visibility);
criterion_main!(benches);
