use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndpoint::{Point, Vector};
use rand::Rng;

const BATCH_SIZE: usize = 1_000;
const DIM: usize = 16;

fn random_axes(rng: &mut impl Rng) -> Vec<f64> {
    (0..DIM).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Benchmark translating a point by a vector.
fn bench_translate(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let p = Point::new(random_axes(&mut rng));
    let v = Vector::new(random_axes(&mut rng));

    c.bench_function("point + vector 16D × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = p.clone();
            for _ in 0..BATCH_SIZE {
                out = black_box(&p) + black_box(&v);
            }
            black_box(out)
        })
    });
}

/// Benchmark the checked displacement between two points.
fn bench_displacement(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let a = Point::new(random_axes(&mut rng));
    let b = Point::new(random_axes(&mut rng));

    c.bench_function("point displacement 16D × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = Vector::zeros(DIM);
            for _ in 0..BATCH_SIZE {
                if let Ok(d) = black_box(&a).displacement_to(black_box(&b)) {
                    out = d;
                }
            }
            black_box(out)
        })
    });
}

/// Benchmark padded addition across mismatched dimensions.
fn bench_add_padded(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let p = Point::new(random_axes(&mut rng));
    let v = Vector::new(random_axes(&mut rng).into_iter().take(DIM / 2));

    c.bench_function("point add_padded 16D/8D × 1000 batch", |bencher| {
        bencher.iter(|| {
            let mut out = Vec::new();
            for _ in 0..BATCH_SIZE {
                out = black_box(&p).add_padded(black_box(&v));
            }
            black_box(out)
        })
    });
}

criterion_group!(
    benches,
    bench_translate,
    bench_displacement,
    bench_add_padded
);
criterion_main!(benches);
