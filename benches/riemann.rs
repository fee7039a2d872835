use buffon::misc::{riemann_with, Sampling};
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};

fn arctan_deriv(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

fn bench_riemann(c: &mut Criterion) {
    let mut group = c.benchmark_group("riemann");
    for n in [1_000_usize, 200_000] {
        for sampling in [Sampling::Left, Sampling::Right, Sampling::Midpoint] {
            group.bench_with_input(
                BenchmarkId::new(sampling.to_string(), n),
                &n,
                |b, &n| {
                    b.iter(|| {
                        let n = black_box(n);
                        riemann_with(arctan_deriv, 0.0, 1.0, n, sampling)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(riemann_benches, bench_riemann);
criterion_main!(riemann_benches);
