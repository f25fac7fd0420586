use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lustep_core::{decompose, example_matrix, format_value};

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for n in 2..=5 {
        let a = example_matrix(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &a, |b, a| {
            b.iter(|| decompose(black_box(a)))
        });
    }
    group.finish();
}

fn bench_format(c: &mut Criterion) {
    c.bench_function("format_value", |b| {
        b.iter(|| {
            for v in [0.5, 1.0 / 3.0, -1.5, 0.123456, 42.0] {
                black_box(format_value(black_box(v)));
            }
        })
    });
}

criterion_group!(benches, bench_decompose, bench_format);
criterion_main!(benches);
