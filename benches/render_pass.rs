use criterion::{Criterion, criterion_group, criterion_main};
use escapetime::{FractalVariant, compute_row, render_pass};

fn bench_render_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    group.sample_size(10);

    for &variant in FractalVariant::ALL {
        let viewport = variant.initial_range();

        group.bench_function(format!("{}_64", variant.display_name()), |b| {
            b.iter(|| render_pass(variant, viewport, 64).unwrap());
        });
    }

    let variant = FractalVariant::Mandelbrot;
    let viewport = variant.initial_range();
    group.bench_function("mandelbrot_256", |b| {
        b.iter(|| render_pass(variant, viewport, 256).unwrap());
    });

    group.finish();
}

fn bench_single_row(c: &mut Criterion) {
    let variant = FractalVariant::Mandelbrot;
    let viewport = variant.initial_range();

    // The middle row crosses the set interior, so it is the worst case.
    c.bench_function("compute_row_mandelbrot_600_mid", |b| {
        b.iter(|| compute_row(variant, viewport, 600, 300));
    });
}

criterion_group!(benches, bench_render_pass, bench_single_row);
criterion_main!(benches);
