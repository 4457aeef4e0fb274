use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graha_search::{BISECT_ITERS, bisect_crossing, unwrap_near};

fn bisect_bench(c: &mut Criterion) {
    // Synthetic moon-sun elongation: 12.19 deg/day from 20 deg at t0.
    let t0 = 2_451_545.0;
    let elongation = move |t: f64| Ok(20.0 + 12.19 * (t - t0));

    c.bench_function("bisect_crossing_44", |b| {
        b.iter(|| bisect_crossing(elongation, black_box(24.0), t0, t0 + 1.0, BISECT_ITERS))
    });
}

fn unwrap_bench(c: &mut Criterion) {
    c.bench_function("unwrap_near", |b| {
        b.iter(|| unwrap_near(black_box(3.5), black_box(358.2)))
    });
}

criterion_group!(benches, bisect_bench, unwrap_bench);
criterion_main!(benches);
