use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graha_vedic::{
    Lord, build_level_nodes, build_period_tree, dasha_balance, placidus_from_lst, sub_lords,
    tithi_from_elongation,
};
use graha_vedic::dasha::DashaLevel;

fn lattice_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lattice");
    group.bench_function("sub_lords", |b| {
        b.iter(|| sub_lords(black_box(211.7532)))
    });
    group.bench_function("dasha_balance", |b| {
        b.iter(|| dasha_balance(black_box(95.1834)))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth_jd = 2_447_906.770_833;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("tree_depth_3", |b| {
        b.iter(|| build_period_tree(black_box(birth_jd), Lord::Saturn, None, 3))
    });
    group.bench_function("single_level", |b| {
        b.iter(|| {
            build_level_nodes(
                DashaLevel::Bhukti,
                black_box(birth_jd),
                black_box(birth_jd + 6_939.6),
                Lord::Saturn,
            )
        })
    });
    group.finish();
}

fn houses_bench(c: &mut Criterion) {
    let theta = 4.9312;
    let eps = 0.409_09;
    let phi = 0.303_44; // ~17.4 deg

    c.bench_function("placidus_from_lst", |b| {
        b.iter(|| placidus_from_lst(black_box(theta), black_box(eps), black_box(phi)))
    });
}

fn panchanga_bench(c: &mut Criterion) {
    c.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(143.02)))
    });
}

criterion_group!(
    benches,
    lattice_bench,
    dasha_bench,
    houses_bench,
    panchanga_bench
);
criterion_main!(benches);
