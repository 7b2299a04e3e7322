use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lumaramp::scheme::Preset;
use lumaramp::table::{render_table, Axis, AxisValues};
use lumaramp::{Hue, LumaAlgorithm, Solver};

pub fn run_benchmarks(c: &mut Criterion) {
    let solver = Solver::new(LumaAlgorithm::Quadratic);

    let mut group = c.benchmark_group("solve");
    group.bench_function("gray-sweep", |b| {
        b.iter(|| solver.solve(Hue::Achromatic, 0.0, &[0.0, 40.0, 70.0, 100.0]))
    });
    group.bench_function("red", |b| {
        b.iter(|| solver.solve(Hue::Degrees(0.0), 80.0, &[50.0]))
    });
    group.bench_function("unknown-hue", |b| {
        b.iter(|| solver.solve(Hue::Degrees(15.0), 50.0, &[50.0]))
    });
    group.finish();

    let mut group = c.benchmark_group("scheme");
    group.sample_size(20);
    group.bench_function("zdark", |b| {
        b.iter_batched(
            Preset::zdark,
            |preset| preset.build(&solver),
            BatchSize::SmallInput,
        )
    });
    group.finish();

    let values = AxisValues {
        hues: Hue::supported().collect(),
        saturations: vec![100.0],
        lumas: (1..10).map(|l| (10 * l) as lumaramp::Float).collect(),
    };

    let mut group = c.benchmark_group("table");
    group.sample_size(10);
    group.bench_function("luma-chart", |b| {
        b.iter(|| render_table(&solver, [Axis::Hue, Axis::Luma, Axis::Saturation], &values, None))
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
