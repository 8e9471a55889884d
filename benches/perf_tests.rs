use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sxs_toolbox::{
    compile, define_tokens, merge, render, DynamicStamper, Observation, OutputSink, StamperConfig,
    TimeStamper,
};

define_tokens! {
    enum Stage { Read, Parse, Write }
}

fn quiet() -> StamperConfig {
    StamperConfig {
        auto_print: false,
        output: OutputSink::buffer(),
        ..Default::default()
    }
}

fn synthetic_observations(n: usize) -> Vec<Observation<String>> {
    let labels = ["read", "parse", "solve", "write"];
    (0..n)
        .map(|i| {
            Observation::new(
                labels[i % labels.len()].to_string(),
                labels[(i + 1) % labels.len()].to_string(),
                1e-6 * (1 + i % 13) as f64,
            )
        })
        .collect()
}

fn bench_stamping(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stamping");

    group.bench_function("dynamic_labels", |b| {
        let mut stamper = DynamicStamper::with_config("bench", quiet());
        b.iter(|| {
            stamper.stamp(black_box("a"));
            stamper.stamp(black_box("b"));
        });
    });

    group.bench_function("token_labels", |b| {
        let mut stamper = TimeStamper::<Stage>::with_config("bench", quiet());
        b.iter(|| {
            stamper.stamp(black_box(Stage::Read));
            stamper.stamp(black_box(Stage::Parse));
            stamper.stamp(black_box(Stage::Write));
        });
    });

    group.finish();
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compile");
    for size in [100usize, 10_000, 100_000] {
        let observations = synthetic_observations(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &observations, |b, obs| {
            b.iter(|| compile(black_box(obs)));
        });
    }
    group.finish();
}

fn bench_merge_and_render(c: &mut Criterion) {
    let trials: Vec<_> = (0..32).map(|_| compile(&synthetic_observations(1_000))).collect();

    c.bench_function("merge_32_trials", |b| b.iter(|| merge(black_box(&trials))));

    let merged = merge(&trials);
    c.bench_function("render_table", |b| b.iter(|| render(black_box(&merged))));
}

criterion_group!(benches, bench_stamping, bench_compile, bench_merge_and_render);
criterion_main!(benches);
