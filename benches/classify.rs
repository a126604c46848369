use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use json_literal::JsonBoolean;

fn classify(input: &str) -> Option<bool> {
    JsonBoolean::new(input).as_bool()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classify");
    for (input, name) in [
        ("true", "true"),
        ("false", "false"),
        ("", "empty"),
        ("not a boolean at all", "invalid"),
    ]
    .iter()
    {
        group.bench_with_input(BenchmarkId::new("JsonBoolean", name), input, |b, input| {
            b.iter(|| classify(black_box(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
