use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_rs::{KundliConfig, generate_chart_with, match_charts};

fn facade_bench(c: &mut Criterion) {
    let cfg = KundliConfig::default();

    c.bench_function("generate_chart_with", |b| {
        b.iter(|| {
            generate_chart_with(
                &cfg,
                black_box("1990-01-01"),
                black_box("12:00:00"),
                28.6139,
                77.2090,
            )
        })
    });

    let a = generate_chart_with(&cfg, "1990-01-01", "12:00:00", 28.6139, 77.2090).unwrap();
    let bride = generate_chart_with(&cfg, "1992-08-17", "04:45:00", 19.0760, 72.8777).unwrap();
    c.bench_function("match_charts", |b| {
        b.iter(|| match_charts(black_box(&a), black_box(&bride)))
    });
}

criterion_group!(benches, facade_bench);
criterion_main!(benches);
