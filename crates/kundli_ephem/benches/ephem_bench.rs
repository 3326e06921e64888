use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundli_ephem::{AnalyticEphemeris, CelestialBody, EphemerisProvider};
use kundli_time::JulianMoment;

fn provider_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let moment = JulianMoment::from_jd_ut(2_447_893.0);

    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("moon", |b| {
        b.iter(|| eph.position_at(black_box(moment), CelestialBody::Moon))
    });
    group.bench_function("jupiter", |b| {
        b.iter(|| eph.position_at(black_box(moment), CelestialBody::Jupiter))
    });
    group.bench_function("all_ten", |b| b.iter(|| eph.positions_at(black_box(moment))));
    group.finish();
}

fn kepler_bench(c: &mut Criterion) {
    c.bench_function("kepler_pluto_eccentricity", |b| {
        b.iter(|| kundli_ephem::kepler::eccentric_anomaly_deg(black_box(123.4), black_box(0.2488)))
    });
}

criterion_group!(benches, provider_bench, kepler_bench);
criterion_main!(benches);
