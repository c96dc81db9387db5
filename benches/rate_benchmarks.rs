//! Performance benchmarks for the rate engine.
//!
//! Covers the individual calculators against the shipped tariff, the
//! composed PPM estimate, and the HTTP estimate endpoints end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use rate_engine::api::{AppState, create_router};
use rate_engine::calculation::{PpmEstimateRequest, RateEngine};
use rate_engine::config::TariffLoader;
use rate_engine::models::{Cwt, Pounds};
use rate_engine::tariff::InMemoryTariff;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

/// Creates an engine over the shipped tariff.
fn create_engine() -> RateEngine<InMemoryTariff> {
    let loader = TariffLoader::load("./config/tariff400ng").expect("Failed to load tariff");
    RateEngine::new(loader.into_tariff())
}

fn rate_engine_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 15).unwrap()
}

fn ppm_request(weight: i64, days_in_storage: u32) -> PpmEstimateRequest {
    PpmEstimateRequest {
        origin_zip: 39501,
        destination_zip: 33601,
        weight: Pounds(weight),
        planned_move_date: rate_engine_date(),
        days_in_storage,
    }
}

/// Benchmark: Each calculator on its own.
fn bench_calculators(c: &mut Criterion) {
    let engine = create_engine();
    let date = rate_engine_date();

    let mut group = c.benchmark_group("calculators");

    group.bench_function("determine_mileage", |b| {
        b.iter(|| black_box(engine.determine_mileage(black_box(10024), black_box(18209))))
    });
    group.bench_function("base_linehaul", |b| {
        b.iter(|| black_box(engine.base_linehaul(black_box(3200), black_box(Cwt(40)))))
    });
    group.bench_function("linehaul_factors", |b| {
        b.iter(|| black_box(engine.linehaul_factors(black_box(Cwt(60)), 395, date)))
    });
    group.bench_function("shorthaul_charge", |b| {
        b.iter(|| black_box(engine.shorthaul_charge(black_box(799), black_box(Cwt(40)))))
    });
    group.bench_function("linehaul_charge_total", |b| {
        b.iter(|| black_box(engine.linehaul_charge_total(black_box(Pounds(2000)), 395, 336, date)))
    });
    group.bench_function("sit_charge", |b| {
        b.iter(|| black_box(engine.sit_charge(black_box(Cwt(20)), 5, 336, date, true)))
    });
    group.bench_function("resolve_discount", |b| {
        b.iter(|| black_box(engine.resolve_discount(black_box(39501), black_box(33601), date)))
    });

    group.finish();
}

/// Benchmark: Composed PPM estimate, with and without storage.
fn bench_ppm_estimate(c: &mut Criterion) {
    let engine = create_engine();

    let mut group = c.benchmark_group("ppm_estimate");

    for days in [0u32, 5, 30].iter() {
        let request = ppm_request(2000, *days);
        group.bench_with_input(BenchmarkId::new("days_in_storage", days), days, |b, _| {
            b.iter(|| black_box(engine.estimate_ppm(black_box(&request))))
        });
    }

    group.finish();
}

/// Benchmark: Batch of estimates across a weight range.
fn bench_batch_estimates(c: &mut Criterion) {
    let engine = create_engine();
    let requests: Vec<PpmEstimateRequest> = (0..1000)
        .map(|i| ppm_request(500 + i * 4, (i % 10) as u32))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(requests.len() as u64));

    group.bench_function("batch_1000", |b| {
        b.iter(|| {
            let results: Vec<_> = requests
                .iter()
                .map(|request| engine.estimate_ppm(request))
                .collect();
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: PPM estimate through the HTTP router.
fn bench_http_estimate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(create_engine()));
    let body = serde_json::json!({
        "origin_zip": 39501,
        "destination_zip": 33601,
        "weight_estimate": 2000,
        "planned_move_date": "2018-01-15",
        "days_in_storage": 5
    })
    .to_string();

    c.bench_function("http_ppm_estimate", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/estimates/ppm")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_calculators,
    bench_ppm_estimate,
    bench_batch_estimates,
    bench_http_estimate,
);
criterion_main!(benches);
