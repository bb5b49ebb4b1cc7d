//! Performance benchmarks for the Paycheck Engine.
//!
//! This benchmark suite verifies that the calculation engine meets performance targets:
//! - Single weekly calculation: < 50μs mean
//! - Full pay-period request (2 weeks + 3 scenario projections): < 1ms mean
//! - Batch of 100 pay-period requests: < 100ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paycheck_engine::api::{AppState, create_router};
use paycheck_engine::calculation::calculate_weekly_pay;
use paycheck_engine::config::ConfigLoader;
use paycheck_engine::models::{PaySettings, WeekInput};

use axum::{body::Body, http::Request};
use rust_decimal::Decimal;
use std::str::FromStr;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/hotwork").expect("Failed to load config");
    AppState::new(config)
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Creates the reference 84-hour week.
fn create_full_week() -> WeekInput {
    WeekInput {
        hours: dec("84"),
        days: 7,
        per_diem_choices: vec!["Breakfast + Lunch + Dinner".to_string(); 7],
    }
}

/// Creates a full pay-period request body.
fn create_request_body(base_weekly: &str) -> String {
    let per_diem_choices = vec!["Breakfast + Lunch + Dinner"; 7];
    let request_json = serde_json::json!({
        "settings": {
            "base_weekly": base_weekly,
            "site_bonus_per_day": "45",
            "tax_rate": "0.15"
        },
        "weeks": [
            {
                "hours": "84",
                "days": 7,
                "per_diem_choices": per_diem_choices
            },
            { "hours": "0", "days": 0, "per_diem_choices": [] }
        ]
    });

    request_json.to_string()
}

/// Benchmark: Single weekly calculation, no HTTP layer.
///
/// Target: < 50μs mean
fn bench_single_week(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/hotwork").expect("Failed to load config");
    let config = loader.config();
    let settings = PaySettings {
        base_weekly: dec("700"),
        site_bonus_per_day: dec("45"),
        tax_rate: dec("0.15"),
    };
    let week = create_full_week();

    c.bench_function("single_week", |b| {
        b.iter(|| {
            let outcome =
                calculate_weekly_pay(black_box(&week), &settings, config, 1).unwrap();
            black_box(outcome)
        })
    });
}

/// Benchmark: Full pay-period request through the router,
/// including the three scenario projections.
///
/// Target: < 1ms mean
fn bench_pay_period_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body("700");

    c.bench_function("pay_period_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
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

/// Benchmark: Batch of 100 pay-period requests.
///
/// Target: < 100ms mean
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    // Pre-create 100 different requests (vary the base salary for a realistic spread)
    let requests: Vec<String> = (0..100)
        .map(|i| create_request_body(&format!("{}", 600 + i * 5)))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response.status());
            }
            black_box(results)
        })
    });

    group.finish();
}

/// Benchmark: Weekly calculation across a range of hours.
fn bench_hours_sweep(c: &mut Criterion) {
    let loader = ConfigLoader::load("./config/hotwork").expect("Failed to load config");
    let config = loader.config();
    let settings = PaySettings {
        base_weekly: dec("700"),
        site_bonus_per_day: dec("45"),
        tax_rate: dec("0.15"),
    };

    let mut group = c.benchmark_group("hours_sweep");
    for hours in ["0", "40", "60", "84", "100"] {
        let week = WeekInput {
            hours: dec(hours),
            days: 7,
            per_diem_choices: vec!["Lunch + Dinner".to_string(); 7],
        };
        group.bench_with_input(BenchmarkId::from_parameter(hours), &week, |b, week| {
            b.iter(|| {
                let outcome = calculate_weekly_pay(black_box(week), &settings, config, 1).unwrap();
                black_box(outcome)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_week,
    bench_pay_period_request,
    bench_batch_100,
    bench_hours_sweep
);
criterion_main!(benches);
