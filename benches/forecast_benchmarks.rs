//! Performance benchmarks for the salon forecast engine.
//!
//! Covers the engine on its own at growing roster sizes and a full
//! `/forecast` round trip through the router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use salon_forecast::api::{AppState, ForecastRequest, create_router};
use salon_forecast::calculation::{ForecastInput, ForecastOptions, compute_forecast};
use salon_forecast::config::ConfigLoader;
use salon_forecast::models::{
    Employee, ForecastPeriod, HelpRecord, LeaveRecord, Location, Rank, Role,
};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const LOCATION_COUNT: usize = 10;

fn load_config() -> ConfigLoader {
    ConfigLoader::load("./config/salon").expect("Failed to load config")
}

/// Builds a chain with `employee_count` staff spread over ten locations.
///
/// Every fifth employee helps the next location and every tenth is on leave.
fn create_request(employee_count: usize) -> ForecastRequest {
    let locations: Vec<Location> = (0..LOCATION_COUNT)
        .map(|i| Location::new(format!("loc_{}", i), format!("Salon {}", i)))
        .collect();

    let employees: Vec<Employee> = (0..employee_count)
        .map(|i| Employee {
            id: format!("emp_{}", i),
            name: format!("Staff {}", i),
            location_id: format!("loc_{}", i % LOCATION_COUNT),
            role: if i % 2 == 0 { Role::Eyelist } else { Role::Nailist },
            rank: Rank::ALL[i % Rank::ALL.len()],
        })
        .collect();

    let help_records = employees
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 5 == 0)
        .map(|(i, e)| HelpRecord {
            id: format!("help_{}", i),
            employee_id: e.id.clone(),
            year: 2026,
            month: 8,
            from_location_id: e.location_id.clone(),
            to_location_id: format!("loc_{}", (i + 1) % LOCATION_COUNT),
            deduction_percent: Decimal::from(20),
            addition_percent: Decimal::from(20),
        })
        .collect();

    let leave_records = employees
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 10 == 9)
        .map(|(i, e)| LeaveRecord {
            id: format!("leave_{}", i),
            employee_id: e.id.clone(),
            year: 2026,
            month: 8,
            activity_ratio: None,
        })
        .collect();

    ForecastRequest {
        year: 2026,
        month: 8,
        promo_period: false,
        activity_policy: None,
        deduction_overflow: None,
        locations,
        employees,
        standards: None,
        help_records,
        leave_records,
        attendance: vec![],
    }
}

/// Benchmark: engine only, at growing roster sizes.
fn bench_engine_scaling(c: &mut Criterion) {
    let config = load_config();
    let options = ForecastOptions::for_period(ForecastPeriod { year: 2026, month: 8 });

    let mut group = c.benchmark_group("engine_scaling");

    for employee_count in [10, 100, 1000].iter() {
        let request = create_request(*employee_count);
        let input: ForecastInput<'_> = request.input(&config);

        group.throughput(Throughput::Elements(*employee_count as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employee_count),
            employee_count,
            |b, _| b.iter(|| black_box(compute_forecast(black_box(&input), &options).unwrap())),
        );
    }

    group.finish();
}

/// Benchmark: one `/forecast` request for a 100-employee chain.
fn bench_forecast_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(load_config()));
    let body = serde_json::to_string(&create_request(100)).unwrap();

    c.bench_function("forecast_endpoint_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/forecast")
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

criterion_group!(benches, bench_engine_scaling, bench_forecast_endpoint);
criterion_main!(benches);
