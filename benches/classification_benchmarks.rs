//! Performance benchmarks for the Benefit Eligibility Engine.
//!
//! This benchmark suite measures the classification pipeline directly and
//! through the HTTP API:
//! - Batch of 100 rows through `classify_batch`
//! - Batch of 1000 rows through `classify_batch`
//! - CSV export of the retained rows
//! - JSON request through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use benefit_eligibility::api::{AppState, create_router};
use benefit_eligibility::config::ConfigLoader;
use benefit_eligibility::eligibility::classify_batch;
use benefit_eligibility::models::{Cell, RawTable, required_header};
use benefit_eligibility::tabular::to_csv_bytes;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 3).unwrap()
}

/// Builds a roster mixing every disposition path.
fn create_roster(rows: usize) -> RawTable {
    let mut table = RawTable::new(required_header());

    for i in 0..rows {
        let name = if i % 10 == 0 {
            "Shared.Name".to_string()
        } else {
            format!("Employee.{:05}", i)
        };
        let status = if i % 7 == 0 { "퇴직" } else { "재직" };
        let position = if i % 11 == 0 { "Intern" } else { "Engineer" };
        let hire_date = if i % 5 == 0 { "2025/02/15" } else { "2022-06-01" };
        let termination_date = if i % 13 == 0 { "20250301" } else { "" };

        table.push_row(vec![
            Cell::text(format!("{:05}", i)),
            Cell::text(format!("직원{}", i)),
            Cell::text(name.clone()),
            Cell::text(name),
            Cell::text(status),
            Cell::text(position),
            Cell::text(hire_date),
            Cell::text(termination_date),
        ]);
    }

    table
}

fn create_request_body(rows: usize) -> String {
    let table = create_roster(rows);
    let rows: Vec<serde_json::Map<String, serde_json::Value>> = table
        .rows()
        .iter()
        .map(|row| {
            table
                .headers()
                .iter()
                .zip(row)
                .map(|(header, cell)| {
                    let value = cell
                        .to_text()
                        .map(serde_json::Value::String)
                        .unwrap_or(serde_json::Value::Null);
                    (header.clone(), value)
                })
                .collect()
        })
        .collect();

    serde_json::json!({ "reference_date": "2025-04-03", "rows": rows }).to_string()
}

/// Benchmark: Pipeline scaling with batch size.
fn bench_classify_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify_batch");

    for rows in [100, 1000].iter() {
        let table = create_roster(*rows);

        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), rows, |b, _| {
            b.iter(|| black_box(classify_batch(table.clone(), reference_date()).unwrap()))
        });
    }

    group.finish();
}

/// Benchmark: CSV export of 1000 classified rows.
fn bench_csv_export(c: &mut Criterion) {
    let report = classify_batch(create_roster(1000), reference_date()).unwrap();

    c.bench_function("csv_export_1000", |b| {
        b.iter(|| black_box(to_csv_bytes(&report.records).unwrap()))
    });
}

/// Benchmark: JSON request of 1000 rows through the router.
fn bench_api_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::new(ConfigLoader::default()));
    let body = create_request_body(1000);

    let mut group = c.benchmark_group("api");
    group.sample_size(10);

    group.bench_function("classify_1000", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/classify")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classify_batch,
    bench_csv_export,
    bench_api_request,
);
criterion_main!(benches);
