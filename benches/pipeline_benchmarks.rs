//! Benchmarks for the roster normalization pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use territory_map::catalog::REGION_CODES;
use territory_map::pipeline::{parse, Pipeline};
use territory_map::roster::RosterRecord;

const LABELS: &[&str] = &["TX", "OK/KS/MO", "AR/MS/N. LA", "OR-WA", "S. CA", "Indy/MI", "UT/ID"];

fn roster(size: usize) -> Vec<RosterRecord> {
    (0..size)
        .map(|i| {
            let label = if i % 3 == 0 {
                LABELS[i % LABELS.len()].to_string()
            } else {
                format!(
                    "{}/{}",
                    REGION_CODES[i % REGION_CODES.len()],
                    REGION_CODES[(i * 7) % REGION_CODES.len()]
                )
            };
            let ae = format!("AE {}", i % 17);
            let am = format!("AM {}", i % 11);
            let pm = format!("PM {}", i % 5);

            RosterRecord::new(Some(label.as_str()))
                .with_attribute("Account Executive", Some(ae.as_str()))
                .with_attribute("Account Manager", Some(am.as_str()))
                .with_attribute("Project Manager", Some(pm.as_str()))
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_label");
    for label in LABELS {
        group.bench_with_input(BenchmarkId::from_parameter(label), label, |b, label| {
            b.iter(|| black_box(parse(Some(*label))))
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_run");
    let pipeline = Pipeline::default();

    for size in [25, 250, 2500] {
        let records = roster(size);
        group.bench_with_input(BenchmarkId::new("rows", size), &records, |b, records| {
            b.iter(|| black_box(pipeline.run(records)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_pipeline);
criterion_main!(benches);
