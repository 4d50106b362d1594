// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Direct Operations - the four evaluator methods
// 2. Dispatch - evaluate() by Operation value
// 3. Event Handling - cost of notifying a handler
// ============================================================================

use calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Direct Operations
// ============================================================================

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");
    let calc = Calculator::new();

    group.bench_function("add", |b| {
        b.iter(|| black_box(calc.add(black_box(5.0), black_box(3.0))))
    });
    group.bench_function("subtract", |b| {
        b.iter(|| black_box(calc.subtract(black_box(5.0), black_box(3.0))))
    });
    group.bench_function("multiply", |b| {
        b.iter(|| black_box(calc.multiply(black_box(5.0), black_box(3.0))))
    });
    group.bench_function("divide", |b| {
        b.iter(|| black_box(calc.divide(black_box(6.0), black_box(3.0))))
    });
    group.bench_function("divide_by_zero", |b| {
        b.iter(|| black_box(calc.divide(black_box(5.0), black_box(0.0))))
    });

    group.finish();
}

// ============================================================================
// Dispatch by Operation
// ============================================================================

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let calc = Calculator::new();

    for op in Operation::ALL {
        group.bench_with_input(BenchmarkId::new("f64", op), &op, |b, op| {
            b.iter(|| black_box(calc.evaluate(*op, black_box(6.0), black_box(3.0))))
        });
    }

    group.finish();
}

// ============================================================================
// Event Handling
// ============================================================================

fn benchmark_event_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_handlers");

    let quiet = CalculatorBuilder::new("quiet")
        .notify_events(false)
        .build(Arc::new(NoOpEventHandler))
        .unwrap();
    let noop = CalculatorBuilder::new("noop")
        .build(Arc::new(NoOpEventHandler))
        .unwrap();
    let logging = CalculatorBuilder::new("logging")
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    for (name, calc) in [("disabled", &quiet), ("noop", &noop), ("logging", &logging)] {
        group.bench_function(name, |b| {
            b.iter(|| black_box(calc.evaluate_record(Operation::Multiply, black_box(5.0), 3.0)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_operations,
    benchmark_evaluate,
    benchmark_event_handlers
);
criterion_main!(benches);
