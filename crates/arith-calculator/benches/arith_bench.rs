use arith_calculator::{Calculator, Number, Operation, add, divide, multiply, subtract};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::HashMap;

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");

    let pairs = [
        ("integer", Number::Integer(1_234_567), Number::Integer(89)),
        ("float", Number::Float(1_234.567), Number::Float(8.9)),
        ("mixed", Number::Integer(1_234_567), Number::Float(8.9)),
    ];

    for (label, a, b) in pairs {
        group.bench_with_input(BenchmarkId::new("add", label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| add(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("subtract", label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| subtract(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("multiply", label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| multiply(black_box(a), black_box(b)))
        });
        group.bench_with_input(BenchmarkId::new("divide", label), &(a, b), |bench, &(a, b)| {
            bench.iter(|| divide(black_box(a), black_box(b)))
        });
    }
    group.finish();
}

fn bench_named_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("named_dispatch");
    let calculator = Calculator::new();
    let (a, b) = (Number::Integer(42), Number::Integer(7));
    let args: HashMap<String, &Number> =
        [("a".to_string(), &a), ("b".to_string(), &b)].into_iter().collect();

    for op in Operation::ALL {
        group.bench_function(BenchmarkId::new("calculate", op), |bench| {
            bench.iter(|| calculator.calculate(black_box(op.name()), black_box(&args)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_operations, bench_named_dispatch);
criterion_main!(benches);
