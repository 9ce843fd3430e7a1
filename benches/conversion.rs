use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_rowtext::{to_string, to_value, Converter};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct Shipment {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
    items: Vec<Product>,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn sample_shipment(items: usize) -> Shipment {
    Shipment {
        id: 1,
        metadata: Metadata {
            created: "2024-01-01".to_string(),
            updated: "2024-01-02".to_string(),
            version: 3,
        },
        tags: vec!["fragile".to_string(), "express".to_string()],
        items: (0..items)
            .map(|i| Product {
                sku: format!("SKU-{:04}", i),
                price: 9.99 + i as f64,
                quantity: (i % 7) as u32,
            })
            .collect(),
    }
}

fn benchmark_flat(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("convert_flat_struct", |b| b.iter(|| to_string(black_box(&user))));
}

fn benchmark_reused_converter(c: &mut Criterion) {
    let value = to_value(&sample_user()).unwrap();
    let mut converter = Converter::default();

    c.bench_function("convert_reflected_value", |b| {
        b.iter(|| converter.convert_value(black_box(&value)).len())
    });
}

fn benchmark_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_nested_items");

    for size in [10, 50, 100, 500].iter() {
        let shipment = sample_shipment(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &shipment, |b, s| {
            b.iter(|| to_string(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_flat,
    benchmark_reused_converter,
    benchmark_nested
);
criterion_main!(benches);
