use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use skuforge_products::{Attribute, AttributeValue, Product, validate};

/// `attributes` axes with `values` entries each; every third value is inactive.
fn catalog(attributes: usize, values: usize) -> Product {
    let attributes = (0..attributes)
        .map(|i| {
            let values = (0..values)
                .map(|j| AttributeValue::new(format!("v{i}_{j}"), j % 3 != 2).unwrap())
                .collect();
            Attribute::new(format!("attr{i}"), values).unwrap()
        })
        .collect();
    Product::new("bench", attributes).unwrap()
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_skus");

    for (attributes, values) in [(2, 3), (3, 5), (4, 6), (5, 5)] {
        let product = catalog(attributes, values);
        group.throughput(Throughput::Elements(product.sku_count() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{attributes}x{values}")),
            &product,
            |b, product| b.iter(|| black_box(product.skus())),
        );
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let raw = serde_json::to_string(&catalog(4, 6)).unwrap();

    c.bench_function("validate/4x6", |b| b.iter(|| black_box(validate(black_box(&raw)))));
    c.bench_function("parse/4x6", |b| b.iter(|| black_box(Product::parse(black_box(&raw)))));
}

criterion_group!(benches, bench_generation, bench_validation);
criterion_main!(benches);
