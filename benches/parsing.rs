use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use json_pull::{parse, tokenize, Value};

fn small_document() -> String {
    "{\"id\":123,\"name\":\"Alice\",\"email\":\"alice@example.com\",\"active\":true}"
        .to_string()
}

fn array_document(size: usize) -> String {
    let rows: Vec<String> = (0..size)
        .map(|i| {
            format!(
                "{{\"sku\":\"SKU{i}\",\"name\":\"Product {i}\",\"price\":{},\"quantity\":{i}}}",
                9.99 + i as f64
            )
        })
        .collect();
    format!("[{}]", rows.join(","))
}

fn nested_document() -> String {
    "{\"id\":42,\"metadata\":{\"created\":\"2023-01-01T00:00:00Z\",\
     \"updated\":\"2023-12-31T23:59:59Z\",\"version\":3},\
     \"tags\":[\"important\",\"verified\",\"production\"]}"
        .to_string()
}

fn benchmark_parse_simple(c: &mut Criterion) {
    let text = small_document();

    c.bench_function("parse_simple_object", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

fn benchmark_tokenize_simple(c: &mut Criterion) {
    let text = small_document();

    c.bench_function("tokenize_simple_object", |b| {
        b.iter(|| tokenize(black_box(&text)))
    });
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 50, 100, 500].iter() {
        let text = array_document(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_parse_nested(c: &mut Criterion) {
    let text = nested_document();

    c.bench_function("parse_nested_object", |b| {
        b.iter(|| parse(black_box(&text)))
    });
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let small: Value = parse(&small_document()).unwrap();
    let large: Value = parse(&array_document(100)).unwrap();

    group.bench_function("small_object", |b| {
        b.iter(|| black_box(&small).to_string())
    });

    group.bench_function("array_100", |b| b.iter(|| black_box(&large).to_string()));

    group.finish();
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let text = small_document();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("json_pull_parse", |b| {
        b.iter(|| json_pull::parse(black_box(&text)))
    });

    group.bench_function("serde_json_parse", |b| {
        b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(&text)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = small_document();

    c.bench_function("roundtrip_simple", |b| {
        b.iter(|| {
            let value = parse(black_box(&text)).unwrap();
            let _rendered = value.to_string();
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse_simple,
    benchmark_tokenize_simple,
    benchmark_parse_array,
    benchmark_parse_nested,
    benchmark_render,
    benchmark_comparison_with_serde_json,
    benchmark_roundtrip
);
criterion_main!(benches);
