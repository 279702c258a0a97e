#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: formurl vs url crate's `form_urlencoded`
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use formurl::{UrlSearchParams, urlencoded};

const SIMPLE_QUERY: &str = "q=URLUtils.s&topic=api&page=2";
const ENCODED_QUERY: &str =
    "name=Fran%C3%A7ois+Dupont&city=%E6%9D%B1%E4%BA%AC&tags=a%2Cb%2Cc&note=100%25+sure&empty=&flag";

/// Build a query with `count` pairs, some of them repeating the same name
fn long_query(count: usize) -> String {
    (0..count)
        .map(|i| format!("key{}=value+{}%20%E3%81%82", i % 16, i))
        .collect::<Vec<_>>()
        .join("&")
}

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");

    group.bench_function("formurl", |b| {
        b.iter(|| urlencoded::parse(black_box(SIMPLE_QUERY.as_bytes())));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(SIMPLE_QUERY.as_bytes()))
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_parse_encoded_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_encoded");

    group.bench_function("formurl", |b| {
        b.iter(|| urlencoded::parse(black_box(ENCODED_QUERY.as_bytes())));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(ENCODED_QUERY.as_bytes()))
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_parse_long_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_long");
    let input = long_query(512);

    group.bench_function("formurl", |b| {
        b.iter(|| urlencoded::parse(black_box(input.as_bytes())));
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::parse(black_box(input.as_bytes()))
                .into_owned()
                .collect::<Vec<_>>()
        });
    });

    group.finish();
}

fn bench_serialize_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let params = UrlSearchParams::parse(ENCODED_QUERY);
    let pairs: Vec<(String, String)> = params
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    group.bench_function("formurl", |b| {
        b.iter(|| black_box(&params).to_string());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| {
            url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(
                    black_box(&pairs)
                        .iter()
                        .map(|(name, value)| (name.as_str(), value.as_str())),
                )
                .finish()
        });
    });

    group.finish();
}

fn bench_set_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    let params = UrlSearchParams::parse(&long_query(512));

    group.bench_function("formurl", |b| {
        b.iter(|| {
            let mut params = params.clone();
            params.set(black_box("key3"), black_box("replaced"));
            params
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_encoded_all,
    bench_parse_long_all,
    bench_serialize_all,
    bench_set_all,
);
criterion_main!(benches);
