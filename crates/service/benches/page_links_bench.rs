use criterion::{black_box, criterion_group, criterion_main, Criterion};

use common::types::PageQuery;
use configs::PaginationConfig;
use service::{compute, ListContext};

fn bench_compute(c: &mut Criterion) {
    c.bench_function("page_link_range_compute", |b| {
        b.iter(|| {
            for current in 1..=1000u32 {
                let _ = compute(black_box(current), black_box(1000), black_box(2));
            }
        });
    });
}

fn bench_list_context(c: &mut Criterion) {
    let records: Vec<u64> = (0..10_000).collect();
    let cfg = PaginationConfig::default();
    let query = PageQuery::new("200");
    c.bench_function("list_context_build", |b| {
        b.iter(|| ListContext::build(black_box(&records), &query, &cfg).unwrap());
    });
}

criterion_group!(benches, bench_compute, bench_list_context);
criterion_main!(benches);
