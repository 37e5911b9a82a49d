//! ItemList decode throughput.
//!
//! Measures JSON text -> validated `ItemList` for pages of increasing size,
//! plus the reject path where the last member is malformed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use itemschema_core::{decode, ItemList};

fn page(members: usize, break_last: bool) -> String {
    let mut items: Vec<String> = (0..members)
        .map(|i| format!(r#"{{"id":"item-{}","name":"Something fun {}"}}"#, i, i))
        .collect();
    if break_last {
        if let Some(last) = items.last_mut() {
            *last = r#"{"id":42,"name":"broken"}"#.to_string();
        }
    }
    format!(r#"{{"has_more":true,"members":[{}]}}"#, items.join(","))
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_list_decode");
    for size in [1usize, 100, 10_000] {
        let payload = page(size, false);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("valid", size), &payload, |b, payload| {
            b.iter(|| decode::<ItemList>(black_box(payload)))
        });

        let payload = page(size, true);
        group.bench_with_input(BenchmarkId::new("rejected", size), &payload, |b, payload| {
            b.iter(|| decode::<ItemList>(black_box(payload)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
