//! Benchmarks for DiscoKV store operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use discokv::Store;

fn store_benchmarks(c: &mut Criterion) {
    c.bench_function("put_new_sub", |b| {
        let store = Store::new();
        let mut i = 0u64;
        b.iter(|| {
            store.put("room", format!("peer{}", i % 64), "10.0.0.1:9000");
            i += 1;
        });
    });

    c.bench_function("put_update_sub", |b| {
        let store = Store::new();
        for i in 0..32 {
            store.put("room", format!("peer{}", i), "10.0.0.1:9000");
        }
        b.iter(|| store.put("room", "peer31", black_box("10.0.0.2:9000")));
    });

    c.bench_function("get_32_subs", |b| {
        let store = Store::new();
        for i in 0..32 {
            store.put("room", format!("peer{}", i), "10.0.0.1:9000");
        }
        b.iter(|| black_box(store.get("room")));
    });

    c.bench_function("get_unknown_key", |b| {
        let store = Store::new();
        b.iter(|| black_box(store.get("missing")));
    });
}

criterion_group!(benches, store_benchmarks);
criterion_main!(benches);
