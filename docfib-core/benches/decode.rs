use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use docfib_core::{decode_dop, decode_fib, decode_fib_from_bytes, Fib, IoCursor};

const FIB_HEX: &str = include_str!("../tests/vectors/word97_fib.hex");
const TABLE_HEX: &str = include_str!("../tests/vectors/word97_table.hex");

fn streams() -> (Bytes, Bytes) {
    let primary = hex::decode(FIB_HEX.trim()).unwrap();
    let table = hex::decode(TABLE_HEX.trim()).unwrap();
    (Bytes::from(primary), Bytes::from(table))
}

fn bench_fib(c: &mut Criterion) {
    let (primary, _) = streams();
    let mut group = c.benchmark_group("fib");
    group.throughput(Throughput::Bytes(primary.len() as u64));

    group.bench_function("slice", |b| {
        b.iter(|| decode_fib_from_bytes(black_box(primary.clone())).unwrap());
    });

    let owned = primary.to_vec();
    group.bench_function("reader", |b| {
        b.iter(|| {
            let mut cursor = IoCursor::new(black_box(owned.as_slice()));
            decode_fib(&mut cursor).unwrap()
        });
    });

    group.finish();
}

fn bench_dop(c: &mut Criterion) {
    let (primary, table) = streams();
    let fib: Fib = decode_fib_from_bytes(primary).unwrap();

    c.bench_function("dop97", |b| {
        b.iter(|| decode_dop(black_box(&fib), black_box(&table)).unwrap());
    });

    c.bench_function("table_bounds", |b| {
        b.iter(|| fib.check_table_bounds(black_box(table.len())).unwrap());
    });
}

criterion_group!(benches, bench_fib, bench_dop);
criterion_main!(benches);
