use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uidlist::UidList;

// cargo bench
pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("splice_1000", |b| {
        b.iter(|| {
            let mut list = UidList::new();
            let mut cursor = list.create_node(black_box(0u64));
            list.add_first(cursor).unwrap();
            for i in 1..1000u64 {
                let uid = list.create_node(black_box(i));
                list.add_next(cursor, uid).unwrap();
                cursor = uid;
            }
            list
        })
    });

    let mut list = UidList::new();
    let mut cursor = list.create_node(0u64);
    list.add_first(cursor).unwrap();
    for i in 1..1000u64 {
        let uid = list.create_node(i);
        list.add_next(cursor, uid).unwrap();
        cursor = uid;
    }
    c.bench_function("iterate_1000", |b| b.iter(|| list.iter().sum::<u64>()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
