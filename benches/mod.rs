use assertive_core::logger::init_logger;
use assertive_core::{Nil, equivalent, is_nil};
use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use num::complex::{Complex32, Complex64};

fn bench_equivalence(c: &mut Criterion) {
    init_logger();
    c.bench_function("identical i32", |b| {
        b.iter(|| equivalent(black_box(&5i32), black_box(&5i32)))
    });
    c.bench_function("i32 against u8", |b| {
        b.iter(|| equivalent(black_box(&5i32), black_box(&5u8)))
    });
    c.bench_function("f32 against f64", |b| {
        b.iter(|| equivalent(black_box(&1.0f32), black_box(&1.0f64)))
    });
    c.bench_function("complex64 against complex128", |b| {
        let (narrow, wide) = (Complex32::new(1.0, 1.0), Complex64::new(1.0, 1.0));
        b.iter(|| equivalent(black_box(&narrow), black_box(&wide)))
    });
    c.bench_function("nil against zero", |b| {
        b.iter(|| equivalent(black_box(&Nil), black_box(&0u64)))
    });
    c.bench_function("byte sequences", |b| {
        let (left, right) = (vec![7u8; 1024], vec![7u8; 1024]);
        b.iter(|| equivalent(black_box(&left), black_box(&right)))
    });
}

fn bench_nilness(c: &mut Criterion) {
    c.bench_function("is_nil none", |b| {
        b.iter(|| is_nil(black_box(&None::<Box<u8>>)))
    });
}

criterion_group!(benches, bench_equivalence, bench_nilness);
criterion_main!(benches);
