use criterion::{criterion_group, criterion_main, Criterion};

use rand_kiss::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut kiss = Kiss::default();
    c.bench_function("Kiss::next", move |b| b.iter(|| kiss.next()));
    let mut kiss2 = Kiss2::default();
    c.bench_function("Kiss2::next", move |b| b.iter(|| kiss2.next()));
    let mut lfsr = Lfsr113::default();
    c.bench_function("Lfsr113::next", move |b| b.iter(|| lfsr.next()));
    let mut any = AnyRng::new(Family::Kiss);
    c.bench_function("AnyRng(Kiss)::next", move |b| b.iter(|| any.next()));

    for &family in Family::ALL.iter() {
        let mut rng = AnyRng::new(family);
        c.bench_function(&format!("{}::discard", family), move |b| b.iter(|| rng.discard(criterion::black_box(0xffff_ffff_ffff))));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
