use std::time::Duration;

use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use potshare::cards::hand::Hand;
use potshare::cards::hands::HandIterator;
use potshare::cards::hands::SubsetIterator;

const SOURCE: &str = "As Ks Qs Js Ts 9s 8s 7s 6s 5s";
const SIZE: usize = 2;

fn bench_masked(c: &mut Criterion) {
    let mut group = c.benchmark_group("Masked Iterator");
    group
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2));
    group.bench_function("masked", |b| {
        let mask = Hand::from(SOURCE).complement();
        b.iter(|| {
            let mut iter = HandIterator::from((SIZE, mask));
            for _ in 0..iter.combinations() {
                black_box(iter.next());
            }
        })
    });
    group.finish();
}

fn bench_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scatter Iterator");
    group
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2));
    group.bench_function("scatter", |b| {
        let source = Hand::from(SOURCE);
        b.iter(|| {
            let mut iter = SubsetIterator::from((SIZE, source));
            for _ in 0..iter.combinations() {
                black_box(iter.next());
            }
        })
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(120))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_masked, bench_scatter
);
criterion_main!(benches);
