use aggtree::{AggregationTree, aggregator::sum::U64SumAggregator};
use criterion::{Bencher, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

const SIZES: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation_tree");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("build_u64_sum", size), &size, build);
        group.bench_with_input(BenchmarkId::new("query_u64_sum", size), &size, query);
        group.bench_with_input(BenchmarkId::new("set_u64_sum", size), &size, set);
    }
    group.finish();
}

fn values(size: usize) -> Vec<u64> {
    (0..size).map(|_| fastrand::u64(0..1000)).collect()
}

fn build(bencher: &mut Bencher, size: &usize) {
    let values = values(*size);
    bencher.iter(|| AggregationTree::new(black_box(&values), U64SumAggregator));
}

fn query(bencher: &mut Bencher, size: &usize) {
    let tree = AggregationTree::new(&values(*size), U64SumAggregator);
    bencher.iter(|| {
        let l = fastrand::usize(0..*size);
        let r = fastrand::usize(l..*size);
        black_box(tree.query(l, r))
    });

    #[cfg(feature = "profiler")]
    println!("{:?}", tree.stats());
}

fn set(bencher: &mut Bencher, size: &usize) {
    let mut tree = AggregationTree::new(&values(*size), U64SumAggregator);
    bencher.iter(|| {
        let index = fastrand::usize(0..*size);
        black_box(tree.set(index, fastrand::u64(0..1000)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
