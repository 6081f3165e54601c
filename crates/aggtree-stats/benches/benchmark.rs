use aggtree_stats::Sketch;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("profile_scope", |b| {
        let sketch = Sketch::default();
        b.iter(|| {
            aggtree_stats::profile_scope!(&sketch);
        })
    });
    c.bench_function("sketch_add", |b| {
        let sketch = Sketch::default();
        let mut v = 0.0;
        b.iter(|| {
            v += 1.0;
            sketch.add(black_box(v));
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
