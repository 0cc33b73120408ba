use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use algo_toolbox::util::generate_random_data;
use algo_toolbox::{big_factorial, SortAlgorithm};

fn sort_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [100, 1_000, 5_000] {
        group.throughput(Throughput::Elements(size as u64));
        for algorithm in SortAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &size,
                |b, &size| {
                    b.iter_batched(
                        || generate_random_data(size),
                        |mut data| algorithm.sort(&mut data),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn factorial_bench(c: &mut Criterion) {
    c.bench_function("big_factorial 1000", |b| b.iter(|| big_factorial(black_box(1000))));
}

criterion_group!(benches, sort_bench, factorial_bench);
criterion_main!(benches);
