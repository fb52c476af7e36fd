use bench::apply_large_runtime_config;
use bench::apply_medium_runtime_config;
use bench::apply_small_runtime_config;
use bench::default_rng;
use bench::random_pm_walk;
use bench::random_ranges;
use bench::random_values;
use criterion::BenchmarkGroup;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::measurement::Measurement;
use rmq::CartesianRmq;
use rmq::NaiveRmq;
use rmq::PlusMinusOneRmq;
use rmq::SparseTableRmq;
use rmq::StaticRmq;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_000, 10_000, 100_000, 1_000_000];
const NAIVE_SIZES: [usize; 3] = [64, 256, 1_024];
const QUERY_BATCH: usize = 1_024;

fn apply_runtime_config_for_size<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 10_000 {
        apply_small_runtime_config(group);
    } else if size <= 100_000 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_build_impl<'a, M, R>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &'a [i64],
) where
    M: Measurement,
    R: StaticRmq<'a>,
{
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let rmq = R::new(black_box(values));
            black_box(&rmq);
        })
    });
}

fn bench_query_impl<'a, M, R>(
    group: &mut BenchmarkGroup<'_, M>,
    name: &str,
    size: usize,
    values: &'a [i64],
    queries: &[(usize, usize)],
) where
    M: Measurement,
    R: StaticRmq<'a>,
{
    let rmq = R::new(values);
    group.bench_function(BenchmarkId::new(name, size), |bencher| {
        bencher.iter(|| {
            let mut acc = 0_usize;
            for &(l, r) in queries {
                acc ^= rmq.argmin(black_box(l)..black_box(r));
            }
            black_box(acc);
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("rmq/build");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let values = random_values(&mut rng, size, -1_000_000_000, 1_000_000_000);
        let walk = random_pm_walk(&mut rng, size);

        bench_build_impl::<_, SparseTableRmq>(&mut group, "sparse", size, &values);
        bench_build_impl::<_, CartesianRmq>(&mut group, "cartesian", size, &values);
        bench_build_impl::<_, PlusMinusOneRmq>(&mut group, "pm_one", size, &walk);
    }

    for &size in &NAIVE_SIZES {
        apply_small_runtime_config(&mut group);
        let values = random_values(&mut rng, size, -1_000_000_000, 1_000_000_000);
        bench_build_impl::<_, NaiveRmq>(&mut group, "naive", size, &values);
    }

    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("rmq/query");

    for &size in &SIZES {
        apply_runtime_config_for_size(&mut group, size);
        let values = random_values(&mut rng, size, -1_000_000_000, 1_000_000_000);
        let walk = random_pm_walk(&mut rng, size);
        let queries = random_ranges(&mut rng, size, QUERY_BATCH);

        bench_query_impl::<_, SparseTableRmq>(&mut group, "sparse", size, &values, &queries);
        bench_query_impl::<_, CartesianRmq>(&mut group, "cartesian", size, &values, &queries);
        bench_query_impl::<_, PlusMinusOneRmq>(&mut group, "pm_one", size, &walk, &queries);
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
