use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 20;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 250;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 400;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 2000;
const RNG_SEED: u64 = 0x5EED_CA47;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Uniform values in `lo..=hi`.
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, n: usize, lo: i64, hi: i64) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(rng.random_range(lo..=hi));
    }
    values
}

/// A random walk stepping by exactly ±1, starting at 0.
pub fn random_pm_walk<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    if n == 0 {
        return values;
    }
    values.push(0_i64);
    for i in 1..n {
        let step = if rng.random_bool(0.5) { 1 } else { -1 };
        values.push(values[i - 1] + step);
    }
    values
}

/// A uniformly attached random tree as a parent array: `parent[v] < v` for
/// every `v > 0`, node 0 is the root (its entry is unused).
pub fn random_parent_links<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut parent = vec![0_usize; n];
    for v in 1..n {
        parent[v] = rng.random_range(0..v);
    }
    parent
}

/// Random half-open query ranges over `0..n`.
pub fn random_ranges<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut ranges = Vec::with_capacity(count);
    for _ in 0..count {
        let l = rng.random_range(0..n);
        let r = rng.random_range((l + 1)..=n);
        ranges.push((l, r));
    }
    ranges
}
