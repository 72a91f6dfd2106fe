use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hullgrowth::algorithms::compute_hull;
use hullgrowth::data::Point;
use hullgrowth::growth::{GrowthConfig, GrowthController, RandomSource};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn gen_points(n: usize, rng: &mut SmallRng) -> Vec<Point> {
  (0..n).map(|_| rng.gen()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0xcafe);
  for &n in &[10, 100, 1_000] {
    let pts = gen_points(n, &mut rng);
    c.bench_function(&format!("compute_hull({})", n), |b| {
      b.iter(|| compute_hull(&pts))
    });
  }

  c.bench_function("run_cycles(10)", |b| {
    b.iter_batched(
      || GrowthController::new(RandomSource::seed_from_u64(5), GrowthConfig::default()),
      |controller| controller.and_then(|mut controller| controller.run_cycles(10)),
      BatchSize::SmallInput,
    )
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
