use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

use crate::data::Point;

/// Produces the points a [`GrowthController`](super::GrowthController) grows from.
///
/// `current_generation_radius` bounds how far from the origin points are
/// currently being drawn. It must never increase across calls to
/// `next_point` and must tend to zero as more points are drawn. Growth
/// phases only end once a hull outgrows this radius; a source whose radius
/// stalls above every reachable hull keeps a phase running forever.
pub trait PointSource {
  fn next_point(&mut self) -> Point;
  fn current_generation_radius(&self) -> f64;
}

impl<S: PointSource + ?Sized> PointSource for &mut S {
  fn next_point(&mut self) -> Point {
    (**self).next_point()
  }
  fn current_generation_radius(&self) -> f64 {
    (**self).current_generation_radius()
  }
}

impl<S: PointSource + ?Sized> PointSource for Box<S> {
  fn next_point(&mut self) -> Point {
    (**self).next_point()
  }
  fn current_generation_radius(&self) -> f64 {
    (**self).current_generation_radius()
  }
}

// 1/n after n points, 1 before the first.
fn harmonic_radius(generated: usize) -> f64 {
  if generated == 0 {
    1.0
  } else {
    1.0 / generated as f64
  }
}

/// The n-th point lies in a uniformly random direction at distance `1/n`
/// from the origin.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
  rng: R,
  generated: usize,
}

impl<R: Rng> RandomSource<R> {
  pub fn new(rng: R) -> RandomSource<R> {
    RandomSource { rng, generated: 0 }
  }

  pub fn generated(&self) -> usize {
    self.generated
  }

  pub fn into_rng(self) -> R {
    self.rng
  }
}

impl RandomSource<SmallRng> {
  pub fn seed_from_u64(seed: u64) -> RandomSource<SmallRng> {
    RandomSource::new(SmallRng::seed_from_u64(seed))
  }
}

impl<R: Rng> PointSource for RandomSource<R> {
  fn next_point(&mut self) -> Point {
    self.generated += 1;
    let angle = self.rng.gen_range(0.0..TAU);
    Point::from_polar(angle, harmonic_radius(self.generated))
  }

  fn current_generation_radius(&self) -> f64 {
    harmonic_radius(self.generated)
  }
}

const GOLDEN_ANGLE_DEGREES: f64 = 137.5;

/// Deterministic spiral: the k-th point (from zero) lies at `k * 137.5°`,
/// at distance `1/(k+1)` from the origin.
#[derive(Debug, Clone, Default)]
pub struct GoldenAngleSource {
  generated: usize,
}

impl GoldenAngleSource {
  pub fn new() -> GoldenAngleSource {
    GoldenAngleSource::default()
  }

  pub fn generated(&self) -> usize {
    self.generated
  }
}

impl PointSource for GoldenAngleSource {
  fn next_point(&mut self) -> Point {
    let k = self.generated;
    self.generated += 1;
    let degrees = (k as f64 * GOLDEN_ANGLE_DEGREES) % 360.0;
    Point::from_polar(degrees.to_radians(), harmonic_radius(self.generated))
  }

  fn current_generation_radius(&self) -> f64 {
    harmonic_radius(self.generated)
  }
}
