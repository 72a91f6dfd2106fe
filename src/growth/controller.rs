use log::{debug, trace};

use super::config::GrowthConfig;
use super::observer::{Observer, Snapshot, SnapshotKind};
use super::source::PointSource;
use crate::algorithms::{compute_hull, HullMetrics};
use crate::data::{HullIndexList, Point, PointSet};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPhase {
  /// Sampling until the hull outgrows the generation radius.
  Growing,
  /// The last growth phase met its stopping condition.
  Converged,
  /// The converged hull's vertices were removed. The next growth phase
  /// starts from the remaining points.
  Pruned,
}

/// Owns a growing point set and keeps its convex hull current.
///
/// A growth phase draws batches from the source until
/// `generation_radius <= hull_convergence_radius`. The generation radius
/// tends to zero while a hull containing the origin keeps a positive
/// convergence radius, so every phase ends once the hull encloses the origin.
/// The controller has no internal timeout: termination rests entirely on the
/// [`PointSource`] contract.
#[derive(Debug, Clone)]
pub struct GrowthController<S, O = ()> {
  source: S,
  observer: O,
  config: GrowthConfig,
  points: PointSet,
  hull: HullIndexList,
  metrics: HullMetrics,
  phase: GrowthPhase,
  cycle: usize,
  samples_drawn: usize,
}

impl<S: PointSource> GrowthController<S> {
  /// Draws `config.seed_points` points and computes their hull.
  ///
  /// # Errors
  /// Fails if the source produces a non-finite point.
  pub fn new(source: S, config: GrowthConfig) -> Result<GrowthController<S>, Error> {
    GrowthController::with_observer(source, (), config)
  }
}

impl<S: PointSource, O: Observer> GrowthController<S, O> {
  /// Like [`GrowthController::new`], reporting snapshots to `observer`.
  pub fn with_observer(
    source: S,
    observer: O,
    config: GrowthConfig,
  ) -> Result<GrowthController<S, O>, Error> {
    let mut controller = GrowthController {
      source,
      observer,
      config,
      points: Vec::with_capacity(config.seed_points),
      hull: Vec::new(),
      metrics: HullMetrics::default(),
      phase: GrowthPhase::Growing,
      cycle: 0,
      samples_drawn: 0,
    };
    controller.grow(config.seed_points)?;
    debug!(
      "seeded {} points, hull of {} vertices",
      controller.points.len(),
      controller.hull.len()
    );
    Ok(controller)
  }

  /// Grow the point set until the hull's convergence radius reaches the
  /// generation radius. Returns the number of points drawn.
  ///
  /// # Errors
  /// Fails if the source produces a non-finite point. The batch holding it is
  /// discarded, leaving the points and hull as they were before that batch.
  pub fn run_growth_phase(&mut self) -> Result<usize, Error> {
    self.phase = GrowthPhase::Growing;
    let policy = self.config.batch_growth;
    let mut batch = policy.first_batch();
    let mut drawn = 0;
    while self.generation_radius() > self.hull_convergence_radius() {
      self.grow(batch)?;
      drawn += batch;
      batch = policy.next_batch(batch, self.points.len());
      trace!(
        "{} points, generation radius {}, hull radius {}",
        self.points.len(),
        self.generation_radius(),
        self.hull_convergence_radius()
      );
      if self.config.snapshot_every_step {
        self.snap(SnapshotKind::Step);
      }
    }
    self.phase = GrowthPhase::Converged;
    debug!(
      "converged after {} new points: {} points, {} hull vertices, radius {}",
      drawn,
      self.points.len(),
      self.hull.len(),
      self.hull_convergence_radius()
    );
    Ok(drawn)
  }

  /// Remove every current hull vertex from the point set and recompute the
  /// hull over what is left. Returns the removed points in hull order.
  ///
  /// Points are removed by position, so a duplicate of a hull vertex that is
  /// not itself on the hull stays in the set.
  ///
  /// # Errors
  /// Fails if the remaining set holds a non-finite point. The controller is
  /// left unchanged.
  pub fn prune_hull_vertices(&mut self) -> Result<Vec<Point>, Error> {
    let mut on_hull = vec![false; self.points.len()];
    for &idx in &self.hull {
      on_hull[idx] = true;
    }
    let removed: Vec<Point> = self.hull.iter().map(|&idx| self.points[idx]).collect();
    let remaining: PointSet = self
      .points
      .iter()
      .zip(&on_hull)
      .filter(|&(_, &on_hull)| !on_hull)
      .map(|(pt, _)| *pt)
      .collect();

    let hull = compute_hull(&remaining)?;
    self.metrics = HullMetrics::new(&remaining, &hull, self.config.angle_convention);
    self.points = remaining;
    self.hull = hull;
    self.phase = GrowthPhase::Pruned;
    debug!(
      "pruned {} hull vertices, {} points remain",
      removed.len(),
      self.points.len()
    );
    Ok(removed)
  }

  /// One full cycle: grow to convergence, then prune the hull. Unless
  /// `stop_after_prune` is set, grow again so the cycle ends converged.
  pub fn iterate(&mut self) -> Result<(), Error> {
    self.cycle += 1;
    self.snap(SnapshotKind::CycleStart);
    self.run_growth_phase()?;
    self.snap(SnapshotKind::Converged);
    self.prune_hull_vertices()?;
    self.snap(SnapshotKind::Pruned);
    if !self.config.stop_after_prune {
      self.run_growth_phase()?;
      self.snap(SnapshotKind::Converged);
    }
    Ok(())
  }

  pub fn run_cycles(&mut self, cycles: usize) -> Result<(), Error> {
    for _ in 0..cycles {
      self.iterate()?;
    }
    Ok(())
  }

  // Appends `count` points and recomputes the hull. On error the new points
  // are dropped again; the source stays advanced.
  fn grow(&mut self, count: usize) -> Result<(), Error> {
    let len = self.points.len();
    self.points.reserve(count);
    for _ in 0..count {
      self.points.push(self.source.next_point());
    }
    self.samples_drawn += count;
    match compute_hull(&self.points) {
      Ok(hull) => {
        self.metrics = HullMetrics::new(&self.points, &hull, self.config.angle_convention);
        self.hull = hull;
        Ok(())
      }
      Err(err) => {
        self.points.truncate(len);
        Err(err)
      }
    }
  }

  fn snap(&mut self, kind: SnapshotKind) {
    if self.points.is_empty() {
      debug!("nothing to snapshot in cycle {}", self.cycle);
      return;
    }
    let snapshot = Snapshot {
      cycle: self.cycle,
      kind,
      points: &self.points,
      hull: &self.hull,
      generation_radius: self.source.current_generation_radius(),
      hull_convergence_radius: self.metrics.hull_convergence_radius,
    };
    self.observer.snapshot(&snapshot);
  }
}

impl<S: PointSource, O> GrowthController<S, O> {
  pub fn generation_radius(&self) -> f64 {
    self.source.current_generation_radius()
  }
}

impl<S, O> GrowthController<S, O> {
  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn hull(&self) -> &[usize] {
    &self.hull
  }

  pub fn hull_points(&self) -> impl Iterator<Item = &Point> + '_ {
    self.hull.iter().map(move |&idx| &self.points[idx])
  }

  pub fn metrics(&self) -> &HullMetrics {
    &self.metrics
  }

  pub fn hull_convergence_radius(&self) -> f64 {
    self.metrics.hull_convergence_radius
  }

  pub fn phase(&self) -> GrowthPhase {
    self.phase
  }

  /// Number of cycles started by [`GrowthController::iterate`].
  pub fn cycle(&self) -> usize {
    self.cycle
  }

  /// Points drawn from the source so far, pruned ones included.
  pub fn samples_drawn(&self) -> usize {
    self.samples_drawn
  }

  pub fn config(&self) -> &GrowthConfig {
    &self.config
  }

  pub fn source(&self) -> &S {
    &self.source
  }

  pub fn observer(&self) -> &O {
    &self.observer
  }

  pub fn observer_mut(&mut self) -> &mut O {
    &mut self.observer
  }

  pub fn into_parts(self) -> (S, O, PointSet) {
    (self.source, self.observer, self.points)
  }
}
