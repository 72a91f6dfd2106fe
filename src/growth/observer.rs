use ordered_float::OrderedFloat;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
  /// A cycle is about to grow the point set.
  CycleStart,
  /// A batch was appended during a growth phase.
  Step,
  /// A growth phase ended; the hull is complete.
  Converged,
  /// The converged hull's vertices were removed.
  Pruned,
}

/// The state of a growth run at one moment, borrowed from the controller.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
  pub cycle: usize,
  pub kind: SnapshotKind,
  pub points: &'a [Point],
  pub hull: &'a [usize],
  pub generation_radius: f64,
  pub hull_convergence_radius: f64,
}

impl<'a> Snapshot<'a> {
  pub fn hull_points(&self) -> impl Iterator<Item = &'a Point> + 'a {
    let points = self.points;
    let hull = self.hull;
    hull.iter().map(move |&idx| &points[idx])
  }

  /// Largest distance from the origin to any point. Drawing the points scaled
  /// by `1 / extent` fits them in the unit disk.
  pub fn extent(&self) -> Option<f64> {
    self
      .points
      .iter()
      .map(|pt| OrderedFloat(pt.norm()))
      .max()
      .map(OrderedFloat::into_inner)
  }
}

/// Receives snapshots as a growth run progresses. Rendering, export and the
/// like live behind this trait.
pub trait Observer {
  fn snapshot(&mut self, snapshot: &Snapshot<'_>);
}

impl Observer for () {
  fn snapshot(&mut self, _snapshot: &Snapshot<'_>) {}
}

impl<F> Observer for F
where
  F: FnMut(&Snapshot<'_>),
{
  fn snapshot(&mut self, snapshot: &Snapshot<'_>) {
    self(snapshot)
  }
}
