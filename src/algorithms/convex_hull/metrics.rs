use ordered_float::OrderedFloat;
use std::f64::consts::TAU;

use crate::data::Point;

/// Which turn angle between consecutive hull vertices bounds the convergence radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleConvention {
  /// Widest angular gap. This is the most conservative bound.
  #[default]
  Max,
  /// Narrowest angular gap.
  Min,
}

/// Measurements taken on a hull to decide whether growth has converged.
///
/// Hull vertices are read as vectors from the origin. If every vertex is at
/// least `min_side_length` away from the origin and consecutive vertices are
/// at most `max_turn_angle` apart, no hull edge passes closer to the origin
/// than `min_side_length * cos(max_turn_angle / 2)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HullMetrics {
  /// Smallest distance from the origin to a hull vertex.
  pub min_side_length: f64,
  /// Largest turn angle between consecutive hull vertices, wrapping around.
  pub max_turn_angle: f64,
  /// Smallest turn angle between consecutive hull vertices, wrapping around.
  pub min_turn_angle: f64,
  pub hull_convergence_radius: f64,
}

impl HullMetrics {
  /// Metrics of the hull `hull` over `points`. Hulls with fewer than three
  /// vertices enclose nothing and measure all zeroes.
  pub fn new(points: &[Point], hull: &[usize], convention: AngleConvention) -> HullMetrics {
    if hull.len() < 3 {
      return HullMetrics::default();
    }
    let vertices: Vec<Point> = hull.iter().map(|&idx| points[idx]).collect();
    let min_side_length = min_side_length(&vertices).unwrap_or(0.0);
    let max_turn_angle = max_turn_angle(&vertices).unwrap_or(0.0);
    let min_turn_angle = min_turn_angle(&vertices).unwrap_or(0.0);
    let angle = match convention {
      AngleConvention::Max => max_turn_angle,
      AngleConvention::Min => min_turn_angle,
    };
    HullMetrics {
      min_side_length,
      max_turn_angle,
      min_turn_angle,
      hull_convergence_radius: convergence_radius(min_side_length, angle),
    }
  }
}

pub fn convergence_radius(min_side_length: f64, turn_angle: f64) -> f64 {
  min_side_length * (turn_angle / 2.0).cos()
}

/// Clockwise angle, in `[0, 2π)`, from `to` back to `from`, both read as
/// vectors from the origin. For consecutive vertices of a counter-clockwise
/// hull this is the angular gap between them.
pub fn turn_angle(from: &Point, to: &Point) -> f64 {
  let mut angle = from.x_coord().atan2(from.y_coord()) - to.x_coord().atan2(to.y_coord());
  if angle < 0.0 {
    angle += TAU;
  }
  if angle >= TAU {
    angle -= TAU;
  }
  angle
}

pub fn min_side_length(vertices: &[Point]) -> Option<f64> {
  vertices
    .iter()
    .map(|pt| OrderedFloat(pt.norm()))
    .min()
    .map(OrderedFloat::into_inner)
}

pub fn max_turn_angle(vertices: &[Point]) -> Option<f64> {
  turn_angles(vertices).max().map(OrderedFloat::into_inner)
}

pub fn min_turn_angle(vertices: &[Point]) -> Option<f64> {
  turn_angles(vertices).min().map(OrderedFloat::into_inner)
}

fn turn_angles(vertices: &[Point]) -> impl Iterator<Item = OrderedFloat<f64>> + '_ {
  let next = vertices.iter().cycle().skip(1);
  vertices
    .iter()
    .zip(next)
    .map(|(from, to)| OrderedFloat(turn_angle(from, to)))
}
