// Strategies for points and point sets.
use crate::data::Point;

use proptest::prelude::*;

/// Finite points in a box large enough to exercise cancellation in turn tests.
pub fn any_point() -> impl Strategy<Value = Point> {
  (-1000.0..1000.0f64, -1000.0..1000.0f64).prop_map(Point::from)
}

/// Points on a small integer grid. Drawing a few dozen of these produces
/// plenty of duplicates and collinear triples.
pub fn grid_point() -> impl Strategy<Value = Point> {
  (-4i8..=4, -4i8..=4).prop_map(|(x, y)| Point::new([f64::from(x), f64::from(y)]))
}

/// Points in the closed unit disk, as produced by the point sources.
pub fn disk_point() -> impl Strategy<Value = Point> {
  (0.0..std::f64::consts::TAU, 0.0..=1.0f64)
    .prop_map(|(angle, radius)| Point::from_polar(angle, radius))
}
