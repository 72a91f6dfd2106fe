use ordered_float::OrderedFloat;

use crate::data::{HullIndexList, Point};
use crate::{Error, Orientation};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Every index is unique and the hull is traced counter-clockwise.
//    No points are outside the resulting hull.
//    Only extreme points are kept: collinear and duplicate points are dropped.
/// $O(n^2)$ worst case, Graham scan over positions of a point set.
///
/// Returns the positions of the hull vertices in counter-clockwise order,
/// starting at the pivot (the leftmost point, lowest among the leftmost).
/// Sets with fewer than three points are their own hull and come back in
/// input order.
///
/// Candidates are put in angular order around the pivot with an insertion
/// sort over signed areas instead of computed angles.
///
/// # Errors
/// Returns [`Error::NonFinitePoint`] if any point has a NaN or infinite
/// coordinate.
///
/// # Examples
///
/// ```rust
/// # use hullgrowth::algorithms::compute_hull;
/// # use hullgrowth::data::Point;
/// let line = vec![
///   Point::new([0.0, 0.0]),
///   Point::new([1.0, 0.0]),
///   Point::new([2.0, 0.0]),
/// ];
/// assert_eq!(compute_hull(&line).unwrap(), vec![0, 2]);
///
/// let empty: Vec<Point> = vec![];
/// assert!(compute_hull(&empty).unwrap().is_empty());
/// ```
pub fn compute_hull(points: &[Point]) -> Result<HullIndexList, Error> {
  if let Some(idx) = points.iter().position(|pt| !pt.is_finite()) {
    return Err(Error::NonFinitePoint(idx));
  }
  if points.len() < 3 {
    return Ok((0..points.len()).collect());
  }

  let mut order: Vec<usize> = (0..points.len()).collect();
  order.swap(0, pivot(points));
  let origin = &points[order[0]];

  for i in 2..order.len() {
    let mut j = i;
    while j > 1 && precedes(origin, &points[order[j]], &points[order[j - 1]]) {
      order.swap(j, j - 1);
      j -= 1;
    }
  }

  let mut hull = Vec::with_capacity(order.len());
  hull.push(order[0]);
  hull.push(order[1]);
  for &idx in &order[2..] {
    while hull.len() > 1 {
      let p1 = &points[hull[hull.len() - 2]];
      let p2 = &points[hull[hull.len() - 1]];
      match p1.orient(p2, &points[idx]) {
        Orientation::CounterClockWise => break,
        Orientation::ClockWise | Orientation::CoLinear => {
          hull.pop();
        }
      }
    }
    hull.push(idx);
  }
  Ok(hull)
}

// Smallest x, then smallest y. First occurrence wins on exact ties.
// O(n)
fn pivot(points: &[Point]) -> usize {
  points
    .iter()
    .enumerate()
    .min_by_key(|(_, pt)| lexicographic(pt))
    .map_or(0, |(idx, _)| idx)
}

// `candidate` goes before `previous` if the walk origin -> previous -> candidate
// turns clockwise. Points on the same ray from the origin are ordered nearest first.
// The origin is the lexicographic minimum, so along any ray from it the
// lexicographic order of coordinates is the order of distance. No squaring, no
// overflow.
fn precedes(origin: &Point, candidate: &Point, previous: &Point) -> bool {
  match origin.orient(previous, candidate) {
    Orientation::ClockWise => true,
    Orientation::CounterClockWise => false,
    Orientation::CoLinear => lexicographic(candidate) < lexicographic(previous),
  }
}

fn lexicographic(pt: &Point) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
  (OrderedFloat(pt.x_coord()), OrderedFloat(pt.y_coord()))
}
