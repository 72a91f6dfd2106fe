use crate::data::Point;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The sign is that of [`signed_area`] but is evaluated with an adaptive
  /// exact predicate, so `CoLinear` is only reported for triples that are
  /// collinear in real arithmetic.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use hullgrowth::data::Point;
  /// # use hullgrowth::Orientation;
  /// let p1 = Point::new([ 0.0, 0.0 ]);
  /// let p2 = Point::new([ 0.0, 1.0 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0.0, 2.0 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1.0, 2.0 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1.0, 2.0 ])).is_cw());
  /// ```
  pub fn new(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let orient = if [p1, p2, p3].iter().any(|pt| is_huge(pt)) {
      // Scaling by a power of two is exact and keeps the sign.
      let scale = |pt: &Point| pt.array.map(|c| c * DOWNSCALE);
      geometry_predicates::predicates::orient2d(scale(p1), scale(p2), scale(p3))
    } else {
      geometry_predicates::predicates::orient2d(p1.array, p2.array, p3.array)
    };
    if orient > 0.0 {
      Orientation::CounterClockWise
    } else if orient < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }
}

// 2^500. Beyond this the products inside the predicate can overflow.
const HUGE: f64 = 3.273_390_607_896_142e150;
// 2^-600
const DOWNSCALE: f64 = 2.409_919_865_102_884e-181;

fn is_huge(pt: &Point) -> bool {
  pt.array.iter().any(|c| c.abs() > HUGE)
}

/// Twice the signed area of the triangle `(a, b, c)`, in plain floating point.
///
/// Positive when `a -> b -> c` turns counter-clockwise, negative when it turns
/// clockwise, zero when the points are collinear.
pub fn signed_area(a: &Point, b: &Point, c: &Point) -> f64 {
  (b.x_coord() - a.x_coord()) * (c.y_coord() - b.y_coord())
    - (b.y_coord() - a.y_coord()) * (c.x_coord() - b.x_coord())
}
