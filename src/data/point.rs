use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::ops::Index;

use crate::{Error, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Point {
  pub array: [f64; 2],
}

// Random sampling in the unit square.
impl Distribution<Point> for Standard {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl Point {
  pub const fn new(array: [f64; 2]) -> Point {
    Point { array }
  }

  /// # Errors
  ///
  /// Returns [`Error::NonFiniteCoordinate`] if any coordinate is NaN or infinite.
  pub fn try_new(array: [f64; 2]) -> Result<Point, Error> {
    let pt = Point::new(array);
    if pt.is_finite() {
      Ok(pt)
    } else {
      Err(Error::NonFiniteCoordinate)
    }
  }

  /// Point at `radius` from the origin in the direction `angle` (radians,
  /// counter-clockwise from the positive x-axis).
  pub fn from_polar(angle: f64, radius: f64) -> Point {
    Point::new([angle.cos() * radius, angle.sin() * radius])
  }

  pub fn origin() -> Point {
    Point::new([0.0, 0.0])
  }

  pub fn x_coord(&self) -> f64 {
    self.array[0]
  }

  pub fn y_coord(&self) -> f64 {
    self.array[1]
  }

  pub fn is_finite(&self) -> bool {
    self.array.iter().all(|c| c.is_finite())
  }

  /// Distance from the origin.
  pub fn norm(&self) -> f64 {
    self.x_coord().hypot(self.y_coord())
  }

  pub fn orient(&self, q: &Point, r: &Point) -> Orientation {
    Orientation::new(self, q, r)
  }
}

impl Index<usize> for Point {
  type Output = f64;
  fn index(&self, key: usize) -> &f64 {
    self.array.index(key)
  }
}

impl From<(f64, f64)> for Point {
  fn from(point: (f64, f64)) -> Point {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl From<[f64; 2]> for Point {
  fn from(array: [f64; 2]) -> Point {
    Point { array }
  }
}
