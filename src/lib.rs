// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls of planar point sets, and a controller that grows a point
//! cloud until its hull is stable with respect to a shrinking sampling radius.
//!
//! ```rust
//! # use hullgrowth::algorithms::compute_hull;
//! # use hullgrowth::data::Point;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([1.0, 0.0]),
//!   Point::new([1.0, 1.0]),
//!   Point::new([0.0, 1.0]),
//!   Point::new([0.5, 0.5]),
//! ];
//! assert_eq!(compute_hull(&square).unwrap(), vec![0, 1, 2, 3]);
//! ```

pub mod algorithms;
pub mod data;
pub mod growth;
mod orientation;

pub use orientation::{signed_area, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A coordinate was NaN or infinite.
  NonFiniteCoordinate,
  /// The point at this position of the input set has a NaN or infinite coordinate.
  NonFinitePoint(usize),
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::NonFiniteCoordinate => write!(f, "Non-finite coordinate"),
      Error::NonFinitePoint(idx) => write!(f, "Point {} has a non-finite coordinate", idx),
    }
  }
}

impl std::error::Error for Error {}

#[cfg(test)]
pub mod testing;
