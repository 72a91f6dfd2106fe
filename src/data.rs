pub(crate) mod point;

pub use point::Point;

/// Points in insertion order. Duplicates are allowed; positions are used as indices.
pub type PointSet = Vec<Point>;

/// Positions into a [`PointSet`] tracing a convex hull counter-clockwise.
pub type HullIndexList = Vec<usize>;
