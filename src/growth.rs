//! Growing a point cloud until its convex hull is stable.
//!
//! A [`GrowthController`] draws points from a [`PointSource`] in batches of
//! non-decreasing size until the hull's convergence radius reaches the
//! source's generation radius, then optionally strips the hull vertices to
//! seed the next phase. Progress is reported to an [`Observer`].
mod config;
mod controller;
mod observer;
mod source;

pub use config::{BatchGrowth, GrowthConfig};
pub use controller::{GrowthController, GrowthPhase};
pub use observer::{Observer, Snapshot, SnapshotKind};
pub use source::{GoldenAngleSource, PointSource, RandomSource};
