pub mod convex_hull;

#[doc(inline)]
pub use convex_hull::graham_scan::compute_hull;

#[doc(inline)]
pub use convex_hull::metrics::{AngleConvention, HullMetrics};
