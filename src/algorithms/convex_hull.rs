pub mod graham_scan;
pub mod metrics;
