use crate::algorithms::AngleConvention;

/// How many points the next batch draws, given the size of the last one.
///
/// Every policy starts at one point and never shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchGrowth {
  /// Each batch is `step` points larger than the last.
  Linear { step: usize },
  /// Each batch is twice the last.
  Doubling,
  /// Each batch grows by `1 + points / divisor`, where `points` is the size of
  /// the point set after the last batch.
  Proportional { divisor: usize },
}

impl Default for BatchGrowth {
  fn default() -> Self {
    BatchGrowth::Proportional { divisor: 5 }
  }
}

impl BatchGrowth {
  pub fn first_batch(&self) -> usize {
    1
  }

  pub fn next_batch(&self, current: usize, points: usize) -> usize {
    match *self {
      BatchGrowth::Linear { step } => current.saturating_add(step),
      BatchGrowth::Doubling => current.saturating_mul(2),
      BatchGrowth::Proportional { divisor } => current
        .saturating_add(points / divisor.max(1))
        .saturating_add(1),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthConfig {
  /// Points drawn before the first hull is computed.
  pub seed_points: usize,
  pub batch_growth: BatchGrowth,
  pub angle_convention: AngleConvention,
  /// End a cycle right after pruning. Otherwise the cycle grows again and
  /// ends with a converged hull over the remaining points.
  pub stop_after_prune: bool,
  /// Report a snapshot after every batch, not only at phase boundaries.
  pub snapshot_every_step: bool,
}

impl Default for GrowthConfig {
  fn default() -> Self {
    GrowthConfig {
      seed_points: 10,
      batch_growth: BatchGrowth::default(),
      angle_convention: AngleConvention::default(),
      stop_after_prune: true,
      snapshot_every_step: false,
    }
  }
}
