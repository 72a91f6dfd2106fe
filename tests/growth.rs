mod growth {
  use hullgrowth::algorithms::{compute_hull, AngleConvention};
  use hullgrowth::data::Point;
  use hullgrowth::growth::*;
  use hullgrowth::Error;

  use rand::SeedableRng;

  #[derive(Default)]
  struct Recorder {
    kinds: Vec<SnapshotKind>,
    cycles: Vec<usize>,
    hulls: Vec<(Vec<Point>, Vec<usize>)>,
  }

  impl Observer for Recorder {
    fn snapshot(&mut self, snapshot: &Snapshot<'_>) {
      self.kinds.push(snapshot.kind);
      self.cycles.push(snapshot.cycle);
      self
        .hulls
        .push((snapshot.points.to_vec(), snapshot.hull.to_vec()));
    }
  }

  fn boundaries(kinds: &[SnapshotKind]) -> Vec<SnapshotKind> {
    kinds
      .iter()
      .copied()
      .filter(|kind| *kind != SnapshotKind::Step)
      .collect()
  }

  #[test]
  fn golden_angle_converges() -> Result<(), Error> {
    let mut controller = GrowthController::new(GoldenAngleSource::new(), GrowthConfig::default())?;
    controller.run_growth_phase()?;
    assert!(controller.samples_drawn() < 10_000);
    assert!(controller.hull_convergence_radius() >= controller.generation_radius());
    assert_eq!(controller.phase(), GrowthPhase::Converged);
    Ok(())
  }

  #[test]
  fn every_policy_converges() -> Result<(), Error> {
    let policies = [
      BatchGrowth::Linear { step: 1 },
      BatchGrowth::Linear { step: 0 },
      BatchGrowth::Doubling,
      BatchGrowth::Proportional { divisor: 5 },
    ];
    for &batch_growth in policies.iter() {
      let config = GrowthConfig {
        batch_growth,
        ..GrowthConfig::default()
      };
      let mut controller = GrowthController::new(RandomSource::seed_from_u64(11), config)?;
      for _ in 0..3 {
        controller.run_growth_phase()?;
        assert!(controller.hull_convergence_radius() >= controller.generation_radius());
        controller.prune_hull_vertices()?;
      }
    }
    Ok(())
  }

  #[test]
  fn min_angle_convention_converges() -> Result<(), Error> {
    let config = GrowthConfig {
      angle_convention: AngleConvention::Min,
      ..GrowthConfig::default()
    };
    let mut controller = GrowthController::new(RandomSource::seed_from_u64(2), config)?;
    controller.run_cycles(3)?;
    assert_eq!(controller.cycle(), 3);
    Ok(())
  }

  #[test]
  fn cycle_snapshots() -> Result<(), Error> {
    let mut controller = GrowthController::with_observer(
      RandomSource::seed_from_u64(5),
      Recorder::default(),
      GrowthConfig::default(),
    )?;
    controller.run_cycles(4)?;
    let recorder = controller.observer();
    let expected: Vec<SnapshotKind> = (0..4)
      .flat_map(|_| {
        vec![
          SnapshotKind::CycleStart,
          SnapshotKind::Converged,
          SnapshotKind::Pruned,
        ]
      })
      .collect();
    assert_eq!(recorder.kinds, expected);
    assert_eq!(recorder.cycles, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    assert_eq!(controller.phase(), GrowthPhase::Pruned);
    Ok(())
  }

  #[test]
  fn step_snapshots() -> Result<(), Error> {
    let config = GrowthConfig {
      snapshot_every_step: true,
      stop_after_prune: false,
      ..GrowthConfig::default()
    };
    let mut controller = GrowthController::with_observer(
      RandomSource::seed_from_u64(8),
      Recorder::default(),
      config,
    )?;
    controller.iterate()?;
    let recorder = controller.observer();
    assert_eq!(
      boundaries(&recorder.kinds),
      vec![
        SnapshotKind::CycleStart,
        SnapshotKind::Converged,
        SnapshotKind::Pruned,
        SnapshotKind::Converged,
      ]
    );
    assert_eq!(controller.phase(), GrowthPhase::Converged);
    // Seeds plus at least one point per batch.
    let total_steps = recorder.kinds.len() - 4;
    assert!(controller.samples_drawn() >= 10 + total_steps);
    Ok(())
  }

  #[test]
  fn snapshots_carry_current_hull() -> Result<(), Error> {
    let mut controller = GrowthController::with_observer(
      GoldenAngleSource::new(),
      Recorder::default(),
      GrowthConfig {
        snapshot_every_step: true,
        ..GrowthConfig::default()
      },
    )?;
    controller.run_cycles(2)?;
    for (points, hull) in controller.observer().hulls.iter() {
      assert_eq!(&compute_hull(points)?, hull);
    }
    Ok(())
  }

  #[test]
  fn pruned_points_leave_the_set() -> Result<(), Error> {
    let mut controller = GrowthController::new(
      RandomSource::new(rand::rngs::SmallRng::seed_from_u64(21)),
      GrowthConfig::default(),
    )?;
    controller.run_growth_phase()?;
    let before = controller.points().to_vec();
    let hull = controller.hull().to_vec();
    let removed = controller.prune_hull_vertices()?;
    assert_eq!(removed.len(), hull.len());
    assert_eq!(controller.points().len(), before.len() - hull.len());
    let survivors: Vec<Point> = before
      .iter()
      .enumerate()
      .filter(|(idx, _)| !hull.contains(idx))
      .map(|(_, pt)| *pt)
      .collect();
    assert_eq!(controller.points(), &survivors[..]);
    let (source, (), points) = controller.into_parts();
    assert_eq!(source.generated(), points.len() + removed.len());
    Ok(())
  }

  #[test]
  fn shared_source() -> Result<(), Error> {
    let mut source = GoldenAngleSource::new();
    {
      let mut controller = GrowthController::new(&mut source, GrowthConfig::default())?;
      controller.run_growth_phase()?;
    }
    assert!(source.generated() >= 10);
    Ok(())
  }
}
