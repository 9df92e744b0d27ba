//! End-to-end scenario runs: solver and classifier through a schedule.

use geo::{LineString, Polygon};
use theis_rs::{
    AquiferParameters, Area, AreaContext, ObservationGrid, PumpingSchedule, RasterField2D,
    RiskCategory, RiskClassifier, RiskPolygon, RiskType, ScenarioRunner, SolverConfig, StepIndex,
    SuperpositionSolver, Well, WellField, WellIndex, WellUsage, WellUsageTable,
};

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
    Polygon::new(
        LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]),
        vec![],
    )
}

/// Venice-style scenario: one dewatering well, a residential block nearby,
/// a shallow water table. Drawdown lowers the water table under the block
/// until the basement-flooding flag clears.
#[test]
fn test_dewatering_clears_basement_flag() {
    let grid = ObservationGrid::uniform_rectangle(0.0, 1000.0, 0.0, 1000.0, 21, 21);
    // Ground at 404 ft, water table initially 1 ft below grade: every
    // residential block starts in the basement-flooding band
    let ground = RasterField2D::filled((21, 21), 404.0);
    let initial_head = RasterField2D::filled((21, 21), 403.0);

    let runner = ScenarioRunner::new(
        grid,
        AquiferParameters::new(250.0, 2e-4, 500.0).unwrap(),
        WellField::from_wells(vec![Well::new("DW-1", 500.0, 500.0)]),
        AreaContext::Venice,
        PumpingSchedule::new(vec![1.0, 24.0, 168.0]).unwrap(),
        SuperpositionSolver::new(SolverConfig::default()),
        RiskClassifier::new(Area::Venice),
    );

    let block = RiskPolygon::new(RiskType::Residential, square(400.0, 400.0, 600.0, 600.0))
        .with_name("Block 4");

    let outcome = runner
        .run(initial_head, &ground, std::slice::from_ref(&block))
        .unwrap();

    // Early in pumping the cone has not developed: still flagged
    assert_eq!(
        outcome.steps[0].assignments[0],
        Some(RiskCategory::BasementFlooding)
    );

    // After a week of pumping the water table under the block has dropped
    // below the basement floor
    assert_eq!(outcome.steps[2].assignments[0], None);

    // Drawdown grows with pumping time
    let record = &outcome.record;
    let early = record.get(WellIndex::ZERO, StepIndex::new(0));
    let late = record.get(WellIndex::ZERO, StepIndex::new(2));
    println!("isolated max drawdown: {:.2} ft -> {:.2} ft", early, late);
    assert!(late > early);
}

/// East St. Louis-style scenario: per-well activation from the usage
/// table, with an out-of-service well recorded as NaN.
#[test]
fn test_usage_table_drives_activation() {
    let grid = ObservationGrid::uniform_rectangle(0.0, 1000.0, 0.0, 1000.0, 21, 21);
    let ground = RasterField2D::filled((21, 21), 404.0);
    let initial_head = RasterField2D::filled((21, 21), 395.0);

    let context = AreaContext::EastStLouis {
        usage: WellUsageTable::from_entries(vec![
            WellUsage::new("RW-1", 1200.0, true),
            WellUsage::new("RW-2", 900.0, false),
        ]),
        analysis_date: None,
    };

    let runner = ScenarioRunner::new(
        grid,
        AquiferParameters::new(250.0, 2e-4, 0.0).unwrap(),
        WellField::from_wells(vec![
            Well::new("RW-1", 300.0, 500.0),
            Well::new("RW-2", 700.0, 500.0),
        ]),
        context,
        PumpingSchedule::new(vec![24.0, 72.0, -24.0]).unwrap(),
        SuperpositionSolver::new(SolverConfig::default()),
        RiskClassifier::new(Area::EastStLouis),
    );

    let park = RiskPolygon::new(RiskType::Open, square(100.0, 100.0, 300.0, 300.0));
    let outcome = runner.run(initial_head, &ground, &[park]).unwrap();

    for si in 0..3 {
        let step = StepIndex::new(si);
        assert!(
            outcome.record.get(WellIndex::new(0), step).is_finite(),
            "in-service well must be recorded at step {}",
            si
        );
        assert!(
            outcome.record.get(WellIndex::new(1), step).is_nan(),
            "out-of-service well must be skipped at step {}",
            si
        );
    }

    let stats = outcome.record.statistics();
    assert_eq!(stats.recorded, 3);
    assert_eq!(stats.skipped, 3);
}

/// The recovery phase keeps residual drawdown: the water table climbs back
/// toward the initial condition but does not overshoot it.
#[test]
fn test_recovery_relaxes_toward_initial_head() {
    let grid = ObservationGrid::uniform_rectangle(0.0, 1000.0, 0.0, 1000.0, 21, 21);
    let ground = RasterField2D::filled((21, 21), 404.0);
    let initial = 400.0;
    let initial_head = RasterField2D::filled((21, 21), initial);

    let runner = ScenarioRunner::new(
        grid,
        AquiferParameters::new(250.0, 2e-4, 400.0).unwrap(),
        WellField::from_wells(vec![Well::new("DW-1", 500.0, 500.0)]),
        AreaContext::Venice,
        PumpingSchedule::new(vec![72.0, -6.0, -72.0]).unwrap(),
        SuperpositionSolver::new(SolverConfig::default()),
        RiskClassifier::new(Area::Venice),
    );

    let probe = grid_probe();
    let mut water_levels = Vec::new();
    runner
        .run_with_callback(
            initial_head,
            &ground,
            &[RiskPolygon::new(RiskType::Open, square(100.0, 100.0, 300.0, 300.0))],
            |state, _, _| water_levels.push(state.water_table().get(probe)),
        )
        .unwrap();

    let pumping = water_levels[0];
    let early_recovery = water_levels[1];
    let late_recovery = water_levels[2];

    println!(
        "water table at probe: pumping {:.3}, recovery {:.3} -> {:.3}",
        pumping, early_recovery, late_recovery
    );

    // Pumping depressed the table below the initial head
    assert!(pumping < initial);
    // Recovery climbs back toward (but not past) the initial head
    assert!(early_recovery > pumping);
    assert!(late_recovery > early_recovery);
    assert!(late_recovery < initial);
}

/// Probe node a few cells off the well.
fn grid_probe() -> usize {
    let grid = ObservationGrid::uniform_rectangle(0.0, 1000.0, 0.0, 1000.0, 21, 21);
    grid.index(13, 10)
}
