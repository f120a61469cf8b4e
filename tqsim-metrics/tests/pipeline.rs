//! End-to-end runs through engine and statistics

use tqsim_core::{Simulation, SimulationConfig};
use tqsim_metrics::{Mm1Model, SimulationResult};

fn run_and_summarize(config: SimulationConfig) -> SimulationResult {
    let mut sim = Simulation::from_config(config).expect("valid config");
    let report = sim.run().expect("run succeeds");
    SimulationResult::compute(&report, sim.history())
}

#[test]
fn statistics_stay_in_bounds_across_seeds() {
    for seed in [0, 1, 2, 42, 99, 1234, 0xDEAD_BEEF] {
        let config = SimulationConfig::new(vec![10.0, 12.0, 8.0, 15.0, 20.0], 15.0, 40)
            .with_seed(seed)
            .with_arrival_count(20);
        let result = run_and_summarize(config);

        assert!(
            (0.0..=1.0).contains(&result.server_utilization),
            "seed {seed}: utilization {} out of range",
            result.server_utilization
        );
        assert!(
            result.avg_customers_in_system >= 0.0,
            "seed {seed}: negative average occupancy"
        );
    }
}

#[test]
fn zero_event_budget_yields_zero_statistics() {
    let config = SimulationConfig::new(vec![10.0, 12.0], 15.0, 0).with_seed(5);
    let result = run_and_summarize(config);

    assert_eq!(result.server_utilization, 0.0);
    assert_eq!(result.avg_customers_in_system, 0.0);
    assert_eq!(result.final_customers_in_system, 0);
    assert!(!result.server_busy);
}

#[test]
fn drained_run_statistics_are_consistent() {
    // Budget far beyond the schedulable events: everyone gets served.
    let config = SimulationConfig::new(vec![10.0, 12.0, 8.0], 5.0, 1000)
        .with_seed(17)
        .with_arrival_count(12);
    let result = run_and_summarize(config);

    assert_eq!(result.final_customers_in_system, 0);
    assert_eq!(result.final_queue_length, 0);
    assert!(!result.server_busy);
    assert!(result.server_utilization > 0.0);
    assert!(result.avg_customers_in_system > 0.0);
}

#[test]
fn unstable_regime_warns_but_run_stays_valid() {
    // lambda = 1/10 exceeds mu = 1/15: rho = 1.5.
    let config = SimulationConfig::new(vec![10.0], 15.0, 30)
        .with_seed(8)
        .with_arrival_count(15);
    let model = Mm1Model::from_config(&config);

    let warning = model.metrics().unwrap_err();
    assert!((warning.rho - 1.5).abs() < 1e-12);

    // A finite run is always empirically bounded, warning or not.
    let result = run_and_summarize(config);
    assert!((0.0..=1.0).contains(&result.server_utilization));
    assert!(result.avg_customers_in_system >= 0.0);
    assert!(result.total_time.as_units() > 0.0);
}

#[test]
fn stable_regime_produces_both_views() {
    // lambda = 1/20 against mu = 1/10: rho = 0.5.
    let config = SimulationConfig::new(vec![20.0], 10.0, 60)
        .with_seed(13)
        .with_arrival_count(30);
    let model = Mm1Model::from_config(&config);

    let theory = model.metrics().unwrap();
    assert!((theory.rho - 0.5).abs() < 1e-12);
    assert!((theory.l - 1.0).abs() < 1e-12);

    let result = run_and_summarize(config);
    assert!((0.0..=1.0).contains(&result.server_utilization));
}
