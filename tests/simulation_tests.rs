mod support;

use approx::assert_relative_eq;
use epicycles::{
    AngleMode,
    clock::SimulationClock,
    compositor,
    float_types::Real,
    simulator::{DEFAULT_ITERATIONS, Simulator},
    trace::PathTrace,
};
use support::{points_approx_eq, sample_chain, step};

#[test]
fn default_iterations_is_64() {
    assert_eq!(DEFAULT_ITERATIONS, 64);
    assert_eq!(Simulator::default().iterations(), 64);
}

#[test]
fn time_advance_is_independent_of_iterations() {
    let chain = sample_chain();
    let delta: Real = 0.125;

    for iterations in [1, 2, 7, 64, 500] {
        let simulator = Simulator::new(iterations, AngleMode::Chained);
        let mut clock = SimulationClock::new(0.0, 3.0);
        let mut trace = PathTrace::new();
        trace.enable();

        let report = simulator.step_frame(&chain, &mut clock, &mut trace, delta);

        assert_relative_eq!(clock.time(), delta * 3.0, epsilon = 1e-4);
        assert_eq!(report.sub_steps, iterations);
        assert_eq!(report.samples_recorded, iterations);
        assert_eq!(trace.len(), iterations);
    }
}

#[test]
fn no_samples_when_not_recording() {
    let chain = sample_chain();
    let simulator = Simulator::default();
    let mut clock = SimulationClock::default();
    let mut trace = PathTrace::new();

    let report = simulator.step_frame(&chain, &mut clock, &mut trace, 0.5);
    assert_eq!(report.samples_recorded, 0);
    assert!(trace.is_empty());
    // The end-of-frame endpoint is still reported.
    let expected = compositor::endpoint(&chain, clock.time(), AngleMode::Chained).unwrap();
    assert_eq!(report.endpoint, Some(expected));
}

#[test]
fn samples_lie_on_the_exact_trajectory() {
    let chain = sample_chain();
    let simulator = Simulator::new(16, AngleMode::Chained);
    let mut clock = SimulationClock::new(0.0, 1.0);
    let mut trace = PathTrace::new();
    trace.enable();

    simulator.step_frame(&chain, &mut clock, &mut trace, 1.0);

    for (i, sample) in trace.points().enumerate() {
        let t = (i + 1) as Real / 16.0;
        let exact = compositor::endpoint(&chain, t, AngleMode::Chained).unwrap();
        assert!(points_approx_eq(sample, &exact, 1e-2));
    }
}

#[test]
fn final_endpoint_does_not_depend_on_iterations() {
    let chain = sample_chain();
    let mut endpoints = Vec::new();

    for iterations in [1, 3, 64] {
        let simulator = Simulator::new(iterations, AngleMode::Chained);
        let mut clock = SimulationClock::default();
        let mut trace = PathTrace::new();
        let report = simulator.step_frame(&chain, &mut clock, &mut trace, 0.75);
        endpoints.push(report.endpoint.unwrap());
    }

    for e in &endpoints[1..] {
        assert!(points_approx_eq(e, &endpoints[0], 1e-2));
    }
}

#[test]
fn iterations_below_one_are_clamped() {
    let mut simulator = Simulator::default();
    simulator.set_iterations(0);
    assert_eq!(simulator.iterations(), 1);
    simulator.set_iterations(-12);
    assert_eq!(simulator.iterations(), 1);
    assert_eq!(Simulator::new(0, AngleMode::Chained).iterations(), 1);
}

#[test]
fn large_iteration_counts_are_kept() {
    assert_eq!(Simulator::new(usize::MAX, AngleMode::Chained).iterations(), usize::MAX);
    assert_eq!(Simulator::new(1_000, AngleMode::Independent).iterations(), 1_000);
}

#[test]
fn empty_chain_advances_time_without_samples() {
    let simulator = Simulator::new(8, AngleMode::Chained);
    let mut clock = SimulationClock::default();
    let mut trace = PathTrace::new();
    trace.enable();

    let report = simulator.step_frame(&[], &mut clock, &mut trace, 1.0);
    assert_relative_eq!(report.time, 1.0, epsilon = 1e-6);
    assert_eq!(report.samples_recorded, 0);
    assert_eq!(report.endpoint, None);
    assert!(trace.is_empty());
}

#[test]
fn set_time_is_a_jump_not_a_rate_change() {
    let chain = [step(100.0, 0.0, 1.0)];
    let simulator = Simulator::new(4, AngleMode::Chained);
    let mut clock = SimulationClock::new(0.0, 2.0);
    let mut trace = PathTrace::new();

    clock.set_time(10.0);
    assert_eq!(clock.speed_multiplier(), 2.0);

    let report = simulator.step_frame(&chain, &mut clock, &mut trace, 0.5);
    assert_relative_eq!(report.time, 11.0, epsilon = 1e-5);
}

#[test]
fn negative_frame_delta_does_not_rewind() {
    let chain = [step(100.0, 0.0, 1.0)];
    let simulator = Simulator::default();
    let mut clock = SimulationClock::new(5.0, 1.0);
    let mut trace = PathTrace::new();

    simulator.step_frame(&chain, &mut clock, &mut trace, -1.0);
    assert_eq!(clock.time(), 5.0);
}
