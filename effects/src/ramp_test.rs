#![allow(clippy::float_cmp)]

use super::*;

fn run_to_end(ramp: &mut CounterRamp) -> Vec<RampTick> {
    let mut ticks = Vec::new();
    loop {
        let tick = ramp.tick();
        ticks.push(tick);
        if tick.is_finished() || ticks.len() > 10_000 {
            return ticks;
        }
    }
}

#[test]
fn ramp_steps_is_duration_over_frame() {
    assert_eq!(ramp_steps(), 125.0);
}

#[test]
fn ramp_timing_constants() {
    assert_eq!(crate::consts::RAMP_DURATION_MS, 2000);
    assert_eq!(crate::consts::RAMP_FRAME_MS, 16);
}

#[test]
fn new_ramp_derives_increment_from_target() {
    let ramp = CounterRamp::new(250);
    assert_eq!(ramp.target(), 250);
    assert_eq!(ramp.increment(), 2.0);
    assert!(!ramp.is_finished());
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let mut ramp = CounterRamp::new(0);
    assert_eq!(ramp.tick(), RampTick::Finished(0));
    assert!(ramp.is_finished());
}

#[test]
fn values_are_non_decreasing_and_end_at_target() {
    for target in [1_u32, 7, 50, 99, 150, 1_000, 12_345] {
        let mut ramp = CounterRamp::new(target);
        let ticks = run_to_end(&mut ramp);
        let values: Vec<u32> = ticks.iter().map(|t| t.value()).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "target {target}: {values:?}");
        assert_eq!(ticks.last(), Some(&RampTick::Finished(target)));
        assert!(values.iter().all(|v| *v <= target));
    }
}

#[test]
fn step_count_matches_target_over_increment() {
    for target in [1_u32, 3, 7, 50, 150, 1_000, 99_999] {
        let mut ramp = CounterRamp::new(target);
        let expected = (f64::from(target) / ramp.increment()).ceil();
        let steps = run_to_end(&mut ramp).len() as f64;
        assert!((steps - expected).abs() <= 1.0, "target {target}: {steps} steps, expected {expected}");
    }
}

#[test]
fn running_values_are_floored_totals() {
    let mut ramp = CounterRamp::new(250);
    assert_eq!(ramp.tick(), RampTick::Running(2));
    assert_eq!(ramp.tick(), RampTick::Running(4));

    let mut small = CounterRamp::new(10);
    // 0.08 per tick floors to zero for a while.
    assert_eq!(small.tick(), RampTick::Running(0));
}

#[test]
fn finished_ramp_is_idempotent() {
    let mut ramp = CounterRamp::new(5);
    run_to_end(&mut ramp);
    assert_eq!(ramp.tick(), RampTick::Finished(5));
    assert_eq!(ramp.tick(), RampTick::Finished(5));
    assert!(ramp.is_finished());
}

#[test]
fn ramp_tick_value_and_finished_helpers() {
    assert_eq!(RampTick::Running(3).value(), 3);
    assert_eq!(RampTick::Finished(9).value(), 9);
    assert!(!RampTick::Running(3).is_finished());
    assert!(RampTick::Finished(9).is_finished());
}
