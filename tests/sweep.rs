#![allow(missing_docs)]
//! Host-level tests for the sweep ramps.

use servo_fade::{
    servo::{SERVO_PULSE_MAX_US, SERVO_PULSE_MIN_US},
    sweep::{Direction, Ramp, SWEEP_STEP_US},
};

#[test]
fn ascending_phase_has_381_steps_in_increasing_order() {
    let pulses: Vec<u16> = Ramp::up().collect();
    assert_eq!(pulses.len(), 381);
    assert_eq!(pulses.first(), Some(&SERVO_PULSE_MIN_US));
    assert_eq!(pulses.last(), Some(&SERVO_PULSE_MAX_US));
    assert!(
        pulses
            .windows(2)
            .all(|pair| matches!(pair, [earlier, later] if *later == earlier + SWEEP_STEP_US))
    );
}

#[test]
fn descending_phase_is_the_exact_reverse() {
    let up: Vec<u16> = Ramp::up().collect();
    let mut down: Vec<u16> = Ramp::down().collect();
    down.reverse();
    assert_eq!(up, down);
    assert_eq!(Ramp::down().direction(), Direction::Down);
}

#[test]
fn ramps_never_leave_the_servo_range() {
    assert!(
        Ramp::up()
            .chain(Ramp::down())
            .all(|pulse| (SERVO_PULSE_MIN_US..=SERVO_PULSE_MAX_US).contains(&pulse))
    );
}

#[test]
fn uneven_span_stops_short_of_the_end() {
    assert!(Ramp::new(0, 12, 5).eq([0, 5, 10]));
    assert!(Ramp::new(12, 0, 5).eq([12, 7, 2]));
}

#[test]
fn ramp_near_u16_limits_does_not_overflow() {
    assert!(Ramp::new(u16::MAX - 3, u16::MAX, 2).eq([u16::MAX - 3, u16::MAX - 1]));
    assert!(Ramp::new(3, 0, 2).eq([3, 1]));
}

#[test]
fn single_point_ramp_yields_once() {
    assert!(Ramp::new(1_470, 1_470, 5).eq([1_470]));
}
