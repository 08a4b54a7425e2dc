//! Pulse ramps for the continuous servo sweep.
//!
//! See [`Ramp`] for the two sweep phases.

use crate::servo::{SERVO_PULSE_MAX_US, SERVO_PULSE_MIN_US};

/// Pulse change between consecutive sweep steps (microseconds).
pub const SWEEP_STEP_US: u16 = 5;

/// Which way a value is moving.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Direction {
    /// Toward the upper bound.
    Up,
    /// Toward the lower bound.
    Down,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Iterator over pulse widths from `from` to `to` (both inclusive) in fixed steps.
///
/// Stops early, without overshooting, if the span is not a multiple of the step.
///
/// # Examples
/// ```
/// use servo_fade::sweep::Ramp;
///
/// assert!(Ramp::new(10, 20, 5).eq([10, 15, 20]));
/// assert!(Ramp::new(20, 10, 5).eq([20, 15, 10]));
/// assert_eq!(Ramp::up().count(), 381);
/// ```
#[derive(Clone, Debug)]
pub struct Ramp {
    next: Option<u16>,
    to: u16,
    step: u16,
    direction: Direction,
}

impl Ramp {
    /// A ramp starting at `from` and heading toward `to`.
    ///
    /// Panics if `step` is 0.
    #[must_use]
    pub const fn new(from: u16, to: u16, step: u16) -> Self {
        assert!(step > 0, "ramp step must be positive");
        Self {
            next: Some(from),
            to,
            step,
            direction: if from <= to {
                Direction::Up
            } else {
                Direction::Down
            },
        }
    }

    /// The ascending sweep phase: minimum to maximum servo pulse.
    #[must_use]
    pub const fn up() -> Self {
        Self::new(SERVO_PULSE_MIN_US, SERVO_PULSE_MAX_US, SWEEP_STEP_US)
    }

    /// The descending sweep phase: maximum to minimum servo pulse.
    #[must_use]
    pub const fn down() -> Self {
        Self::new(SERVO_PULSE_MAX_US, SERVO_PULSE_MIN_US, SWEEP_STEP_US)
    }

    /// Direction this ramp moves in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Iterator for Ramp {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        let current = self.next?;
        self.next = match self.direction {
            Direction::Up => current.checked_add(self.step).filter(|pulse| *pulse <= self.to),
            Direction::Down => current.checked_sub(self.step).filter(|pulse| *pulse >= self.to),
        };
        Some(current)
    }
}
