//! A device abstraction for hobby positional servo motors.
//!
//! This module provides a range-checked interface for driving a servo from any
//! [`SetDutyCycle`] channel ticking at 1 µs. See [`Servo`] for usage examples.

use embedded_hal::pwm::{Error as _, SetDutyCycle};

use crate::pwm_timing::check_duty;
use crate::{Error, Result};

/// Tick rate of the servo slice: one tick per microsecond.
pub const SERVO_TICK_HZ: u32 = 1_000_000;

/// Top (wrap) value of the servo slice: 19 999 -> 20 000 ticks = 20 ms frame.
pub const SERVO_TOP: u16 = 19_999;

/// Shortest pulse the servo is driven with (microseconds), roughly 0°.
pub const SERVO_PULSE_MIN_US: u16 = 500;

/// Pulse used for the middle hold (microseconds), roughly 90°.
///
/// This is a measured calibration, not the midpoint of the range.
pub const SERVO_PULSE_MID_US: u16 = 1_470;

/// Longest pulse the servo is driven with (microseconds), roughly 180°.
pub const SERVO_PULSE_MAX_US: u16 = 2_400;

/// A named servo position: an approximate angle and the pulse that produces it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct FixedPosition {
    /// Nominal angle, for display.
    pub degrees: u8,
    /// Pulse width sent to the servo (microseconds).
    pub pulse_us: u16,
}

impl FixedPosition {
    /// Roughly 180°.
    pub const MAX: Self = Self {
        degrees: 180,
        pulse_us: SERVO_PULSE_MAX_US,
    };

    /// Roughly 90°.
    pub const MID: Self = Self {
        degrees: 90,
        pulse_us: SERVO_PULSE_MID_US,
    };

    /// Roughly 0°.
    pub const MIN: Self = Self {
        degrees: 0,
        pulse_us: SERVO_PULSE_MIN_US,
    };
}

/// A servo on one PWM channel whose ticks are 1 µs.
///
/// # Examples
/// ```
/// use core::convert::Infallible;
/// use embedded_hal::pwm::{ErrorType, SetDutyCycle};
/// use servo_fade::servo::{SERVO_TOP, Servo};
///
/// struct Channel(u16);
/// impl ErrorType for Channel {
///     type Error = Infallible;
/// }
/// impl SetDutyCycle for Channel {
///     fn max_duty_cycle(&self) -> u16 {
///         SERVO_TOP
///     }
///     fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
///         self.0 = duty;
///         Ok(())
///     }
/// }
///
/// let mut servo = Servo::new(Channel(0))?;
/// servo.set_pulse_us(1_470)?;   // Roughly 90°
/// assert!(servo.set_pulse_us(3_000).is_err());
/// assert_eq!(servo.pulse_us(), 1_470);
/// # Ok::<(), servo_fade::Error>(())
/// ```
pub struct Servo<C> {
    channel: C,
    min_us: u16,
    max_us: u16,
    pulse_us: Option<u16>, // last pulse written
}

impl<C: SetDutyCycle> Servo<C> {
    /// A servo limited to [`SERVO_PULSE_MIN_US`]..=[`SERVO_PULSE_MAX_US`].
    ///
    /// # Errors
    ///
    /// See [`Servo::with_range`].
    pub fn new(channel: C) -> Result<Self> {
        Self::with_range(channel, SERVO_PULSE_MIN_US, SERVO_PULSE_MAX_US)
    }

    /// A servo limited to `min_us..=max_us`.
    ///
    /// Nothing is written until the first [`Servo::set_pulse_us`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPulseRange`] if `min_us >= max_us` or `max_us` does not fit
    /// in the channel's frame.
    pub fn with_range(channel: C, min_us: u16, max_us: u16) -> Result<Self> {
        let top = channel.max_duty_cycle();
        if min_us >= max_us || max_us > top {
            return Err(Error::InvalidPulseRange {
                min_us,
                max_us,
                top,
            });
        }
        Ok(Self {
            channel,
            min_us,
            max_us,
            pulse_us: None,
        })
    }

    /// Set the pulse width in microseconds. The output holds it until the next call.
    ///
    /// See the [struct-level example](Self) for usage.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PulseOutOfRange`] (writing nothing) if `pulse_us` is outside the
    /// range, or [`Error::Pwm`] if the channel write fails.
    pub fn set_pulse_us(&mut self, pulse_us: u16) -> Result<()> {
        if !(self.min_us..=self.max_us).contains(&pulse_us) {
            return Err(Error::PulseOutOfRange {
                pulse_us,
                min_us: self.min_us,
                max_us: self.max_us,
            });
        }
        // One tick = 1 µs, so compare = us.
        check_duty(pulse_us, self.channel.max_duty_cycle())?;
        self.channel
            .set_duty_cycle(pulse_us)
            .map_err(|err| Error::Pwm(err.kind()))?;
        self.pulse_us = Some(pulse_us);
        Ok(())
    }

    /// Move to a [`FixedPosition`].
    ///
    /// # Errors
    ///
    /// See [`Servo::set_pulse_us`].
    pub fn set_position(&mut self, position: FixedPosition) -> Result<()> {
        self.set_pulse_us(position.pulse_us)
    }

    /// Last pulse written, or 0 before the first write (the channel starts at duty 0).
    #[must_use]
    pub fn pulse_us(&self) -> u16 {
        self.pulse_us.unwrap_or(0)
    }
}
