//! The demonstration timeline: three fixed servo holds, then an endless sweep with an LED fade.
//!
//! [`Sequencer`] performs the PWM writes for one step at a time and reports how long the
//! caller should wait before the next step. The waiting itself lives in `runner`, so the
//! same state machine runs on hardware and in host tests.

use embedded_hal::pwm::SetDutyCycle;

use crate::led::Led;
use crate::servo::{FixedPosition, Servo};
use crate::sweep::Ramp;
use crate::Result;

/// How long each fixed position is held (milliseconds).
pub const HOLD_MS: u64 = 5_000;

/// Pause after each sweep step (milliseconds).
pub const SWEEP_STEP_DELAY_MS: u64 = 10;

/// Where the timeline is.
///
/// `Init → HoldMax → HoldMid → HoldMin → SweepUp ⇄ SweepDown`, with no way out of the sweep.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum Stage {
    /// Channels configured, nothing written yet.
    Init,
    /// Holding at [`FixedPosition::MAX`].
    HoldMax,
    /// Holding at [`FixedPosition::MID`].
    HoldMid,
    /// Holding at [`FixedPosition::MIN`].
    HoldMin,
    /// Sweeping from the minimum pulse to the maximum.
    SweepUp,
    /// Sweeping from the maximum pulse to the minimum.
    SweepDown,
}

impl Stage {
    /// The fixed position held in this stage, if any.
    #[must_use]
    pub const fn fixed_position(self) -> Option<FixedPosition> {
        match self {
            Self::HoldMax => Some(FixedPosition::MAX),
            Self::HoldMid => Some(FixedPosition::MID),
            Self::HoldMin => Some(FixedPosition::MIN),
            Self::Init | Self::SweepUp | Self::SweepDown => None,
        }
    }

    /// Whether this is one of the two sweep stages.
    #[must_use]
    pub const fn is_sweeping(self) -> bool {
        matches!(self, Self::SweepUp | Self::SweepDown)
    }
}

/// One fixed-position hold that has just been written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct Hold {
    /// Stage entered.
    pub stage: Stage,
    /// Position written to the servo.
    pub position: FixedPosition,
    /// Time to wait before the next step (milliseconds).
    pub hold_ms: u64,
}

/// One sweep step that has just been written.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct SweepStep {
    /// Sweep phase this step belongs to.
    pub stage: Stage,
    /// Pulse written to the servo (microseconds).
    pub pulse_us: u16,
    /// Brightness written to the LED.
    pub brightness: u8,
    /// Whether this is the first step of its phase.
    pub phase_start: bool,
    /// Time to wait before the next step (milliseconds).
    pub hold_ms: u64,
}

/// Owns the servo and LED channels and walks them through the demonstration timeline.
///
/// # Examples
/// ```rust,no_run
/// use embedded_hal::pwm::SetDutyCycle;
/// use servo_fade::sequence::Sequencer;
///
/// fn first_sweep_step(
///     servo: impl SetDutyCycle,
///     led: impl SetDutyCycle,
/// ) -> servo_fade::Result<()> {
///     let mut sequencer = Sequencer::new(servo, led)?;
///     while let Some(_hold) = sequencer.hold_next_position()? {
///         // wait _hold.hold_ms ...
///     }
///     let step = sequencer.sweep_step()?;
///     assert_eq!((step.pulse_us, step.brightness), (500, 1));
///     Ok(())
/// }
/// ```
pub struct Sequencer<S, L> {
    servo: Servo<S>,
    led: Led<L>,
    stage: Stage,
    ramp: Ramp,
}

impl<S: SetDutyCycle, L: SetDutyCycle> Sequencer<S, L> {
    /// Take ownership of a configured servo channel (1 µs ticks) and LED channel.
    ///
    /// Both channels are expected to sit at duty 0. Nothing is written here.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPulseRange`] if the servo channel's frame cannot hold
    /// the maximum pulse, or [`crate::Error::DutyAboveTop`] if the LED channel cannot reach
    /// full brightness.
    pub fn new(servo_channel: S, led_channel: L) -> Result<Self> {
        Ok(Self {
            servo: Servo::new(servo_channel)?,
            led: Led::new(led_channel)?,
            stage: Stage::Init,
            ramp: Ramp::up(),
        })
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Last pulse written to the servo.
    #[must_use]
    pub fn pulse_us(&self) -> u16 {
        self.servo.pulse_us()
    }

    /// Last brightness written to the LED.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.led.fade().brightness()
    }

    /// Move to the next fixed position and write it to the servo.
    ///
    /// Returns `None`, writing nothing, once all three holds are done.
    ///
    /// # Errors
    ///
    /// Returns an error if the servo write fails.
    pub fn hold_next_position(&mut self) -> Result<Option<Hold>> {
        let (stage, position) = match self.stage {
            Stage::Init => (Stage::HoldMax, FixedPosition::MAX),
            Stage::HoldMax => (Stage::HoldMid, FixedPosition::MID),
            Stage::HoldMid => (Stage::HoldMin, FixedPosition::MIN),
            Stage::HoldMin | Stage::SweepUp | Stage::SweepDown => return Ok(None),
        };
        self.servo.set_position(position)?;
        self.stage = stage;
        Ok(Some(Hold {
            stage,
            position,
            hold_ms: HOLD_MS,
        }))
    }

    /// Write the next sweep pulse to the servo, then the next fade level to the LED.
    ///
    /// Called before the fixed holds are finished, this skips straight to the sweep.
    ///
    /// # Errors
    ///
    /// Returns an error if either channel write fails.
    pub fn sweep_step(&mut self) -> Result<SweepStep> {
        let mut phase_start = false;
        if !self.stage.is_sweeping() {
            self.stage = Stage::SweepUp;
            self.ramp = Ramp::up();
            phase_start = true;
        }
        let pulse_us = loop {
            if let Some(pulse_us) = self.ramp.next() {
                break pulse_us;
            }
            (self.stage, self.ramp) = match self.stage {
                Stage::SweepUp => (Stage::SweepDown, Ramp::down()),
                _ => (Stage::SweepUp, Ramp::up()),
            };
            phase_start = true;
        };

        self.servo.set_pulse_us(pulse_us)?;
        let brightness = self.led.advance()?;
        Ok(SweepStep {
            stage: self.stage,
            pulse_us,
            brightness,
            phase_start,
            hold_ms: SWEEP_STEP_DELAY_MS,
        })
    }
}
