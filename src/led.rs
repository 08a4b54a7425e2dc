//! A device abstraction for a PWM-dimmed LED with a triangle fade.
//!
//! See [`Led`] for usage and [`Fade`] for the brightness rule.

use embedded_hal::pwm::{Error as _, SetDutyCycle};

use crate::pwm_timing::{PwmTiming, check_duty};
use crate::sweep::Direction;
use crate::{Error, Result};

/// Brightest LED level; the LED slice wraps here (8-bit resolution).
pub const LED_WRAP: u8 = 255;

/// Clock divider for the LED slice.
///
/// With phase-correct counting this gives 125 MHz / (2 × 256 × 244) ≈ 1 kHz.
const LED_DIVIDER: u8 = 244;

/// LED slice configuration: 8-bit wrap at roughly 1 kHz.
pub const LED_TIMING: PwmTiming =
    PwmTiming::with_integer_divider(LED_WRAP as u16, LED_DIVIDER, true);

/// Brightness that climbs one level per step to [`LED_WRAP`], then falls back to 0, forever.
///
/// Brightness is clamped at each end and the direction reverses on the step that reaches it.
///
/// # Examples
/// ```
/// use servo_fade::{led::Fade, sweep::Direction};
///
/// let mut fade = Fade::new();
/// assert_eq!(fade.advance(), 1);
/// assert_eq!(fade.direction(), Direction::Up);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fade {
    brightness: u8,
    direction: Direction,
    top: u8,
}

impl Fade {
    /// Dark, heading up to [`LED_WRAP`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_top(LED_WRAP)
    }

    /// Dark, heading up to `top`.
    #[must_use]
    pub const fn with_top(top: u8) -> Self {
        Self {
            brightness: 0,
            direction: Direction::Up,
            top,
        }
    }

    /// Move one level and return the new brightness.
    pub fn advance(&mut self) -> u8 {
        match self.direction {
            Direction::Up => {
                self.brightness = self.brightness.saturating_add(1).min(self.top);
                if self.brightness >= self.top {
                    self.direction = self.direction.reversed();
                }
            }
            Direction::Down => {
                self.brightness = self.brightness.saturating_sub(1);
                if self.brightness == 0 {
                    self.direction = self.direction.reversed();
                }
            }
        }
        self.brightness
    }

    /// Current brightness.
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Direction of the next step.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }
}

impl Default for Fade {
    fn default() -> Self {
        Self::new()
    }
}

/// An LED on one PWM channel, faded by a [`Fade`].
///
/// # Examples
/// ```rust,no_run
/// use embedded_hal::pwm::SetDutyCycle;
/// use servo_fade::led::Led;
///
/// fn pulse_once(channel: impl SetDutyCycle) -> servo_fade::Result<()> {
///     let mut led = Led::new(channel)?;
///     for _ in 0..510 {
///         led.advance()?;
///     }
///     Ok(())
/// }
/// ```
pub struct Led<C> {
    channel: C,
    fade: Fade,
}

impl<C: SetDutyCycle> Led<C> {
    /// Wrap `channel`, whose top must be at least [`LED_WRAP`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::DutyAboveTop`] if the channel cannot reach full brightness.
    pub fn new(channel: C) -> Result<Self> {
        check_duty(u16::from(LED_WRAP), channel.max_duty_cycle())?;
        Ok(Self {
            channel,
            fade: Fade::new(),
        })
    }

    /// Step the fade and write the new brightness. Returns the brightness written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DutyAboveTop`] if the level does not fit the channel, or
    /// [`Error::Pwm`] if the channel write fails.
    pub fn advance(&mut self) -> Result<u8> {
        let brightness = self.fade.advance();
        let duty = u16::from(brightness);
        check_duty(duty, self.channel.max_duty_cycle())?;
        self.channel
            .set_duty_cycle(duty)
            .map_err(|err| Error::Pwm(err.kind()))?;
        Ok(brightness)
    }

    /// The fade state.
    #[must_use]
    pub const fn fade(&self) -> &Fade {
        &self.fade
    }
}
