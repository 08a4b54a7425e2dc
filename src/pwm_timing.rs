//! Period and clock-divider settings for one PWM slice.
//!
//! A slice counts from 0 to [`PwmTiming::top`] and wraps. Its tick rate is `clk_sys`
//! divided by an 8.4 fixed-point divider, so only dividers from 1.0 to 255 + 15/16 in
//! 1/16 steps exist. See [`PwmTiming`] for the constructors that enforce this.

use fixed::types::U12F4;

use crate::{Error, Result};

/// One whole divider step, in sixteenths.
const DIVIDER_ONE: u16 = 16;

/// Largest divider the 8.4 register holds (255 + 15/16), in sixteenths.
const DIVIDER_MAX_BITS: u16 = 0x0FFF;

/// Check that `duty` fits in a channel whose counter wraps at `top`.
///
/// Every duty write goes through this before touching a channel.
///
/// # Errors
///
/// Returns [`Error::DutyAboveTop`] if `duty > top`.
pub const fn check_duty(duty: u16, top: u16) -> Result<()> {
    if duty > top {
        return Err(Error::DutyAboveTop { duty, top });
    }
    Ok(())
}

/// The fixed configuration of one PWM slice: its top (wrap) value, clock divider,
/// and counting mode.
///
/// # Examples
/// ```
/// use servo_fade::pwm_timing::PwmTiming;
///
/// // 1 µs ticks from a 125 MHz clock, 20 000 ticks per frame.
/// let timing = PwmTiming::from_tick_rate(125_000_000, 1_000_000, 19_999)?;
/// assert_eq!(timing.divider_int(), 125);
/// assert_eq!(timing.frequency_hz(125_000_000), 50);
/// # Ok::<(), servo_fade::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub struct PwmTiming {
    top: u16,
    divider_bits: u16, // divider in sixteenths
    phase_correct: bool,
}

impl PwmTiming {
    /// Timing with a whole-number divider, usable in constants.
    ///
    /// Panics (at compile time, in a `const`) if `divider` is 0.
    #[must_use]
    pub const fn with_integer_divider(top: u16, divider: u8, phase_correct: bool) -> Self {
        assert!(divider > 0, "divider must be at least 1");
        Self {
            top,
            divider_bits: (divider as u16) << 4,
            phase_correct,
        }
    }

    /// Edge-aligned timing whose ticks run at `tick_hz`, given a `clk_hz` system clock.
    ///
    /// The divider is rounded to the nearest 1/16.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DividerOutOfRange`] if the divider falls outside 1.0..=255.9375.
    pub fn from_tick_rate(clk_hz: u32, tick_hz: u32, top: u16) -> Result<Self> {
        let out_of_range = Error::DividerOutOfRange { clk_hz, tick_hz };
        let tick_rate = u64::from(tick_hz);
        let sixteenths = u64::from(clk_hz)
            .checked_mul(u64::from(DIVIDER_ONE))
            .and_then(|scaled| scaled.checked_add(tick_rate / 2))
            .and_then(|scaled| scaled.checked_div(tick_rate))
            .ok_or(out_of_range)?;
        let divider_bits = u16::try_from(sixteenths).map_err(|_| out_of_range)?;
        if !(DIVIDER_ONE..=DIVIDER_MAX_BITS).contains(&divider_bits) {
            return Err(out_of_range);
        }
        Ok(Self {
            top,
            divider_bits,
            phase_correct: false,
        })
    }

    /// Counter wrap value. Duty values range over `0..=top`.
    #[must_use]
    pub const fn top(&self) -> u16 {
        self.top
    }

    /// Clock divider as the 8.4 fixed-point value the slice registers take.
    #[must_use]
    pub const fn divider(&self) -> U12F4 {
        U12F4::from_bits(self.divider_bits)
    }

    /// Integer part of the divider.
    #[must_use]
    pub const fn divider_int(&self) -> u8 {
        (self.divider_bits >> 4) as u8
    }

    /// Fractional part of the divider, in sixteenths.
    #[must_use]
    pub const fn divider_frac(&self) -> u8 {
        (self.divider_bits & 0x0F) as u8
    }

    /// Whether the counter runs up and back down (halving the frequency).
    #[must_use]
    pub const fn phase_correct(&self) -> bool {
        self.phase_correct
    }

    /// Output frequency in whole hertz for a `clk_hz` system clock.
    #[must_use]
    pub fn frequency_hz(&self, clk_hz: u32) -> u32 {
        let passes: u64 = if self.phase_correct { 2 } else { 1 };
        let divisor = u64::from(self.divider_bits)
            .saturating_mul(u64::from(self.top).saturating_add(1))
            .saturating_mul(passes);
        let hz = u64::from(clk_hz)
            .saturating_mul(u64::from(DIVIDER_ONE))
            .checked_div(divisor)
            .unwrap_or(0);
        u32::try_from(hz).unwrap_or(u32::MAX)
    }
}
