//! A device abstraction for one output channel of an RP2040/RP2350 PWM slice.
//!
//! See [`PwmChannel`] for usage.

use defmt::info;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use embedded_hal::pwm::{ErrorType, SetDutyCycle};

use crate::pwm_timing::{PwmTiming, check_duty};
use crate::Error;

// Public for use in downstream generic code.
#[doc(hidden)]
pub trait PwmPin<S: embassy_rp::PeripheralType>: embassy_rp::PeripheralType {
    const IS_CHANNEL_A: bool;
    fn new_pwm<'d>(
        slice: embassy_rp::Peri<'d, S>,
        pin: embassy_rp::Peri<'d, Self>,
        config: Config,
    ) -> Pwm<'d>;
}

macro_rules! pwm_pin_map {
    ($pin:ident, $slice:ident, A) => {
        impl PwmPin<embassy_rp::peripherals::$slice> for embassy_rp::peripherals::$pin {
            const IS_CHANNEL_A: bool = true;
            fn new_pwm<'d>(
                slice: embassy_rp::Peri<'d, embassy_rp::peripherals::$slice>,
                pin: embassy_rp::Peri<'d, Self>,
                config: Config,
            ) -> Pwm<'d> {
                Pwm::new_output_a(slice, pin, config)
            }
        }
    };
    ($pin:ident, $slice:ident, B) => {
        impl PwmPin<embassy_rp::peripherals::$slice> for embassy_rp::peripherals::$pin {
            const IS_CHANNEL_A: bool = false;
            fn new_pwm<'d>(
                slice: embassy_rp::Peri<'d, embassy_rp::peripherals::$slice>,
                pin: embassy_rp::Peri<'d, Self>,
                config: Config,
            ) -> Pwm<'d> {
                Pwm::new_output_b(slice, pin, config)
            }
        }
    };
}

// GPIO n drives slice (n / 2) % 8; even pins are channel A, odd pins channel B.
// GPIO 23-25 and 29 belong to the Pico W radio.
pwm_pin_map!(PIN_0, PWM_SLICE0, A);
pwm_pin_map!(PIN_1, PWM_SLICE0, B);
pwm_pin_map!(PIN_2, PWM_SLICE1, A);
pwm_pin_map!(PIN_3, PWM_SLICE1, B);
pwm_pin_map!(PIN_4, PWM_SLICE2, A);
pwm_pin_map!(PIN_5, PWM_SLICE2, B);
pwm_pin_map!(PIN_6, PWM_SLICE3, A);
pwm_pin_map!(PIN_7, PWM_SLICE3, B);
pwm_pin_map!(PIN_8, PWM_SLICE4, A);
pwm_pin_map!(PIN_9, PWM_SLICE4, B);
pwm_pin_map!(PIN_10, PWM_SLICE5, A);
pwm_pin_map!(PIN_11, PWM_SLICE5, B);
pwm_pin_map!(PIN_12, PWM_SLICE6, A);
pwm_pin_map!(PIN_13, PWM_SLICE6, B);
pwm_pin_map!(PIN_14, PWM_SLICE7, A);
pwm_pin_map!(PIN_15, PWM_SLICE7, B);
pwm_pin_map!(PIN_16, PWM_SLICE0, A);
pwm_pin_map!(PIN_17, PWM_SLICE0, B);
pwm_pin_map!(PIN_18, PWM_SLICE1, A);
pwm_pin_map!(PIN_19, PWM_SLICE1, B);
pwm_pin_map!(PIN_20, PWM_SLICE2, A);
pwm_pin_map!(PIN_21, PWM_SLICE2, B);
pwm_pin_map!(PIN_22, PWM_SLICE3, A);
pwm_pin_map!(PIN_26, PWM_SLICE5, A);
pwm_pin_map!(PIN_27, PWM_SLICE5, B);
pwm_pin_map!(PIN_28, PWM_SLICE6, A);

#[derive(Debug, Clone, Copy, defmt::Format)]
enum Channel {
    A,
    B,
}

/// One PWM output with a fixed [`PwmTiming`] and a writable duty value.
///
/// Created enabled with duty 0. Implements [`SetDutyCycle`], with
/// [`max_duty_cycle`](SetDutyCycle::max_duty_cycle) equal to the timing's top.
/// A duty above top is rejected with [`Error::DutyAboveTop`] and the output is untouched.
///
/// # Examples
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use servo_fade::{led::LED_TIMING, pwm_channel::PwmChannel};
/// # use core::panic::PanicInfo;
/// # #[panic_handler]
/// # fn panic(_info: &PanicInfo) -> ! { loop {} }
/// async fn example(p: embassy_rp::Peripherals) {
///     // GPIO 12 is channel A of PWM slice 6.
///     let _led = PwmChannel::new(p.PIN_12, p.PWM_SLICE6, LED_TIMING);
/// }
/// ```
pub struct PwmChannel<'d> {
    pwm: Pwm<'d>,
    cfg: Config, // Store config to avoid recreating default (which resets divider)
    channel: Channel,
}

impl<'d> PwmChannel<'d> {
    /// Configure `slice` with `timing`, set duty 0, enable output on `pin`.
    pub fn new<P, S>(
        pin: embassy_rp::Peri<'d, P>,
        slice: embassy_rp::Peri<'d, S>,
        timing: PwmTiming,
    ) -> Self
    where
        P: PwmPin<S>,
        S: embassy_rp::PeripheralType,
    {
        let mut cfg = Config::default();
        cfg.top = timing.top();
        cfg.divider = timing.divider();
        cfg.phase_correct = timing.phase_correct();
        cfg.compare_a = 0;
        cfg.compare_b = 0;
        cfg.enable = true;

        let pwm = P::new_pwm(slice, pin, cfg.clone());
        let channel = if P::IS_CHANNEL_A {
            Channel::A
        } else {
            Channel::B
        };

        let clk = clk_sys_freq();
        info!(
            "pwm channel {} top={} div={}+{}/16 phase_correct={} -> {}Hz",
            channel,
            timing.top(),
            timing.divider_int(),
            timing.divider_frac(),
            timing.phase_correct(),
            timing.frequency_hz(clk)
        );

        Self { pwm, cfg, channel }
    }
}

impl ErrorType for PwmChannel<'_> {
    type Error = Error;
}

impl SetDutyCycle for PwmChannel<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.cfg.top
    }

    // NOTE: only the compare value changes; the stored config keeps top and divider intact.
    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        check_duty(duty, self.cfg.top)?;
        match self.channel {
            Channel::A => self.cfg.compare_a = duty,
            Channel::B => self.cfg.compare_b = duty,
        }
        self.pwm.set_config(&self.cfg);
        Ok(())
    }
}
