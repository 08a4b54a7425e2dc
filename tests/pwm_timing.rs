#![allow(missing_docs)]
//! Host-level tests for PWM period and divider selection.

use embedded_hal::pwm::{Error as _, ErrorKind};
use fixed::types::U12F4;
use servo_fade::{
    Error,
    led::{LED_TIMING, LED_WRAP},
    pwm_timing::{PwmTiming, check_duty},
    servo::{SERVO_TICK_HZ, SERVO_TOP},
};

const CLK_SYS_HZ: u32 = 125_000_000;

#[test]
fn servo_timing_gives_one_microsecond_ticks_at_50_hz() {
    let timing = PwmTiming::from_tick_rate(CLK_SYS_HZ, SERVO_TICK_HZ, SERVO_TOP)
        .expect("125 MHz divides down to 1 MHz");
    assert_eq!(timing.divider(), U12F4::from_num(125));
    assert_eq!((timing.divider_int(), timing.divider_frac()), (125, 0));
    assert_eq!(timing.top(), 19_999);
    assert!(!timing.phase_correct());
    assert_eq!(timing.frequency_hz(CLK_SYS_HZ), 50);
}

#[test]
fn servo_timing_follows_the_system_clock() {
    // Pico 2 runs clk_sys at 150 MHz.
    let timing = PwmTiming::from_tick_rate(150_000_000, SERVO_TICK_HZ, SERVO_TOP)
        .expect("150 MHz divides down to 1 MHz");
    assert_eq!(timing.divider_int(), 150);
    assert_eq!(timing.frequency_hz(150_000_000), 50);
}

#[test]
fn fractional_divider_rounds_to_nearest_sixteenth() {
    // 125 MHz / 3 MHz = 41.666..., nearest sixteenth is 41 + 11/16.
    let timing =
        PwmTiming::from_tick_rate(CLK_SYS_HZ, 3_000_000, 99).expect("divider is in range");
    assert_eq!((timing.divider_int(), timing.divider_frac()), (41, 11));
}

#[test]
fn led_timing_is_eight_bit_near_one_kilohertz() {
    assert_eq!(LED_TIMING.top(), u16::from(LED_WRAP));
    assert_eq!(LED_TIMING.divider_int(), 244);
    assert!(LED_TIMING.phase_correct());
    let hz = LED_TIMING.frequency_hz(CLK_SYS_HZ);
    assert!((990..=1010).contains(&hz), "LED PWM at {hz} Hz");
}

#[test]
fn divider_of_488_does_not_fit_the_register() {
    // 125 MHz / 488 is the tick rate an 8-bit ~1 kHz edge-aligned LED would need.
    let tick_hz = 256_148;
    assert_eq!(
        PwmTiming::from_tick_rate(CLK_SYS_HZ, tick_hz, 255),
        Err(Error::DividerOutOfRange {
            clk_hz: CLK_SYS_HZ,
            tick_hz,
        })
    );
}

#[test]
fn divider_below_one_is_rejected() {
    assert!(matches!(
        PwmTiming::from_tick_rate(CLK_SYS_HZ, 250_000_000, 255),
        Err(Error::DividerOutOfRange { .. })
    ));
    assert!(matches!(
        PwmTiming::from_tick_rate(CLK_SYS_HZ, 0, 255),
        Err(Error::DividerOutOfRange { .. })
    ));
}

#[test]
fn divider_error_message_names_both_rates() {
    let err = PwmTiming::from_tick_rate(CLK_SYS_HZ, 1_000, 255).unwrap_err();
    assert_eq!(
        err.to_string(),
        "no PWM divider turns 125000000 Hz into 1000 Hz ticks"
    );
}

#[test]
fn duty_up_to_top_is_accepted() {
    assert_eq!(check_duty(0, 255), Ok(()));
    assert_eq!(check_duty(255, 255), Ok(()));
    assert_eq!(check_duty(SERVO_TOP, SERVO_TOP), Ok(()));
}

#[test]
fn duty_above_top_is_rejected() {
    assert_eq!(
        check_duty(256, 255),
        Err(Error::DutyAboveTop {
            duty: 256,
            top: 255,
        })
    );
    assert_eq!(
        check_duty(u16::MAX, SERVO_TOP),
        Err(Error::DutyAboveTop {
            duty: u16::MAX,
            top: SERVO_TOP,
        })
    );
}

#[test]
fn crate_errors_report_a_pwm_error_kind() {
    let above_top = Error::DutyAboveTop {
        duty: 256,
        top: 255,
    };
    assert_eq!(above_top.kind(), ErrorKind::Other);
    assert_eq!(Error::Pwm(ErrorKind::Other).kind(), ErrorKind::Other);
    assert_eq!(above_top.to_string(), "duty 256 exceeds PWM top 255");
}
