#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;
use embassy_executor::Spawner;
use embassy_rp::clocks::clk_sys_freq;
use servo_fade::{
    Result,
    led::LED_TIMING,
    pwm_channel::PwmChannel,
    pwm_timing::PwmTiming,
    runner,
    sequence::Sequencer,
    servo::{SERVO_TICK_HZ, SERVO_TOP},
};
use {defmt::info, defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    info!("Starting servo fade demo (servo GPIO 22, LED GPIO 12)");

    // 1 µs ticks, 20 ms frame.
    let servo_timing = PwmTiming::from_tick_rate(clk_sys_freq(), SERVO_TICK_HZ, SERVO_TOP)?;
    let servo = PwmChannel::new(p.PIN_22, p.PWM_SLICE3, servo_timing); // 22 → (22/2) % 8 = 3
    let led = PwmChannel::new(p.PIN_12, p.PWM_SLICE6, LED_TIMING); // 12 → (12/2) % 8 = 6

    let mut sequencer = Sequencer::new(servo, led)?;
    runner::run(&mut sequencer).await
}
