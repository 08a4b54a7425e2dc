//! Drives a [`Sequencer`] in real time with `embassy_time` delays.
//!
//! See [`run`] for the whole timeline.

use core::convert::Infallible;

use defmt::{debug, info};
use embassy_time::Timer;
use embedded_hal::pwm::SetDutyCycle;

use crate::Result;
use crate::sequence::Sequencer;

/// Hold the servo at each fixed position in turn, logging each move.
///
/// Returns once the last hold has elapsed. Does nothing if the holds are already done.
///
/// # Errors
///
/// Returns an error if a servo write fails.
pub async fn run_fixed_positions<S, L>(sequencer: &mut Sequencer<S, L>) -> Result<()>
where
    S: SetDutyCycle,
    L: SetDutyCycle,
{
    while let Some(hold) = sequencer.hold_next_position()? {
        info!(
            "Position: {}° (pulse: {} µs)",
            hold.position.degrees, hold.position.pulse_us
        );
        Timer::after_millis(hold.hold_ms).await;
    }
    Ok(())
}

/// Sweep the servo up and down with the LED fade, forever.
///
/// # Errors
///
/// Only returns if a channel write fails.
pub async fn run_sweep_forever<S, L>(sequencer: &mut Sequencer<S, L>) -> Result<Infallible>
where
    S: SetDutyCycle,
    L: SetDutyCycle,
{
    loop {
        let step = sequencer.sweep_step()?;
        if step.phase_start {
            debug!(
                "{} from {} µs, brightness {}",
                step.stage, step.pulse_us, step.brightness
            );
        }
        Timer::after_millis(step.hold_ms).await;
    }
}

/// The whole demonstration: fixed holds, then the endless sweep.
///
/// # Errors
///
/// Only returns if a channel write fails.
pub async fn run<S, L>(sequencer: &mut Sequencer<S, L>) -> Result<Infallible>
where
    S: SetDutyCycle,
    L: SetDutyCycle,
{
    run_fixed_positions(sequencer).await?;
    run_sweep_forever(sequencer).await
}
