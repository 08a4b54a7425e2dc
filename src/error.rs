//! Crate-level error type.

use embedded_hal::pwm::ErrorKind;

/// Errors raised while configuring or writing the PWM channels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// The requested tick rate needs a clock divider the PWM slice cannot represent.
    #[display("no PWM divider turns {clk_hz} Hz into {tick_hz} Hz ticks")]
    DividerOutOfRange {
        /// System clock feeding the slice.
        clk_hz: u32,
        /// Requested tick rate.
        tick_hz: u32,
    },

    /// The servo pulse range is empty or does not fit in the PWM period.
    #[display("servo range {min_us}..={max_us} µs does not fit a period of top {top}")]
    InvalidPulseRange {
        /// Shortest pulse requested.
        min_us: u16,
        /// Longest pulse requested.
        max_us: u16,
        /// Top (wrap) value of the servo channel.
        top: u16,
    },

    /// A servo pulse outside the configured range was requested.
    #[display("servo pulse {pulse_us} µs outside {min_us}..={max_us} µs")]
    PulseOutOfRange {
        /// Rejected pulse width.
        pulse_us: u16,
        /// Shortest allowed pulse.
        min_us: u16,
        /// Longest allowed pulse.
        max_us: u16,
    },

    /// A duty value above the channel's top (wrap) value was requested.
    #[display("duty {duty} exceeds PWM top {top}")]
    DutyAboveTop {
        /// Rejected duty value in ticks.
        duty: u16,
        /// Top (wrap) value of the channel.
        top: u16,
    },

    /// The PWM channel rejected a write.
    #[display("PWM write failed: {_0:?}")]
    Pwm(#[error(not(source))] ErrorKind),
}

impl embedded_hal::pwm::Error for Error {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Pwm(kind) => *kind,
            Self::DividerOutOfRange { .. }
            | Self::InvalidPulseRange { .. }
            | Self::PulseOutOfRange { .. }
            | Self::DutyAboveTop { .. } => ErrorKind::Other,
        }
    }
}

/// Result type for this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
