use core::fmt;

use crate::reading::Status;

/// Possible errors from the AHT10 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Error from the I2C bus (write or read).
    I2c(E),
    /// The sensor finished initializing but did not report itself calibrated.
    Initialization(Status),
    /// The sensor stayed busy for the whole polling budget.
    ///
    /// Only returned when [`BusyWait::MaxPolls`](crate::BusyWait::MaxPolls) is configured.
    BusyTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {e:?}"),
            Error::Initialization(status) => {
                write!(f, "sensor not calibrated (status {:#04x})", status.bits())
            }
            Error::BusyTimeout => f.write_str("sensor stayed busy"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
