//! Error types for MPU-6050 operations.
//!
//! Both the blocking and async drivers share these types: the eh1 sync
//! and async I2C traits use the same `ErrorType` association, so one
//! definition covers both front ends.

use core::fmt::{Debug, Formatter};
use embedded_hal::i2c::ErrorType;

use crate::alert::NoAlertPin;

/// Error that occurs during initialization of the sensor.
///
/// Carries the I2C peripheral (and the alert line, when construction
/// went through `with_alert`) back out so the caller can release or
/// retry with the same hardware.
pub struct InitError<I, P = NoAlertPin>
where
    I: ErrorType,
{
    pub i2c: I,
    pub alert: Option<P>,
    pub error: Error<I::Error>,
}

impl<I, P> Debug for InitError<I, P>
where
    I: ErrorType,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for sensor operations.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// Error occurred during an I2C write operation
    WriteError(E),
    /// Error occurred during an I2C write-read operation
    WriteReadError(E),
    /// The identity register did not match an MPU-6050.
    /// Contains the raw byte that was read.
    UnexpectedDevice(u8),
}

/// Failure while waiting on the alert line.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum AlertError<E> {
    /// The driver holds no alert line; construct with `with_alert` to
    /// wire one up
    NotConfigured,
    /// The line itself failed
    Pin(E),
}
