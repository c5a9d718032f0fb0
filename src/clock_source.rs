//! MPU6050 Clock Source Configuration
//!
//! The low bits of `PwrMgmt1` select the timing reference. The internal
//! oscillator starts fastest but drifts; a gyroscope axis reference is
//! the recommended running configuration and is what this driver selects
//! when waking the device after reset.

/// Available clock sources for the MPU6050.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum ClockSource {
    /// Internal 8MHz oscillator, fastest startup, least accurate
    Internal = 0,
    /// X-axis gyroscope reference, recommended for general use
    Xgyro = 1,
    /// Y-axis gyroscope reference
    Ygyro = 2,
    /// Z-axis gyroscope reference
    Zgyro = 3,
    /// External 32.768kHz crystal
    External32768 = 4,
    /// External 19.2MHz crystal
    External19200 = 5,
    /// Stops the clock, sensor stops operating
    Stop = 7,
}
