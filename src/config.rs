//! MPU6050 Configuration
//!
//! The digital low-pass filter (DLPF) smooths raw sensor readings at the
//! cost of response time; the sample-rate divider scales the output data
//! rate down from the gyroscope clock.
//!
//! [`SensorConfig`] bundles the configurable settings into one sparse
//! options struct: only the fields that are `Some` are written to the
//! device, everything else keeps its prior state.

use crate::accel::AccelFullScale;
use crate::gyro::GyroFullScale;

/// Digital low-pass filter selector (the 3-bit field of `Config`).
///
/// Higher settings filter more aggressively and respond more slowly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum DigitalLowPassFilter {
    /// Minimal filtering, fastest response
    Filter0 = 0,
    /// Light filtering, good balance for most uses
    Filter1 = 1,
    /// Moderate filtering
    Filter2 = 2,
    /// Strong filtering
    Filter3 = 3,
    /// Very strong filtering
    Filter4 = 4,
    /// Heavy filtering
    Filter5 = 5,
    /// Maximum filtering, use only for nearly static measurements
    Filter6 = 6,
}

/// Sparse device settings applied by `Mpu6050::configure`.
///
/// ```
/// # use mpu6050_driver::config::SensorConfig;
/// # use mpu6050_driver::accel::AccelFullScale;
/// let config = SensorConfig {
///     accel_scale: Some(AccelFullScale::G8),
///     sample_rate_divider: Some(7),
///     ..Default::default()
/// };
/// ```
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct SensorConfig {
    /// Accelerometer full-scale range
    pub accel_scale: Option<AccelFullScale>,
    /// Gyroscope full-scale range
    pub gyro_scale: Option<GyroFullScale>,
    /// Output data rate divider, written verbatim to `SmpRtDiv`
    pub sample_rate_divider: Option<u8>,
    /// Digital low-pass filter selector
    pub low_pass_filter: Option<DigitalLowPassFilter>,
}
