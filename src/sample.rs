//! Combined six-axis reading in physical units.

use crate::accel::{Accel, AccelFullScale};
use crate::gyro::{Gyro, GyroFullScale};

/// Standard gravity, used to convert g-force to m/s².
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// One six-axis measurement.
///
/// Acceleration is in m/s², angular rate in degrees per second. Produced
/// fresh by every `sample()` call; the driver keeps no copy.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Sample {
    /// X-axis linear acceleration (m/s²)
    pub x: f32,
    /// Y-axis linear acceleration (m/s²)
    pub y: f32,
    /// Z-axis linear acceleration (m/s²)
    pub z: f32,
    /// X-axis angular rate (°/s)
    pub gyro_x: f32,
    /// Y-axis angular rate (°/s)
    pub gyro_y: f32,
    /// Z-axis angular rate (°/s)
    pub gyro_z: f32,
}

impl Sample {
    /// Scale raw counts into physical units for the given ranges.
    pub fn from_raw(
        accel: Accel,
        accel_scale: AccelFullScale,
        gyro: Gyro,
        gyro_scale: GyroFullScale,
    ) -> Self {
        let accel = accel.scaled(accel_scale);
        let gyro = gyro.scaled(gyro_scale);
        Self {
            x: accel.x() * STANDARD_GRAVITY,
            y: accel.y() * STANDARD_GRAVITY,
            z: accel.z() * STANDARD_GRAVITY,
            gyro_x: gyro.x(),
            gyro_y: gyro.y(),
            gyro_z: gyro.z(),
        }
    }
}
