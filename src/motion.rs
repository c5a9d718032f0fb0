//! Motion detection configuration for the MPU-6050.
//!
//! The device can compare consecutive accelerometer samples against a
//! threshold in hardware and raise the motion interrupt source when the
//! threshold is exceeded for long enough. This backs
//! [`crate::alert::AlertKind::Movement`].

/// Motion detection configuration parameters
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct MotionConfig {
    /// Motion detection threshold in mg (1LSB = 2mg)
    /// Range: 0-255 (0-510mg)
    pub threshold: u8,

    /// Number of consecutive samples that must exceed threshold
    /// Duration = (sample_rate / 1000) * duration
    /// Range: 0-255
    pub duration: u8,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            // Default 40mg threshold (20 * 2mg)
            threshold: 20,
            // Default ~5ms at 1kHz sample rate
            duration: 5,
        }
    }
}

/// Motion detection status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MotionStatus {
    /// No motion detected
    Still,
    /// Motion detected
    Moving,
}

impl From<u8> for MotionStatus {
    fn from(value: u8) -> Self {
        if (value & 0x40) != 0 {
            MotionStatus::Moving
        } else {
            MotionStatus::Still
        }
    }
}
