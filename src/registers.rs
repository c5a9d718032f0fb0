//! MPU6050 Register Map
//!
//! Only the registers this driver touches are listed. The device exposes
//! many more (FIFO, DMP memory, calibration offsets); those groups are
//! intentionally absent because the driver does not manage them.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Sample Rate Divider register (0x19)
    /// Sets the output data rate by dividing the gyroscope clock
    SmpRtDiv = 0x19,

    /// Configuration register (0x1A)
    /// Controls the digital low pass filter and external sync
    Config = 0x1A,

    /// Gyroscope Configuration register (0x1B)
    /// Full-scale range in bits 3-4
    GyroConfig = 0x1B,

    /// Accelerometer Configuration register (0x1C)
    /// Full-scale range in bits 3-4, self-test flags in the low bits
    AccelConfig = 0x1C,

    /// Motion Detection Threshold (1LSB = 2mg)
    MotionThreshold = 0x1F,

    /// Motion Detection Duration Counter
    MotionDuration = 0x20,

    /// Interrupt Pin Configuration register (0x37)
    /// Electrical behavior of the INT pin (polarity, drive, latching)
    IntPinCfg = 0x37,

    /// Interrupt Enable register (0x38)
    /// Controls which interrupt sources drive the INT pin
    IntEnable = 0x38,

    /// Interrupt Status register (0x3A)
    /// Indicates which interrupts have been triggered
    IntStatus = 0x3A,

    // Accelerometer Data Registers
    /// High byte of X-axis acceleration
    AccelX_H = 0x3B,
    /// Low byte of X-axis acceleration
    AccelX_L = 0x3C,
    /// High byte of Y-axis acceleration
    AccelY_H = 0x3D,
    /// Low byte of Y-axis acceleration
    AccelY_L = 0x3E,
    /// High byte of Z-axis acceleration
    AccelZ_H = 0x3F,
    /// Low byte of Z-axis acceleration
    AccelZ_L = 0x40,

    // Temperature Data Registers (not read by this driver)
    /// High byte of temperature reading
    TempOut_H = 0x41,
    /// Low byte of temperature reading
    TempOut_L = 0x42,

    // Gyroscope Data Registers
    /// High byte of X-axis angular rate
    GyroX_H = 0x43,
    /// Low byte of X-axis angular rate
    GyroX_L = 0x44,
    /// High byte of Y-axis angular rate
    GyroY_H = 0x45,
    /// Low byte of Y-axis angular rate
    GyroY_L = 0x46,
    /// High byte of Z-axis angular rate
    GyroZ_H = 0x47,
    /// Low byte of Z-axis angular rate
    GyroZ_L = 0x48,

    /// Motion Detection Status
    MotionDetectStatus = 0x61,

    /// Power Management 1 register (0x6B)
    /// Controls device power state, clock source, and reset
    PwrMgmt1 = 0x6B,

    /// Power Management 2 register (0x6C)
    /// Per-axis standby control (left at power-on defaults)
    PwrMgmt2 = 0x6C,

    /// Who Am I register (0x75)
    /// Fixed device identity, compared under [`WHO_AM_I_MASK`]
    WhoAmI = 0x75,
}

/// Bits of the identity byte that are stable across MPU-6050 variants.
/// Bit 0 mirrors the AD0 strap on some parts, so it is ignored.
pub const WHO_AM_I_MASK: u8 = 0b0111_1110;

/// Expected identity after masking.
pub const WHO_AM_I_VALUE: u8 = 0x68 & WHO_AM_I_MASK;
