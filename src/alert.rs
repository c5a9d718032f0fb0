//! Alert (INT pin) configuration.
//!
//! The MPU6050 routes its interrupt sources to a single INT pin. This
//! module describes the electrical behavior of that pin and which source
//! drives it. The driver configures the pin active-low and open-drain,
//! so the platform side should enable a pull-up and watch for the
//! falling edge.

use core::convert::Infallible;
use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::digital::Wait;

/// Which interrupt source drives the INT pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum AlertKind {
    /// Fires once per completed sensor register update
    DataReady,
    /// Fires when the hardware motion detector trips
    /// (see [`crate::motion::MotionConfig`])
    Movement,
}

impl AlertKind {
    /// The `IntEnable` bit for this source.
    pub const fn enable_mask(self) -> u8 {
        match self {
            Self::DataReady => 0b0000_0001,
            Self::Movement => 0b0100_0000,
        }
    }
}

/// Electrical configuration of the INT pin (`IntPinCfg` register).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AlertPinConfig {
    /// Active low (true) or active high (false)
    pub active_low: bool,
    /// Open-drain (true) or push-pull (false)
    pub open_drain: bool,
    /// Hold the pin asserted until the status register is read
    pub latching: bool,
    /// Clear the interrupt status on any register read instead of only
    /// on a status read
    pub clear_on_any_read: bool,
    /// Route the auxiliary I2C bus to the host when the master is idle
    pub bypass_enabled: bool,
}

impl Default for AlertPinConfig {
    /// Active-low, open-drain, non-latching, clear-on-any-read, bypass
    /// enabled. Register image `0b1101_0010`.
    fn default() -> Self {
        Self {
            active_low: true,
            open_drain: true,
            latching: false,
            clear_on_any_read: true,
            bypass_enabled: true,
        }
    }
}

impl AlertPinConfig {
    /// Pack into the `IntPinCfg` register image.
    pub const fn to_byte(self) -> u8 {
        let mut value = 0u8;
        if self.active_low {
            value |= 1 << 7;
        }
        if self.open_drain {
            value |= 1 << 6;
        }
        if self.latching {
            value |= 1 << 5;
        }
        if self.clear_on_any_read {
            value |= 1 << 4;
        }
        if self.bypass_enabled {
            value |= 1 << 1;
        }
        value
    }
}

/// Placeholder pin type for drivers constructed without an alert line.
///
/// Never actually polled or awaited; it only satisfies the pin parameter
/// of `Mpu6050` when no interrupt line is handed over.
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct NoAlertPin;

impl ErrorType for NoAlertPin {
    type Error = Infallible;
}

impl InputPin for NoAlertPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }
}

impl Wait for NoAlertPin {
    async fn wait_for_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_rising_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_falling_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_any_edge(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pin_config_matches_datasheet_image() {
        assert_eq!(AlertPinConfig::default().to_byte(), 0b1101_0010);
    }

    #[test]
    fn enable_masks() {
        assert_eq!(AlertKind::DataReady.enable_mask(), 0x01);
        assert_eq!(AlertKind::Movement.enable_mask(), 0x40);
    }
}
