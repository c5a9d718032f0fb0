use crate::{
    accel::{Accel, AccelFullScale},
    address::Address,
    alert::{AlertKind, AlertPinConfig, NoAlertPin},
    clock_source::ClockSource,
    config::{DigitalLowPassFilter, SensorConfig},
    error::{Error, InitError},
    gyro::{Gyro, GyroFullScale},
    motion::{MotionConfig, MotionStatus},
    registers::{Register, WHO_AM_I_MASK, WHO_AM_I_VALUE},
    sample::Sample,
};
use embedded_hal::{delay::DelayNs, digital::InputPin, i2c::I2c};

/// `PwrMgmt1` bit that triggers a full device reset.
pub(crate) const DEVICE_RESET: u8 = 1 << 7;

/// Settling time after each half of the reset sequence.
pub(crate) const RESET_SETTLE_MS: u32 = 150;

/// InvenSense MPU-6050 Driver
///
/// Generic over the I2C peripheral and, optionally, the GPIO line wired
/// to the INT pin. Drivers built with [`Mpu6050::new`] hold no line and
/// leave the interrupt registers at their power-on defaults.
pub struct Mpu6050<I, P = NoAlertPin>
where
    I: I2c,
{
    i2c: I,
    address: u8,
    accel_scale: AccelFullScale,
    gyro_scale: GyroFullScale,
    alert: Option<P>,
}

impl<I> Mpu6050<I>
where
    I: I2c,
{
    /// Construct a new i2c driver for the MPU-6050.
    ///
    /// Verifies the device identity, then resets and wakes the device.
    /// The reset sequence blocks for two 150 ms settling periods.
    pub fn new(i2c: I, address: Address, delay: &mut impl DelayNs) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            accel_scale: AccelFullScale::default(),
            gyro_scale: GyroFullScale::default(),
            alert: None,
        };

        if let Err(error) = sensor.initialize(delay) {
            Err(InitError {
                error,
                i2c: sensor.i2c,
                alert: None,
            })
        } else {
            Ok(sensor)
        }
    }
}

impl<I, P> Mpu6050<I, P>
where
    I: I2c,
{
    /// Construct a driver that owns the GPIO line wired to the INT pin.
    ///
    /// On top of the plain [`Mpu6050::new`] sequence this configures the
    /// INT pin active-low/open-drain and enables the interrupt source
    /// selected by `kind`. The line should be a pulled-up input; the
    /// platform sees a falling edge when the source fires.
    pub fn with_alert(
        i2c: I,
        address: Address,
        delay: &mut impl DelayNs,
        pin: P,
        kind: AlertKind,
    ) -> Result<Self, InitError<I, P>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            accel_scale: AccelFullScale::default(),
            gyro_scale: GyroFullScale::default(),
            alert: Some(pin),
        };

        let init = sensor
            .initialize(delay)
            .and_then(|()| sensor.configure_alert_pin(AlertPinConfig::default(), kind));
        if let Err(error) = init {
            let Self { i2c, alert, .. } = sensor;
            Err(InitError { error, i2c, alert })
        } else {
            Ok(sensor)
        }
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    /// The alert line, if any, is dropped before the bus is handed back.
    pub fn release(self) -> I {
        let Self { i2c, alert, .. } = self;
        drop(alert);
        i2c
    }

    /// Like [`release`](Self::release), but also returns the alert line.
    pub fn release_parts(self) -> (I, Option<P>) {
        (self.i2c, self.alert)
    }

    /// Identity check followed by the reset/wake sequence.
    /// An identity mismatch aborts before any register is written.
    fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I::Error>> {
        let id = self.read_register(Register::WhoAmI)?;
        if id & WHO_AM_I_MASK != WHO_AM_I_VALUE {
            return Err(Error::UnexpectedDevice(id));
        }

        self.write_register(Register::PwrMgmt1, DEVICE_RESET)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.write_register(Register::PwrMgmt1, ClockSource::Xgyro as u8)?;
        delay.delay_ms(RESET_SETTLE_MS);
        Ok(())
    }

    pub(crate) fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I::Error>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I::Error>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|e| Error::WriteError(e))
    }

    pub(crate) fn read_register(&mut self, reg: Register) -> Result<u8, Error<I::Error>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf)?;
        Ok(buf[0])
    }

    pub(crate) fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I::Error>> {
        self.read(&[reg as u8], buf)?;
        Ok(buf)
    }

    pub(crate) fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I::Error>> {
        self.write(&[reg as u8, value])
    }

    /// Apply a sparse set of settings; absent fields leave the device
    /// untouched.
    pub fn configure(&mut self, config: &SensorConfig) -> Result<(), Error<I::Error>> {
        if let Some(scale) = config.accel_scale {
            self.set_accel_full_scale(scale)?;
        }
        if let Some(scale) = config.gyro_scale {
            self.set_gyro_full_scale(scale)?;
        }
        if let Some(div) = config.sample_rate_divider {
            self.set_sample_rate_divider(div)?;
        }
        if let Some(filter) = config.low_pass_filter {
            self.set_digital_lowpass_filter(filter)?;
        }
        Ok(())
    }

    pub fn set_accel_full_scale(&mut self, scale: AccelFullScale) -> Result<(), Error<I::Error>> {
        self.write_register(Register::AccelConfig, scale.to_register())?;
        self.accel_scale = scale;
        Ok(())
    }

    pub fn set_gyro_full_scale(&mut self, scale: GyroFullScale) -> Result<(), Error<I::Error>> {
        self.write_register(Register::GyroConfig, scale.to_register())?;
        self.gyro_scale = scale;
        Ok(())
    }

    pub fn set_sample_rate_divider(&mut self, div: u8) -> Result<(), Error<I::Error>> {
        self.write_register(Register::SmpRtDiv, div)
    }

    pub fn set_digital_lowpass_filter(
        &mut self,
        filter: DigitalLowPassFilter,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::Config, filter as u8)
    }

    /// The accelerometer range the driver last wrote (or the power-on
    /// default).
    pub fn accel_full_scale(&self) -> AccelFullScale {
        self.accel_scale
    }

    /// The gyroscope range the driver last wrote (or the power-on
    /// default).
    pub fn gyro_full_scale(&self) -> GyroFullScale {
        self.gyro_scale
    }

    /// Raw accelerometer counts.
    pub fn accel(&mut self) -> Result<Accel, Error<I::Error>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data)?;
        Ok(Accel::from_bytes(data))
    }

    /// Raw gyroscope counts.
    pub fn gyro(&mut self) -> Result<Gyro, Error<I::Error>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data)?;
        Ok(Gyro::from_bytes(data))
    }

    /// Read all six axes and convert to physical units (m/s² and °/s)
    /// using the currently configured ranges. Two block reads per call,
    /// nothing cached.
    pub fn sample(&mut self) -> Result<Sample, Error<I::Error>> {
        let accel = self.accel()?;
        let gyro = self.gyro()?;
        Ok(Sample::from_raw(
            accel,
            self.accel_scale,
            gyro,
            self.gyro_scale,
        ))
    }

    /// Program the INT pin electrical behavior and interrupt source.
    pub fn configure_alert_pin(
        &mut self,
        config: AlertPinConfig,
        kind: AlertKind,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::IntPinCfg, config.to_byte())?;
        self.write_register(Register::IntEnable, kind.enable_mask())
    }

    /// Mask every interrupt source.
    pub fn disable_alert(&mut self) -> Result<(), Error<I::Error>> {
        self.write_register(Register::IntEnable, 0x00)
    }

    /// Read the interrupt status register and clear it.
    pub fn alert_read_clear(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(Register::IntStatus)
    }

    /// Program the hardware motion detector backing
    /// [`AlertKind::Movement`].
    pub fn configure_motion_detection(
        &mut self,
        config: &MotionConfig,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::MotionThreshold, config.threshold)?;
        self.write_register(Register::MotionDuration, config.duration)
    }

    pub fn motion_status(&mut self) -> Result<MotionStatus, Error<I::Error>> {
        let value = self.read_register(Register::MotionDetectStatus)?;
        Ok(MotionStatus::from(value))
    }
}

impl<I, P> Mpu6050<I, P>
where
    I: I2c,
    P: InputPin,
{
    /// Poll the alert line. The INT pin is programmed active-low, so the
    /// line reads low while an enabled source is asserted. Returns
    /// `Ok(false)` when the driver holds no line.
    pub fn alert_asserted(&mut self) -> Result<bool, P::Error> {
        match self.alert.as_mut() {
            Some(pin) => pin.is_low(),
            None => Ok(false),
        }
    }
}
