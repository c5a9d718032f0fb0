//! MPU6050 Asynchronous Driver Implementation
//!
//! Non-blocking mirror of the driver in `sensor.rs`, built on
//! embedded-hal-async. The one genuinely new operation is
//! [`Mpu6050::wait_for_alert`]: instead of polling the INT line, the
//! driver awaits its falling edge, which is how the data-ready or
//! motion event reaches the application on an async executor.

use crate::{
    accel::{Accel, AccelFullScale},
    address::Address,
    alert::{AlertKind, AlertPinConfig, NoAlertPin},
    clock_source::ClockSource,
    config::{DigitalLowPassFilter, SensorConfig},
    error::{AlertError, Error, InitError},
    gyro::{Gyro, GyroFullScale},
    motion::{MotionConfig, MotionStatus},
    registers::{Register, WHO_AM_I_MASK, WHO_AM_I_VALUE},
    sample::Sample,
    sensor::{DEVICE_RESET, RESET_SETTLE_MS},
};
use embedded_hal_async::{delay::DelayNs, digital::Wait, i2c::I2c};

/// InvenSense MPU-6050 Driver
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
    /// Verifies the device identity, then resets and wakes the device,
    /// yielding through the delay during the two 150 ms settling periods.
    pub async fn new(
        i2c: I,
        address: Address,
        delay: &mut impl DelayNs,
    ) -> Result<Self, InitError<I>> {
        let mut sensor = Self {
            i2c,
            address: address.into(),
            accel_scale: AccelFullScale::default(),
            gyro_scale: GyroFullScale::default(),
            alert: None,
        };

        if let Err(error) = sensor.initialize(delay).await {
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
    pub async fn with_alert(
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

        let init = match sensor.initialize(delay).await {
            Ok(()) => {
                sensor
                    .configure_alert_pin(AlertPinConfig::default(), kind)
                    .await
            }
            Err(error) => Err(error),
        };
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

    async fn initialize(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<I::Error>> {
        let id = self.read_register(Register::WhoAmI).await?;
        if id & WHO_AM_I_MASK != WHO_AM_I_VALUE {
            return Err(Error::UnexpectedDevice(id));
        }

        self.write_register(Register::PwrMgmt1, DEVICE_RESET).await?;
        delay.delay_ms(RESET_SETTLE_MS).await;
        self.write_register(Register::PwrMgmt1, ClockSource::Xgyro as u8)
            .await?;
        delay.delay_ms(RESET_SETTLE_MS).await;
        Ok(())
    }

    pub(crate) async fn read(
        &mut self,
        bytes: &[u8],
        response: &mut [u8],
    ) -> Result<(), Error<I::Error>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .await
            .map_err(|e| Error::WriteReadError(e))
    }

    pub(crate) async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I::Error>> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(|e| Error::WriteError(e))
    }

    pub(crate) async fn read_register(&mut self, reg: Register) -> Result<u8, Error<I::Error>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf).await?;
        Ok(buf[0])
    }

    pub(crate) async fn read_registers<'a>(
        &mut self,
        reg: Register,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], Error<I::Error>> {
        self.read(&[reg as u8], buf).await?;
        Ok(buf)
    }

    pub(crate) async fn write_register(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<I::Error>> {
        self.write(&[reg as u8, value]).await
    }

    /// Apply a sparse set of settings; absent fields leave the device
    /// untouched.
    pub async fn configure(&mut self, config: &SensorConfig) -> Result<(), Error<I::Error>> {
        if let Some(scale) = config.accel_scale {
            self.set_accel_full_scale(scale).await?;
        }
        if let Some(scale) = config.gyro_scale {
            self.set_gyro_full_scale(scale).await?;
        }
        if let Some(div) = config.sample_rate_divider {
            self.set_sample_rate_divider(div).await?;
        }
        if let Some(filter) = config.low_pass_filter {
            self.set_digital_lowpass_filter(filter).await?;
        }
        Ok(())
    }

    pub async fn set_accel_full_scale(
        &mut self,
        scale: AccelFullScale,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::AccelConfig, scale.to_register())
            .await?;
        self.accel_scale = scale;
        Ok(())
    }

    pub async fn set_gyro_full_scale(
        &mut self,
        scale: GyroFullScale,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::GyroConfig, scale.to_register())
            .await?;
        self.gyro_scale = scale;
        Ok(())
    }

    pub async fn set_sample_rate_divider(&mut self, div: u8) -> Result<(), Error<I::Error>> {
        self.write_register(Register::SmpRtDiv, div).await
    }

    pub async fn set_digital_lowpass_filter(
        &mut self,
        filter: DigitalLowPassFilter,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::Config, filter as u8).await
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
    pub async fn accel(&mut self) -> Result<Accel, Error<I::Error>> {
        let mut data = [0; 6];
        self.read_registers(Register::AccelX_H, &mut data).await?;
        Ok(Accel::from_bytes(data))
    }

    /// Raw gyroscope counts.
    pub async fn gyro(&mut self) -> Result<Gyro, Error<I::Error>> {
        let mut data = [0; 6];
        self.read_registers(Register::GyroX_H, &mut data).await?;
        Ok(Gyro::from_bytes(data))
    }

    /// Read all six axes and convert to physical units (m/s² and °/s)
    /// using the currently configured ranges. Two block reads per call,
    /// nothing cached.
    pub async fn sample(&mut self) -> Result<Sample, Error<I::Error>> {
        let accel = self.accel().await?;
        let gyro = self.gyro().await?;
        Ok(Sample::from_raw(
            accel,
            self.accel_scale,
            gyro,
            self.gyro_scale,
        ))
    }

    /// Program the INT pin electrical behavior and interrupt source.
    pub async fn configure_alert_pin(
        &mut self,
        config: AlertPinConfig,
        kind: AlertKind,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::IntPinCfg, config.to_byte())
            .await?;
        self.write_register(Register::IntEnable, kind.enable_mask())
            .await
    }

    /// Mask every interrupt source.
    pub async fn disable_alert(&mut self) -> Result<(), Error<I::Error>> {
        self.write_register(Register::IntEnable, 0x00).await
    }

    /// Read the interrupt status register and clear it.
    pub async fn alert_read_clear(&mut self) -> Result<u8, Error<I::Error>> {
        self.read_register(Register::IntStatus).await
    }

    /// Program the hardware motion detector backing
    /// [`AlertKind::Movement`].
    pub async fn configure_motion_detection(
        &mut self,
        config: &MotionConfig,
    ) -> Result<(), Error<I::Error>> {
        self.write_register(Register::MotionThreshold, config.threshold)
            .await?;
        self.write_register(Register::MotionDuration, config.duration)
            .await
    }

    pub async fn motion_status(&mut self) -> Result<MotionStatus, Error<I::Error>> {
        let value = self.read_register(Register::MotionDetectStatus).await?;
        Ok(MotionStatus::from(value))
    }
}

impl<I, P> Mpu6050<I, P>
where
    I: I2c,
    P: Wait,
{
    /// Await the falling edge on the alert line.
    ///
    /// Fails with [`AlertError::NotConfigured`] when the driver holds no
    /// line; construct with [`Mpu6050::with_alert`] to wire one up.
    pub async fn wait_for_alert(&mut self) -> Result<(), AlertError<P::Error>> {
        match self.alert.as_mut() {
            Some(pin) => pin.wait_for_falling_edge().await.map_err(AlertError::Pin),
            None => Err(AlertError::NotConfigured),
        }
    }
}
