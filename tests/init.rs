//! Construction paths: identity checking, reset sequencing, and alert
//! register setup.

mod common;

use common::*;
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::Mock as PinMock;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};
use mpu6050_driver::address::Address;
use mpu6050_driver::alert::AlertKind;
use mpu6050_driver::error::Error;
use mpu6050_driver::sensor::Mpu6050;

#[test]
fn open_succeeds_with_exact_identity() {
    let i2c = I2cMock::new(&trans_startup());
    let mut delay = NoopDelay::new();

    let sensor = Mpu6050::new(i2c, Address::default(), &mut delay).unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn open_tolerates_ad0_bit_in_identity() {
    // 0x69 & 0x7E == 0x68, so the alternate-address part still passes.
    let mut trans = vec![trans_who_am_i(0x69)];
    trans.extend(trans_reset());
    let i2c = I2cMock::new(&trans);
    let mut delay = NoopDelay::new();

    let sensor = Mpu6050::new(i2c, Address::from(0x69), &mut delay).unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}

#[test]
fn open_fails_on_identity_mismatch_without_reset_writes() {
    // Only the identity read may hit the bus.
    let i2c = I2cMock::new(&[trans_who_am_i(0x00)]);
    let mut delay = NoopDelay::new();

    let err = Mpu6050::new(i2c, Address::default(), &mut delay)
        .err()
        .unwrap();
    assert!(matches!(err.error, Error::UnexpectedDevice(0x00)));

    // The bus comes back inside the error for the caller to release.
    let mut i2c = err.i2c;
    i2c.done();
}

#[test]
fn open_with_alert_programs_interrupt_registers() {
    let mut trans = trans_startup();
    trans.extend(trans_alert_setup(0x01));
    let i2c = I2cMock::new(&trans);
    let mut delay = NoopDelay::new();
    let pin = PinMock::new(&[]);

    let sensor = Mpu6050::with_alert(
        i2c,
        Address::default(),
        &mut delay,
        pin,
        AlertKind::DataReady,
    )
    .unwrap();

    let (mut i2c, pin) = sensor.release_parts();
    i2c.done();
    pin.unwrap().done();
}

#[test]
fn open_with_movement_alert_selects_motion_source() {
    let mut trans = trans_startup();
    trans.extend(trans_alert_setup(0x40));
    let i2c = I2cMock::new(&trans);
    let mut delay = NoopDelay::new();
    let pin = PinMock::new(&[]);

    let sensor = Mpu6050::with_alert(
        i2c,
        Address::default(),
        &mut delay,
        pin,
        AlertKind::Movement,
    )
    .unwrap();

    let (mut i2c, pin) = sensor.release_parts();
    i2c.done();
    pin.unwrap().done();
}

#[test]
fn failed_alert_setup_returns_bus_and_line() {
    let mut trans = trans_startup();
    trans.push(
        I2cTrans::write(DEV_ADDR, vec![INT_PIN_CFG, 0b1101_0010]).with_error(ErrorKind::Other),
    );
    let i2c = I2cMock::new(&trans);
    let mut delay = NoopDelay::new();
    let pin = PinMock::new(&[]);

    let err = Mpu6050::with_alert(
        i2c,
        Address::default(),
        &mut delay,
        pin,
        AlertKind::DataReady,
    )
    .err()
    .unwrap();

    assert!(matches!(err.error, Error::WriteError(ErrorKind::Other)));

    // Both handles come back for a retry; done() also verifies the
    // IntEnable write never happened after the failure.
    let mut i2c = err.i2c;
    i2c.done();
    err.alert.unwrap().done();
}

#[test]
fn plain_open_leaves_interrupt_registers_alone() {
    // trans_startup() contains no INT register writes; done() would
    // panic on anything extra.
    let i2c = I2cMock::new(&trans_startup());
    let mut delay = NoopDelay::new();

    let sensor = Mpu6050::new(i2c, Address::default(), &mut delay).unwrap();

    let mut i2c = sensor.release();
    i2c.done();
}
