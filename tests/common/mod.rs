#![allow(dead_code)]

use embedded_hal_mock::eh1::i2c::Transaction as I2cTrans;

pub const DEV_ADDR: u8 = 0x68;

pub const WHO_AM_I: u8 = 0x75;
pub const PWR_MGMT_1: u8 = 0x6B;
pub const SMPLRT_DIV: u8 = 0x19;
pub const DLPF_CONFIG: u8 = 0x1A;
pub const GYRO_CONFIG: u8 = 0x1B;
pub const ACCEL_CONFIG: u8 = 0x1C;
pub const INT_PIN_CFG: u8 = 0x37;
pub const INT_ENABLE: u8 = 0x38;
pub const INT_STATUS: u8 = 0x3A;
pub const ACCEL_XOUT_H: u8 = 0x3B;
pub const GYRO_XOUT_H: u8 = 0x43;
pub const MOT_THR: u8 = 0x1F;
pub const MOT_DUR: u8 = 0x20;
pub const MOT_DETECT_STATUS: u8 = 0x61;

pub fn trans_who_am_i(response: u8) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![WHO_AM_I], vec![response])
}

/// Reset command, then the wake command selecting the X-gyro clock.
pub fn trans_reset() -> Vec<I2cTrans> {
    vec![
        I2cTrans::write(DEV_ADDR, vec![PWR_MGMT_1, 0x80]),
        I2cTrans::write(DEV_ADDR, vec![PWR_MGMT_1, 0x01]),
    ]
}

/// The full transaction stream of a successful plain construction.
pub fn trans_startup() -> Vec<I2cTrans> {
    let mut trans = vec![trans_who_am_i(0x68)];
    trans.extend(trans_reset());
    trans
}

/// INT pin setup as written during `with_alert` for the data-ready source.
pub fn trans_alert_setup(enable_mask: u8) -> Vec<I2cTrans> {
    vec![
        I2cTrans::write(DEV_ADDR, vec![INT_PIN_CFG, 0b1101_0010]),
        I2cTrans::write(DEV_ADDR, vec![INT_ENABLE, enable_mask]),
    ]
}

pub fn trans_accel_read(bytes: [u8; 6]) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![ACCEL_XOUT_H], bytes.to_vec())
}

pub fn trans_gyro_read(bytes: [u8; 6]) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![GYRO_XOUT_H], bytes.to_vec())
}
