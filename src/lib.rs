#![no_std]

pub mod accel;
pub mod address;
pub mod alert;
pub mod clock_source;
pub mod config;
pub mod error;
pub mod gyro;
pub mod motion;
pub mod registers;
pub mod sample;
pub mod sensor;
pub mod sensor_async;
