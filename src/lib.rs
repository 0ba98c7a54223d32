//! AHT10 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the Aosong AHT10 I2C
//! temperature and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt` or `log`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for the bus
//! - [`DelayNs`] for the power-up, reset and busy-poll waits
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for the public types and logs through `defmt`
//! - `log`: Logs through the `log` facade
//!
//! The two logging features are mutually exclusive.
//!
//! # Busy polling
//! Every measurement polls the status byte until the sensor clears its busy
//! bit. By default there is no limit on the number of polls, so a sensor that
//! never goes idle blocks the caller forever. Set [`BusyWait::MaxPolls`] in the
//! [`Config`] to bound it.
//!
//! # Example
//!
//! ```ignore
//! let mut sensor = Aht10::new(i2c, delay)?;
//! let reading = sensor.measure()?;
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

// logging macros, declared before the modules that use them
mod fmt;

pub mod aht10;
pub mod config;
pub mod error;
pub mod reading;

pub use aht10::Aht10;
pub use config::{BusyWait, Config, DEFAULT_ADDRESS};
pub use error::Error;
pub use reading::{RawSample, Reading, SensorState, Status};
