//! This is a platform-agnostic Rust driver for the Bosch BMP085 barometric pressure and
//! temperature sensor using the [`embedded-hal`] or [`embedded-hal-async`] traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async
//!
//! This driver allows you to:
//! - Check the chip ID and read the factory calibration.
//! - Read raw (uncompensated) temperature and pressure at any oversampling setting.
//! - Read compensated temperature in 0.1 °C or °C and pressure in Pa.
//! - Derive altitude without `powf`:
//!   - a float Taylor series for any sea-level pressure, in mm or m,
//!   - integer-only approximations at standard sea-level pressure, in mm or in 16-bit dm.
//! - blocking API support.
//! - async API support.
//!
//! The compensation ([`Calibration`]) and altitude ([`altitude`]) math is also usable on its
//! own, for example to post-process raw values logged elsewhere.
//!
//! ## Features
//!
//! - `async`: Enables async API ([`Bmp085Async`]).
//! - `blocking`: Enables blocking API ([`Bmp085`]).
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//! - `altitude-extra-precision`: Adds third-order terms to the altitude approximations.
//!
//! Datasheet:
//!   [BMP085](https://www.sparkfun.com/datasheets/Components/General/BST-BMP085-DS000-05.pdf)
//!
//! ## Async Example:
//!
//! ```ignore
//! use bmp085::{Bmp085Async, Oversampling, STANDARD_SEA_LEVEL_PA};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal_async::i2c::I2c instance */;
//! let delay = /* embedded_hal_async::delay::DelayNs instance */;
//!
//! let mut bmp085 = Bmp085Async::new(i2c, delay, Oversampling::UltraHighRes);
//! bmp085.init().await.unwrap();
//!
//! let measurement = bmp085.read_measurement().await.unwrap();
//! println!("{:.1} °C, {} Pa", measurement.centigrade(), measurement.pressure_pa);
//! println!("{:.2} m", bmp085.read_altitude(STANDARD_SEA_LEVEL_PA).await.unwrap());
//! ```
//!
//! ## Blocking Example:
//!
//! ```ignore
//! use bmp085::{Bmp085, Oversampling};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! let mut bmp085 = Bmp085::new(i2c, delay, Oversampling::Standard);
//! bmp085.init().unwrap();
//!
//! loop {
//!     // integer only, decimetres above standard sea level
//!     let altitude_dm = bmp085.read_altitude_std_dm().unwrap();
//!     println!("{} dm", altitude_dm);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![no_std]

cfg_if::cfg_if! {
    if #[cfg(not(any(feature = "async", feature = "blocking")))] {
        compile_error!("At least one of \"async\" and \"blocking\" features must be enabled");
    } else if #[cfg(all(feature = "defmt", feature = "log"))] {
        compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");
    }
}

pub mod altitude;
#[cfg(feature = "blocking")]
mod blocking_impl;
mod compensation;
#[cfg(feature = "async")]
mod device_impl;
mod hw_def;
mod logging;
#[cfg(test)]
mod test_utils;
mod types;

pub use crate::{compensation::Calibration, hw_def::*, types::*};
